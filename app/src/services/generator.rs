//! Form state and the active record set.

use card_render::{render_page, Element};
use paid_records::{
    build_batch, default_records, sanitize_amount, validate_amount, AmountError, DisplayRecord,
    RecordSet,
};
use serde::{Deserialize, Serialize};

/// Form fields as shown to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub username: String,
    pub amount: String,
    pub can_generate: bool,
}

/// Partial form update; absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormUpdate {
    pub username: Option<String>,
    pub amount: Option<String>,
}

pub struct Generator {
    username: String,
    amount: String,
    records: RecordSet,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            username: String::new(),
            amount: String::new(),
            records: default_records(),
        }
    }
}

impl Generator {
    pub fn set_username(&mut self, text: &str) {
        self.username = text.to_string();
    }

    /// Store `text` with everything but digits and the first `.` removed.
    pub fn set_amount(&mut self, text: &str) {
        self.amount = sanitize_amount(text);
    }

    pub fn apply(&mut self, update: FormUpdate) {
        if let Some(username) = update.username {
            self.set_username(&username);
        }
        if let Some(amount) = update.amount {
            self.set_amount(&amount);
        }
    }

    pub fn can_generate(&self) -> bool {
        validate_amount(&self.amount).is_ok()
    }

    /// Replace the whole record set from the current form fields.
    ///
    /// On error the previous set is left untouched.
    pub fn generate(&mut self) -> Result<&RecordSet, AmountError> {
        self.records = build_batch(&self.amount, &self.username)?;
        Ok(&self.records)
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn record(&self, slot: usize) -> Option<&DisplayRecord> {
        self.records.get(slot)
    }

    /// The page tree for the current record set.
    pub fn page(&self) -> Element {
        render_page(&self.records)
    }

    pub fn form(&self) -> FormState {
        FormState {
            username: self.username.clone(),
            amount: self.amount.clone(),
            can_generate: self.can_generate(),
        }
    }
}
