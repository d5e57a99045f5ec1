//! Display record types.

use serde::Serialize;

use crate::amount;

/// Username shown when a record carries none.
pub const PLACEHOLDER_USERNAME: &str = "user";

/// Number of on-screen slots; the active record set always fills all of them.
pub const RECORD_SLOTS: usize = 4;

/// The full set of records shown at once. Index `i` is screen slot `i`.
pub type RecordSet = [DisplayRecord; RECORD_SLOTS];

/// Overall template structure of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    PushNotification,
    Email,
}

impl Kind {
    /// Class name of the card element a template of this kind produces.
    pub fn card_class(self) -> &'static str {
        match self {
            Self::PushNotification => "payment-notification",
            Self::Email => "email-notification",
        }
    }
}

/// Styling sub-mode within a kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Default,
    DarkBlue,
    Mobile,
}

/// One generated notification's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub amount: String,
    pub kind: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub variant: Variant,
}

impl DisplayRecord {
    pub fn push(amount: impl Into<String>, variant: Variant) -> Self {
        Self {
            amount: amount.into(),
            kind: Kind::PushNotification,
            username: None,
            variant,
        }
    }

    pub fn email(amount: impl Into<String>, username: impl Into<String>, variant: Variant) -> Self {
        Self {
            amount: amount.into(),
            kind: Kind::Email,
            username: Some(username.into()),
            variant,
        }
    }

    /// Username to display, falling back to [`PLACEHOLDER_USERNAME`].
    pub fn display_username(&self) -> &str {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(PLACEHOLDER_USERNAME)
    }

    /// Whether the amount parses to a finite value greater than zero.
    pub fn is_eligible(&self) -> bool {
        amount::parse_amount(&self.amount) > 0.0
    }

    /// Deterministic download name: `got-paid-<username>-<amount>.png`.
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced with `_` so the name
    /// is safe in a `Content-Disposition` header.
    pub fn download_filename(&self) -> String {
        self.filename_with(char::is_ascii_alphanumeric)
    }

    /// Like [`download_filename`](Self::download_filename) but keeps
    /// non-ASCII letters and digits, e.g. `got-paid-José-1.png`.
    pub fn unicode_filename(&self) -> String {
        self.filename_with(|c| c.is_alphanumeric())
    }

    fn filename_with(&self, keep: impl Fn(&char) -> bool) -> String {
        let safe = |part: &str| -> String {
            part.chars()
                .map(|c| if keep(&c) || matches!(c, '.' | '_' | '-') { c } else { '_' })
                .collect()
        };
        format!(
            "got-paid-{}-{}.png",
            safe(self.display_username()),
            safe(&self.amount)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_placeholder_without_username() {
        let record = DisplayRecord::push("310.61", Variant::DarkBlue);
        assert_eq!(record.download_filename(), "got-paid-user-310.61.png");
    }

    #[test]
    fn filename_uses_username() {
        let record = DisplayRecord::email("53.13", "jordan", Variant::Mobile);
        assert_eq!(record.download_filename(), "got-paid-jordan-53.13.png");
    }

    #[test]
    fn filename_replaces_unsafe_characters() {
        let record = DisplayRecord::email("1", "a/b \"c\"", Variant::Default);
        assert_eq!(record.download_filename(), "got-paid-a_b__c_-1.png");
    }

    #[test]
    fn unicode_filename_keeps_non_ascii_letters() {
        let record = DisplayRecord::email("1.5", "José/x", Variant::Default);
        assert_eq!(record.download_filename(), "got-paid-Jos__x-1.5.png");
        assert_eq!(record.unicode_filename(), "got-paid-José_x-1.5.png");
    }

    #[test]
    fn empty_username_falls_back_to_placeholder() {
        let record = DisplayRecord::email("1", "", Variant::Default);
        assert_eq!(record.display_username(), "user");
    }

    #[test]
    fn eligibility_requires_positive_amount() {
        assert!(DisplayRecord::push("0.01", Variant::Default).is_eligible());
        assert!(!DisplayRecord::push("0", Variant::Default).is_eligible());
        assert!(!DisplayRecord::push("", Variant::Default).is_eligible());
    }

    #[test]
    fn kinds_map_to_card_classes() {
        assert_eq!(Kind::Email.card_class(), "email-notification");
        assert_eq!(Kind::PushNotification.card_class(), "payment-notification");
    }

    #[test]
    fn serializes_with_snake_case_tags() {
        let record = DisplayRecord::push("2.34", Variant::DarkBlue);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "push_notification");
        assert_eq!(json["variant"], "dark_blue");
        assert!(json.get("username").is_none());
    }
}
