//! Building full record sets.

use crate::input::{self, AmountError};
use crate::record::{DisplayRecord, Kind, RecordSet, Variant, PLACEHOLDER_USERNAME};

/// The four canonical styles, in slot order.
pub const CANONICAL_STYLES: [(Kind, Variant); 4] = [
    (Kind::PushNotification, Variant::Default),
    (Kind::Email, Variant::Default),
    (Kind::Email, Variant::Mobile),
    (Kind::PushNotification, Variant::DarkBlue),
];

/// Illustrative records shown before the first generation.
pub fn default_records() -> RecordSet {
    [
        DisplayRecord::push("2.34", Variant::Default),
        DisplayRecord::email("194.1599137", "jordan", Variant::Default),
        DisplayRecord::push("310.61", Variant::DarkBlue),
        DisplayRecord::email("53.13", "sam", Variant::Mobile),
    ]
}

/// Build one record per canonical style from form input.
///
/// Email records carry `username`, or the placeholder when it is blank; push
/// records carry none. Fails without building anything when the amount is
/// not usable.
pub fn build_batch(amount: &str, username: &str) -> Result<RecordSet, AmountError> {
    input::validate_amount(amount)?;

    let username = username.trim();
    let username = if username.is_empty() {
        PLACEHOLDER_USERNAME
    } else {
        username
    };

    Ok(CANONICAL_STYLES.map(|(kind, variant)| match kind {
        Kind::PushNotification => DisplayRecord::push(amount, variant),
        Kind::Email => DisplayRecord::email(amount, username, variant),
    }))
}
