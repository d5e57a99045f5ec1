//! Form input sanitization and validation.

use thiserror::Error;

use crate::amount;

/// Why amount text cannot be used to generate records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount must be greater than zero (got {0:?})")]
    NotPositive(String),
}

/// Strip everything except digits and the first decimal point.
pub fn sanitize_amount(raw: &str) -> String {
    let mut seen_point = false;
    raw.chars()
        .filter(|&c| {
            if c == '.' {
                !std::mem::replace(&mut seen_point, true)
            } else {
                c.is_ascii_digit()
            }
        })
        .collect()
}

/// Check that amount text is non-empty and parses to a finite value > 0.
pub fn validate_amount(text: &str) -> Result<f64, AmountError> {
    if text.trim().is_empty() {
        return Err(AmountError::Empty);
    }
    let value = amount::parse_amount(text);
    if value > 0.0 {
        Ok(value)
    } else {
        Err(AmountError::NotPositive(text.to_string()))
    }
}
