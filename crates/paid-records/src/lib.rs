//! Domain records for forged payment notifications.
//!
//! Provides the display record model, amount formatting, form input
//! sanitization, and construction of the fixed four-slot record set.

pub mod amount;
pub mod batch;
pub mod input;
pub mod record;

pub use amount::{format_amount, parse_amount};
pub use batch::{build_batch, default_records, CANONICAL_STYLES};
pub use input::{sanitize_amount, validate_amount, AmountError};
pub use record::{DisplayRecord, Kind, RecordSet, Variant, PLACEHOLDER_USERNAME, RECORD_SLOTS};
