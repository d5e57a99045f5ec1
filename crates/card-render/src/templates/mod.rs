//! Notification card templates.
//!
//! Each template is a pure function from record fields to an element tree.
//! Identical inputs always produce identical trees; the only time shown is a
//! fixed display string.

pub mod email;
pub mod push;

use paid_records::{DisplayRecord, Kind};

use crate::scene::Element;

pub use email::email_notification;
pub use push::push_notification;

/// Headline shared by both card kinds.
pub const HEADLINE: &str = "You got paid!";

/// Render the card for one record.
pub fn render_record(record: &DisplayRecord) -> Element {
    match record.kind {
        Kind::PushNotification => push_notification(&record.amount, record.variant),
        Kind::Email => email_notification(
            &record.amount,
            record.username.as_deref().unwrap_or_default(),
            record.variant,
        ),
    }
}
