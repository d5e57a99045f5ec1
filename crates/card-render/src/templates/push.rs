//! Push notification card.

use paid_records::{format_amount, Kind, Variant};

use crate::palette;
use crate::scene::{Align, Disc, Edges, Element, TextRun};

use super::HEADLINE;

pub const PUSH_WIDTH: u32 = 360;

/// A single notification banner: icon, headline, and the amount sentence.
///
/// The variant changes colors only; content and structure are fixed.
pub fn push_notification(amount: &str, variant: Variant) -> Element {
    let colors = palette::push(variant);
    let formatted = format_amount(amount);

    Element::row()
        .with_class(Kind::PushNotification.card_class())
        .width(PUSH_WIDTH)
        .padding(Edges::all(14))
        .gap(12)
        .align(Align::Start)
        .background(colors.card)
        .radius(18)
        .child(
            Element::row()
                .with_class("notification-icon")
                .child(Disc::new(40, colors.icon_fill).label(TextRun::new("$", 22.0, colors.icon_glyph))),
        )
        .child(
            Element::column()
                .with_class("notification-content")
                .gap(4)
                .child(
                    Element::row()
                        .with_class("notification-header")
                        .child(TextRun::new(HEADLINE, 16.0, colors.title)),
                )
                .child(
                    Element::column().with_class("notification-body").child(TextRun::new(
                        format!("{formatted} has been deposited into your account."),
                        14.0,
                        colors.body,
                    )),
                ),
        )
}
