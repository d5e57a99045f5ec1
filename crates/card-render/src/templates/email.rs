//! Inbox email card.

use paid_records::{format_amount, Kind, Variant, PLACEHOLDER_USERNAME};

use crate::palette::{self, EmailPalette};
use crate::scene::{Align, Disc, Edges, Element, Node, Rule, TextRun};

use super::HEADLINE;

pub const EMAIL_WIDTH: u32 = 600;
pub const EMAIL_MOBILE_WIDTH: u32 = 360;

pub const SENDER_NAME: &str = "Creator Payouts";
pub const SENDER_ADDRESS: &str = "<payouts@creator-payouts.example>";
const SENDER_INITIALS: &str = "CP";
const POSTAL_LINE: &str = "Creator Payouts Inc. 100 Market Street, Suite 500, San Francisco, CA 94105";

const DATE_FULL: &str = "18:07 (17 minutes ago)";
const DATE_SHORT: &str = "18:07";

/// An inbox view of a payout email addressed to `username`.
///
/// `Mobile` narrows the card and drops the header icons, the action glyphs,
/// the relative date suffix and the footer block. `DarkBlue` keeps the
/// default chrome under a dark-blue header band.
pub fn email_notification(amount: &str, username: &str, variant: Variant) -> Element {
    let colors = palette::email(variant);
    let formatted = format_amount(amount);
    let mobile = variant == Variant::Mobile;
    let greeting_name = if username.is_empty() {
        PLACEHOLDER_USERNAME
    } else {
        username
    };

    let (width, pad) = if mobile {
        (EMAIL_MOBILE_WIDTH, 16)
    } else {
        (EMAIL_WIDTH, 24)
    };

    Element::column()
        .with_class(Kind::Email.card_class())
        .width(width)
        .padding(Edges::all(pad))
        .gap(if mobile { 12 } else { 16 })
        .background(colors.card)
        .child(header(&colors, mobile))
        .child(sender_row(&colors, mobile))
        .child(Rule {
            thickness: 1,
            color: colors.rule,
        })
        .child(
            Element::column()
                .with_class("email-body-content")
                .gap(12)
                .child(
                    Element::row()
                        .with_class("logo-container")
                        .align(Align::Center)
                        .child(Disc::new(48, colors.accent).label(TextRun::new("$", 26.0, colors.accent_glyph))),
                )
                .child(TextRun::new(format!("Hey @{greeting_name},"), 15.0, colors.text))
                .child(TextRun::new(
                    format!("{formatted} has been deposited into your account from Creator Revenue Sharing."),
                    15.0,
                    colors.text,
                ))
                .child(TextRun::new("Thank you for creating with us.", 15.0, colors.text))
                .child(TextRun::new(SENDER_NAME, 15.0, colors.text))
                .child_if(!mobile, || footer(&colors, username)),
        )
}

fn header(colors: &EmailPalette, mobile: bool) -> Element {
    let subject = Element::row()
        .with_class("email-subject-line")
        .gap(10)
        .child(TextRun::new(HEADLINE, if mobile { 18.0 } else { 22.0 }, colors.subject))
        .child(
            Element::row()
                .with_class("inbox-badge")
                .padding(Edges::symmetric(2, 6))
                .radius(4)
                .background(colors.badge_bg)
                .child(TextRun::new("Inbox", 12.0, colors.badge_fg)),
        );

    let mut header = Element::row()
        .with_class("email-header")
        .align(Align::SpaceBetween)
        .child(subject)
        .child_if(!mobile, || {
            Element::row()
                .with_class("email-meta-icons")
                .gap(12)
                .child(Disc::new(18, colors.muted))
                .child(Disc::new(18, colors.muted))
                .into()
        });

    if let Some(band) = colors.header_band {
        header = header.background(band).padding(Edges::symmetric(10, 12)).radius(6);
    }
    header
}

fn sender_row(colors: &EmailPalette, mobile: bool) -> Element {
    let profile = Element::row()
        .with_class("sender-profile")
        .gap(10)
        .child(Disc::new(40, colors.accent).label(TextRun::new(SENDER_INITIALS, 15.0, colors.accent_glyph)))
        .child(
            Element::column()
                .with_class("sender-info")
                .gap(2)
                .child(
                    Element::row()
                        .gap(6)
                        .child(TextRun::new(SENDER_NAME, 14.0, colors.text))
                        .child_if(!mobile, || TextRun::new(SENDER_ADDRESS, 12.0, colors.muted).into()),
                )
                .child(TextRun::new("to me", 12.0, colors.muted)),
        );

    let date = Element::column()
        .with_class("email-date")
        .align(Align::End)
        .gap(6)
        .child(TextRun::new(if mobile { DATE_SHORT } else { DATE_FULL }, 12.0, colors.muted))
        .child_if(!mobile, || {
            Element::row()
                .with_class("action-icons")
                .gap(10)
                .child(Disc::new(12, colors.muted))
                .child(Disc::new(12, colors.muted))
                .child(Disc::new(12, colors.muted))
                .into()
        });

    Element::row()
        .with_class("email-sender-row")
        .align(Align::SpaceBetween)
        .child(profile)
        .child(date)
}

fn footer(colors: &EmailPalette, username: &str) -> Node {
    let recipient = if username.is_empty() {
        "you@example.com".to_string()
    } else {
        format!("{username}@example.com")
    };

    Element::column()
        .with_class("email-footer")
        .align(Align::Center)
        .padding(Edges {
            top: 20,
            ..Edges::default()
        })
        .gap(4)
        .child(TextRun::new(format!("This email was sent to {recipient}"), 12.0, colors.muted))
        .child(TextRun::new(POSTAL_LINE, 12.0, colors.muted))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_username_and_states_amount() {
        let card = email_notification("194.1599137", "jordan", Variant::Default);
        let text = card.text_content();
        assert!(text.contains("Hey @jordan,"));
        assert!(text.contains("$194.1599137 has been deposited"));
        assert!(text.contains("This email was sent to jordan@example.com"));
    }

    #[test]
    fn empty_username_uses_placeholder() {
        let text = email_notification("1", "", Variant::Default).text_content();
        assert!(text.contains("Hey @user,"));
        assert!(text.contains("you@example.com"));
    }

    #[test]
    fn default_shows_full_chrome() {
        let card = email_notification("1", "a", Variant::Default);
        assert_eq!(card.style.width, Some(EMAIL_WIDTH));
        assert!(card.find_by_class("email-meta-icons").is_some());
        assert!(card.find_by_class("action-icons").is_some());
        assert!(card.find_by_class("email-footer").is_some());
        assert!(card.text_content().contains(DATE_FULL));
    }

    #[test]
    fn mobile_strips_secondary_chrome() {
        let card = email_notification("1", "a", Variant::Mobile);
        assert_eq!(card.style.width, Some(EMAIL_MOBILE_WIDTH));
        assert!(card.find_by_class("email-meta-icons").is_none());
        assert!(card.find_by_class("action-icons").is_none());
        assert!(card.find_by_class("email-footer").is_none());
        let text = card.text_content();
        assert!(text.contains(DATE_SHORT));
        assert!(!text.contains("minutes ago"));
        assert!(text.contains("Hey @a,"));
    }

    #[test]
    fn dark_blue_keeps_content_with_header_band() {
        let default = email_notification("5", "a", Variant::Default);
        let dark = email_notification("5", "a", Variant::DarkBlue);
        assert_eq!(default.text_content(), dark.text_content());
        let band = dark.find_by_class("email-header").and_then(|h| h.style.background);
        assert_eq!(band, Some(palette::DARK_BLUE));
        assert!(default
            .find_by_class("email-header")
            .is_some_and(|h| h.style.background.is_none()));
    }
}
