//! Colors per template kind and variant.

use image::Rgba;
use paid_records::{Kind, Variant};

use crate::scene::Color;

pub const WHITE: Color = Rgba([255, 255, 255, 255]);
pub const NEAR_BLACK: Color = Rgba([0x11, 0x11, 0x11, 255]);
pub const DARK_BLUE: Color = Rgba([0x0b, 0x1e, 0x3f, 255]);

/// Canvas color behind a captured card.
pub fn capture_background(kind: Kind, variant: Variant) -> Color {
    match (kind, variant) {
        (Kind::Email, _) => WHITE,
        (Kind::PushNotification, Variant::DarkBlue) => DARK_BLUE,
        (Kind::PushNotification, _) => NEAR_BLACK,
    }
}

pub struct PushPalette {
    pub card: Color,
    pub title: Color,
    pub body: Color,
    pub icon_fill: Color,
    pub icon_glyph: Color,
}

pub fn push(variant: Variant) -> PushPalette {
    match variant {
        Variant::DarkBlue => PushPalette {
            card: Rgba([0x16, 0x2d, 0x57, 255]),
            title: WHITE,
            body: Rgba([0xc9, 0xd6, 0xee, 255]),
            icon_fill: Rgba([0x3b, 0x82, 0xf6, 255]),
            icon_glyph: WHITE,
        },
        // Mobile has no push styling of its own.
        Variant::Default | Variant::Mobile => PushPalette {
            card: Rgba([0x26, 0x26, 0x28, 255]),
            title: WHITE,
            body: Rgba([0xd1, 0xd1, 0xd6, 255]),
            icon_fill: Rgba([0x22, 0xc5, 0x5e, 255]),
            icon_glyph: WHITE,
        },
    }
}

pub struct EmailPalette {
    pub card: Color,
    pub header_band: Option<Color>,
    pub subject: Color,
    pub badge_bg: Color,
    pub badge_fg: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_glyph: Color,
    pub rule: Color,
}

pub fn email(variant: Variant) -> EmailPalette {
    let base = EmailPalette {
        card: WHITE,
        header_band: None,
        subject: Rgba([0x1f, 0x1f, 0x1f, 255]),
        badge_bg: Rgba([0xe8, 0xea, 0xed, 255]),
        badge_fg: Rgba([0x44, 0x47, 0x46, 255]),
        text: Rgba([0x1f, 0x1f, 0x1f, 255]),
        muted: Rgba([0x5f, 0x63, 0x68, 255]),
        accent: Rgba([0x0f, 0x14, 0x19, 255]),
        accent_glyph: WHITE,
        rule: Rgba([0xe0, 0xe0, 0xe0, 255]),
    };
    match variant {
        Variant::DarkBlue => EmailPalette {
            header_band: Some(DARK_BLUE),
            subject: WHITE,
            badge_bg: Rgba([0x2a, 0x44, 0x73, 255]),
            badge_fg: WHITE,
            accent: DARK_BLUE,
            ..base
        },
        Variant::Default | Variant::Mobile => base,
    }
}
