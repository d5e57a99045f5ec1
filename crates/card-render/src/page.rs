//! The generator page: one wrapper per slot around each card.
//!
//! Every slot wrapper has id `screenshot-<slot>` and holds the card content
//! plus the overlay with the slot's action buttons. Captures locate the card
//! inside the wrapper rather than capturing the wrapper chrome.

use image::Rgba;
use paid_records::{DisplayRecord, Kind};

use crate::scene::{Align, Edges, Element, TextRun};
use crate::templates;

const BUTTON_BG: Rgba<u8> = Rgba([0x1d, 0x9b, 0xf0, 255]);
const BUTTON_FG: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Id of the wrapper element of `slot`.
pub fn slot_id(slot: usize) -> String {
    format!("screenshot-{slot}")
}

/// Render the full page for a record set.
pub fn render_page(records: &[DisplayRecord]) -> Element {
    records
        .iter()
        .enumerate()
        .fold(
            Element::column().with_class("grid-container").gap(24),
            |grid, (slot, record)| grid.child(slot_wrapper(slot, record)),
        )
}

fn slot_wrapper(slot: usize, record: &DisplayRecord) -> Element {
    Element::column()
        .with_id(slot_id(slot))
        .with_class("grid-item-wrapper")
        .gap(8)
        .child(
            Element::column()
                .with_class("grid-item-content")
                .child(templates::render_record(record)),
        )
        .child(
            Element::row()
                .with_class("grid-overlay")
                .gap(8)
                .align(Align::Center)
                .child(button("download-btn", "Download"))
                .child(button("copy-btn", "Copy")),
        )
}

fn button(class: &'static str, label: &str) -> Element {
    Element::row()
        .with_class(class)
        .padding(Edges::symmetric(6, 12))
        .radius(6)
        .background(BUTTON_BG)
        .child(TextRun::new(label, 14.0, BUTTON_FG))
}

/// Find the card element of `slot` for a record of `kind`.
///
/// Looks up the slot wrapper, then the card by class; falls back to the
/// wrapper's first element child. `None` when the slot does not exist.
pub fn locate_card(page: &Element, slot: usize, kind: Kind) -> Option<&Element> {
    let wrapper = page.find_by_id(&slot_id(slot))?;
    wrapper
        .find_by_class(kind.card_class())
        .or_else(|| wrapper.first_element_child())
}
