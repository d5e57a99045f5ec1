//! Scene tree produced by templates and consumed by layout.
//!
//! A small retained tree of styled elements, text runs and discs. Elements
//! carry an optional id and class so a capture can locate the card inside
//! the page the same way a DOM query would.

use image::Rgba;

pub type Color = Rgba<u8>;

/// Main axis children are stacked along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Column,
    Row,
}

/// Placement of children along the main axis (rows) or cross axis (columns).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Edges {
    pub const fn all(v: u32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub const fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub axis: Axis,
    pub align: Align,
    pub gap: u32,
    pub padding: Edges,
    /// Fixed outer width; `None` fills (columns) or shrinks to fit (rows).
    pub width: Option<u32>,
    pub background: Option<Color>,
    pub radius: u32,
}

/// A run of same-styled text, wrapped to the available width.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub size: f32,
    pub color: Color,
}

impl TextRun {
    pub fn new(text: impl Into<String>, size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            size,
            color,
        }
    }
}

/// Filled circle with an optional centered label (avatars, icons).
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    pub diameter: u32,
    pub fill: Color,
    pub label: Option<TextRun>,
}

impl Disc {
    pub fn new(diameter: u32, fill: Color) -> Self {
        Self {
            diameter,
            fill,
            label: None,
        }
    }

    pub fn label(mut self, label: TextRun) -> Self {
        self.label = Some(label);
        self
    }
}

/// Horizontal divider spanning the available width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub thickness: u32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(TextRun),
    Disc(Disc),
    Rule(Rule),
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<TextRun> for Node {
    fn from(t: TextRun) -> Self {
        Node::Text(t)
    }
}

impl From<Disc> for Node {
    fn from(d: Disc) -> Self {
        Node::Disc(d)
    }
}

impl From<Rule> for Node {
    fn from(r: Rule) -> Self {
        Node::Rule(r)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub id: Option<String>,
    pub class: Option<&'static str>,
    pub style: Style,
    pub children: Vec<Node>,
}

impl Element {
    pub fn column() -> Self {
        Self::default()
    }

    pub fn row() -> Self {
        let mut e = Self::default();
        e.style.axis = Axis::Row;
        e
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.style.align = align;
        self
    }

    pub fn gap(mut self, gap: u32) -> Self {
        self.style.gap = gap;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.style.radius = radius;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child only when `cond` holds.
    pub fn child_if(self, cond: bool, node: impl FnOnce() -> Node) -> Self {
        if cond { self.child(node()) } else { self }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class == Some(class)
    }

    /// Depth-first search of this element and its descendants by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    /// Depth-first search of descendants (not `self`) by class.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.child_elements()
            .find_map(|c| if c.has_class(class) { Some(c) } else { c.find_by_class(class) })
    }

    pub fn first_element_child(&self) -> Option<&Element> {
        self.child_elements().next()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// All text in document order, including disc labels, joined by spaces.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        collect_text(self, &mut parts);
        parts.join(" ")
    }
}

fn collect_text<'a>(el: &'a Element, out: &mut Vec<&'a str>) {
    for node in &el.children {
        match node {
            Node::Element(e) => collect_text(e, out),
            Node::Text(t) => out.push(&t.text),
            Node::Disc(d) => {
                if let Some(label) = &d.label {
                    out.push(&label.text);
                }
            }
            Node::Rule(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Rgba([0, 0, 0, 255]);

    fn sample() -> Element {
        Element::column()
            .with_id("root")
            .child(
                Element::row()
                    .with_class("outer")
                    .child(Element::column().with_class("inner").child(TextRun::new("deep", 10.0, BLACK))),
            )
            .child(TextRun::new("top", 10.0, BLACK))
    }

    #[test]
    fn find_by_id_includes_self() {
        let root = sample();
        assert!(root.find_by_id("root").is_some());
        assert!(root.find_by_id("missing").is_none());
    }

    #[test]
    fn find_by_class_searches_descendants_only() {
        let root = sample().with_class("self");
        assert!(root.find_by_class("self").is_none());
        assert_eq!(root.find_by_class("inner").map(|e| e.text_content()), Some("deep".into()));
    }

    #[test]
    fn first_element_child_skips_text() {
        let el = Element::column()
            .child(TextRun::new("t", 10.0, BLACK))
            .child(Element::row().with_class("first"));
        assert!(el.first_element_child().is_some_and(|e| e.has_class("first")));
    }

    #[test]
    fn text_content_is_document_order() {
        assert_eq!(sample().text_content(), "deep top");
    }

    #[test]
    fn child_if_skips_when_false() {
        let el = Element::column().child_if(false, || TextRun::new("x", 1.0, BLACK).into());
        assert!(el.children.is_empty());
    }
}
