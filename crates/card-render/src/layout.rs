//! Box layout of a scene tree into positioned paint commands.
//!
//! Columns stack children vertically and stretch child elements to the
//! available width; rows place children side by side at their natural
//! width and center them on the cross axis. Text wraps to whatever width
//! its parent leaves it.

use crate::glyphs::{wrap_text, Glyphs};
use crate::scene::{Align, Axis, Color, Element, Node, TextRun};

/// Width given to a root element without a fixed width.
pub const DEFAULT_ROOT_WIDTH: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Fill { rect: Rect, color: Color, radius: u32 },
    Disc { cx: i32, cy: i32, radius: u32, color: Color },
    Text { x: i32, y: i32, size: f32, color: Color, text: String },
}

/// A laid out tree flattened into paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<PaintCommand>,
}

impl Frame {
    /// Text of every text command, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Lay out `root` and flatten it into paint commands.
pub fn layout(root: &Element, glyphs: &dyn Glyphs) -> Frame {
    let avail = root.style.width.unwrap_or(DEFAULT_ROOT_WIDTH);
    let laid = lay_element(root, avail, true, glyphs);
    let mut commands = Vec::new();
    paint(&laid, 0, 0, &mut commands);
    Frame {
        width: laid.width,
        height: laid.height,
        commands,
    }
}

struct Laid {
    width: u32,
    height: u32,
    body: LaidBody,
}

enum LaidBody {
    Element {
        background: Option<Color>,
        radius: u32,
        children: Vec<(i32, i32, Laid)>,
    },
    Text {
        lines: Vec<String>,
        size: f32,
        color: Color,
        line_height: u32,
    },
    Disc {
        fill: Color,
        label: Option<(TextRun, u32, u32)>,
    },
    Rule {
        color: Color,
    },
}

fn lay_node(node: &Node, avail: u32, fill: bool, glyphs: &dyn Glyphs) -> Laid {
    match node {
        Node::Element(el) => lay_element(el, avail, fill, glyphs),
        Node::Text(run) => {
            let lines = wrap_text(glyphs, run.size, &run.text, avail);
            let line_height = glyphs.line_height(run.size);
            let width = lines
                .iter()
                .map(|l| glyphs.text_width(l, run.size))
                .max()
                .unwrap_or(0);
            Laid {
                width,
                height: line_height * lines.len() as u32,
                body: LaidBody::Text {
                    lines,
                    size: run.size,
                    color: run.color,
                    line_height,
                },
            }
        }
        Node::Disc(disc) => {
            let label = disc.label.as_ref().map(|run| {
                let w = glyphs.text_width(&run.text, run.size);
                let h = glyphs.line_height(run.size);
                (run.clone(), w, h)
            });
            Laid {
                width: disc.diameter,
                height: disc.diameter,
                body: LaidBody::Disc {
                    fill: disc.fill,
                    label,
                },
            }
        }
        Node::Rule(rule) => Laid {
            width: avail,
            height: rule.thickness,
            body: LaidBody::Rule { color: rule.color },
        },
    }
}

fn lay_element(el: &Element, avail: u32, fill: bool, glyphs: &dyn Glyphs) -> Laid {
    let style = &el.style;
    let pad = style.padding;
    let fixed = style.width.map(|w| w.min(avail));
    let inner_avail = fixed.unwrap_or(avail).saturating_sub(pad.horizontal());
    let n = el.children.len() as u32;
    let gaps = style.gap * n.saturating_sub(1);

    let (width, height, children) = match style.axis {
        Axis::Column => {
            let kid_fill = fill || fixed.is_some();
            let kids: Vec<Laid> = el
                .children
                .iter()
                .map(|c| lay_node(c, inner_avail, kid_fill, glyphs))
                .collect();
            let content_w = kids.iter().map(|k| k.width).max().unwrap_or(0);
            let content_h = kids.iter().map(|k| k.height).sum::<u32>() + gaps;
            let width = outer_width(fixed, fill, avail, content_w + pad.horizontal());
            let inner_w = width.saturating_sub(pad.horizontal());

            let mut y = pad.top as i32;
            let mut placed = Vec::with_capacity(kids.len());
            for kid in kids {
                let slack = inner_w.saturating_sub(kid.width);
                let dx = match style.align {
                    Align::Center => slack / 2,
                    Align::End => slack,
                    Align::Start | Align::SpaceBetween => 0,
                };
                let next_y = y + (kid.height + style.gap) as i32;
                placed.push((pad.left as i32 + dx as i32, y, kid));
                y = next_y;
            }
            (width, content_h + pad.vertical(), placed)
        }
        Axis::Row => {
            let mut used = 0u32;
            let mut kids = Vec::with_capacity(el.children.len());
            for (i, child) in el.children.iter().enumerate() {
                let spent = used + style.gap * i as u32;
                let kid = lay_node(child, inner_avail.saturating_sub(spent), false, glyphs);
                used += kid.width;
                kids.push(kid);
            }
            let content_w = used + gaps;
            let content_h = kids.iter().map(|k| k.height).max().unwrap_or(0);
            let width = outer_width(fixed, fill, avail, content_w + pad.horizontal());
            let inner_w = width.saturating_sub(pad.horizontal());
            let slack = inner_w.saturating_sub(content_w);

            let (mut x, spacing) = match style.align {
                Align::Start => (0, style.gap),
                Align::Center => (slack / 2, style.gap),
                Align::End => (slack, style.gap),
                Align::SpaceBetween if kids.len() > 1 => {
                    (0, style.gap + slack / (kids.len() as u32 - 1))
                }
                Align::SpaceBetween => (0, style.gap),
            };

            let mut placed = Vec::with_capacity(kids.len());
            for kid in kids {
                let dy = (content_h - kid.height) / 2;
                let next_x = x + kid.width + spacing;
                placed.push(((pad.left + x) as i32, (pad.top + dy) as i32, kid));
                x = next_x;
            }
            (width, content_h + pad.vertical(), placed)
        }
    };

    Laid {
        width,
        height,
        body: LaidBody::Element {
            background: style.background,
            radius: style.radius,
            children,
        },
    }
}

fn outer_width(fixed: Option<u32>, fill: bool, avail: u32, natural: u32) -> u32 {
    match fixed {
        Some(w) => w,
        None if fill => avail,
        None => natural.min(avail),
    }
}

fn paint(laid: &Laid, x: i32, y: i32, out: &mut Vec<PaintCommand>) {
    match &laid.body {
        LaidBody::Element {
            background,
            radius,
            children,
        } => {
            if let Some(color) = background {
                out.push(PaintCommand::Fill {
                    rect: Rect {
                        x,
                        y,
                        width: laid.width,
                        height: laid.height,
                    },
                    color: *color,
                    radius: *radius,
                });
            }
            for (dx, dy, child) in children {
                paint(child, x + dx, y + dy, out);
            }
        }
        LaidBody::Text {
            lines,
            size,
            color,
            line_height,
        } => {
            for (i, line) in lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                out.push(PaintCommand::Text {
                    x,
                    y: y + (i as u32 * line_height) as i32,
                    size: *size,
                    color: *color,
                    text: line.clone(),
                });
            }
        }
        LaidBody::Disc { fill, label } => {
            let r = laid.width / 2;
            out.push(PaintCommand::Disc {
                cx: x + r as i32,
                cy: y + r as i32,
                radius: r,
                color: *fill,
            });
            if let Some((run, w, h)) = label {
                out.push(PaintCommand::Text {
                    x: x + (laid.width as i32 - *w as i32) / 2,
                    y: y + (laid.height as i32 - *h as i32) / 2,
                    size: run.size,
                    color: run.color,
                    text: run.text.clone(),
                });
            }
        }
        LaidBody::Rule { color } => out.push(PaintCommand::Fill {
            rect: Rect {
                x,
                y,
                width: laid.width,
                height: laid.height,
            },
            color: *color,
            radius: 0,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::BlockGlyphs;
    use crate::scene::{Disc, Edges, Rule};
    use image::Rgba;

    const INK: Color = Rgba([0, 0, 0, 255]);
    const PAPER: Color = Rgba([250, 250, 250, 255]);

    #[test]
    fn fixed_width_root_sets_frame_width() {
        let root = Element::column()
            .width(200)
            .padding(Edges::all(10))
            .child(TextRun::new("hi", 20.0, INK));
        let frame = layout(&root, &BlockGlyphs);
        assert_eq!(frame.width, 200);
        // 20px text -> 25px line + 2 * 10 padding
        assert_eq!(frame.height, 45);
    }

    #[test]
    fn column_stacks_with_gap() {
        let root = Element::column()
            .width(100)
            .gap(5)
            .child(TextRun::new("a", 20.0, INK))
            .child(TextRun::new("b", 20.0, INK));
        let frame = layout(&root, &BlockGlyphs);
        assert_eq!(frame.height, 25 + 5 + 25);
        let ys: Vec<i32> = frame
            .commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Text { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![0, 30]);
    }

    #[test]
    fn text_wraps_to_available_width() {
        let root = Element::column()
            .width(80)
            .child(TextRun::new("aaa bbb ccc", 20.0, INK));
        let frame = layout(&root, &BlockGlyphs);
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["aaa bbb", "ccc"]);
        assert_eq!(frame.height, 50);
    }

    #[test]
    fn background_painted_before_children() {
        let root = Element::column()
            .width(100)
            .background(PAPER)
            .radius(8)
            .child(TextRun::new("x", 20.0, INK));
        let frame = layout(&root, &BlockGlyphs);
        assert!(matches!(
            frame.commands[0],
            PaintCommand::Fill { radius: 8, color, .. } if color == PAPER
        ));
        assert!(matches!(frame.commands[1], PaintCommand::Text { .. }));
    }

    #[test]
    fn row_space_between_pushes_last_child_to_the_edge() {
        let root = Element::row()
            .width(200)
            .align(Align::SpaceBetween)
            .child(TextRun::new("ab", 20.0, INK))
            .child(TextRun::new("cd", 20.0, INK));
        let frame = layout(&root, &BlockGlyphs);
        let xs: Vec<i32> = frame
            .commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Text { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![0, 180]);
    }

    #[test]
    fn row_centers_children_vertically() {
        let root = Element::row()
            .width(200)
            .child(Disc::new(40, INK))
            .child(TextRun::new("x", 20.0, INK));
        let frame = layout(&root, &BlockGlyphs);
        assert_eq!(frame.height, 40);
        let text_y = frame.commands.iter().find_map(|c| match c {
            PaintCommand::Text { y, .. } => Some(*y),
            _ => None,
        });
        // (40 - 25) / 2
        assert_eq!(text_y, Some(7));
    }

    #[test]
    fn disc_label_is_centered() {
        let root = Element::row().width(100).child(
            Disc::new(40, INK).label(TextRun::new("AB", 16.0, PAPER)),
        );
        let frame = layout(&root, &BlockGlyphs);
        assert_eq!(
            frame.commands,
            vec![
                PaintCommand::Disc { cx: 20, cy: 20, radius: 20, color: INK },
                PaintCommand::Text {
                    x: 12,
                    y: 10,
                    size: 16.0,
                    color: PAPER,
                    text: "AB".into(),
                },
            ]
        );
    }

    #[test]
    fn column_center_alignment_offsets_children() {
        let root = Element::column()
            .width(100)
            .align(Align::Center)
            .child(TextRun::new("ab", 20.0, INK));
        let frame = layout(&root, &BlockGlyphs);
        assert!(matches!(frame.commands[0], PaintCommand::Text { x: 40, .. }));
    }

    #[test]
    fn rule_spans_available_width() {
        let root = Element::column()
            .width(120)
            .padding(Edges::symmetric(0, 10))
            .child(Rule { thickness: 1, color: INK });
        let frame = layout(&root, &BlockGlyphs);
        assert!(matches!(
            frame.commands[0],
            PaintCommand::Fill { rect: Rect { x: 10, width: 100, height: 1, .. }, .. }
        ));
    }

    #[test]
    fn layout_is_deterministic() {
        let root = Element::column()
            .width(150)
            .child(TextRun::new("same input same frame", 14.0, INK));
        assert_eq!(layout(&root, &BlockGlyphs), layout(&root, &BlockGlyphs));
    }
}
