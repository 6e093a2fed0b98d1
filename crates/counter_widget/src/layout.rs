//! Text layout of a render tree.
//!
//! [`layout`] turns a [`Node`] tree into a [`Frame`]: rows of styled spans and
//! the hit regions of every addressable button. A frame is derived from the
//! tree alone, so laying out the same tree twice yields the same frame.
//!
//! Rules:
//! - a container whose children are all text renders them on one row;
//! - consecutive buttons share one row, preceded by a blank row;
//! - every other child starts a new row.

use unicode_width::UnicodeWidthStr;

use crate::node::{Node, NodeKind, Tone};

const BUTTON_GAP: &str = "  ";

/// How a span should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    /// Text with the given tone.
    Text(Tone),
    /// A button label, possibly focused.
    Button {
        /// Whether the button has focus.
        focused: bool,
    },
    /// Spacing between elements.
    Gap,
}

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The text.
    pub text: String,
    /// Its style.
    pub style: SpanStyle,
}

/// The cells a button occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    /// Test hook of the button.
    pub test_id: String,
    /// Row, 0-indexed.
    pub row: u16,
    /// First column, inclusive.
    pub start: u16,
    /// Last column, exclusive.
    pub end: u16,
}

impl HitRegion {
    /// Whether the cell at (`x`, `y`) is inside the region.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        y == self.row && (self.start..self.end).contains(&x)
    }
}

/// A laid-out tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<Vec<Span>>,
    regions: Vec<HitRegion>,
}

impl Frame {
    /// The rows of spans.
    pub fn rows(&self) -> &[Vec<Span>] {
        &self.rows
    }

    /// The button hit regions.
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// The region under (`x`, `y`), if any.
    pub fn hit(&self, x: u16, y: u16) -> Option<&HitRegion> {
        self.regions.iter().find(|r| r.contains(x, y))
    }

    /// Rows as unstyled strings.
    pub fn plain_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|s| s.text.as_str()).collect())
            .collect()
    }

    fn next_row(&self) -> u16 {
        u16::try_from(self.rows.len()).unwrap_or(u16::MAX)
    }

    fn push_row(&mut self, spans: Vec<Span>) {
        self.rows.push(spans);
    }

    fn push_button_row(&mut self, buttons: &[Node]) {
        if !self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        let row = self.next_row();
        let mut spans = Vec::new();
        let mut col: usize = 0;
        for (i, button) in buttons.iter().enumerate() {
            let NodeKind::Button { label, focused } = button.kind() else {
                continue;
            };
            if i > 0 {
                spans.push(Span {
                    text: BUTTON_GAP.to_string(),
                    style: SpanStyle::Gap,
                });
                col += BUTTON_GAP.width();
            }
            let text = format!("[ {label} ]");
            let width = text.width();
            if let Some(id) = button.test_id() {
                self.regions.push(HitRegion {
                    test_id: id.to_string(),
                    row,
                    start: clamp_col(col),
                    end: clamp_col(col + width),
                });
            }
            spans.push(Span {
                text,
                style: SpanStyle::Button { focused: *focused },
            });
            col += width;
        }
        self.rows.push(spans);
    }
}

fn clamp_col(col: usize) -> u16 {
    u16::try_from(col).unwrap_or(u16::MAX)
}

/// Lay out a render tree.
pub fn layout(root: &Node) -> Frame {
    let mut frame = Frame::default();
    lay_out_block(root, &mut frame);
    frame
}

fn text_span(node: &Node) -> Option<Span> {
    match node.kind() {
        NodeKind::Text(text) => Some(Span {
            text: text.clone(),
            style: SpanStyle::Text(node.tone()),
        }),
        _ => None,
    }
}

fn lay_out_block(node: &Node, frame: &mut Frame) {
    match node.kind() {
        NodeKind::Text(_) => frame.push_row(text_span(node).into_iter().collect()),
        NodeKind::Button { .. } => frame.push_button_row(std::slice::from_ref(node)),
        NodeKind::Container => {
            let children = node.children();
            if !children.is_empty() && children.iter().all(|c| text_span(c).is_some()) {
                frame.push_row(children.iter().filter_map(text_span).collect());
                return;
            }

            let mut i = 0;
            while i < children.len() {
                if children[i].is_button() {
                    let start = i;
                    while i < children.len() && children[i].is_button() {
                        i += 1;
                    }
                    frame.push_button_row(&children[start..i]);
                } else {
                    lay_out_block(&children[i], frame);
                    i += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{CounterMsg, Message};

    fn noop() -> Message {
        Message::new(CounterMsg::Increment)
    }

    #[test]
    fn inline_text_container_is_one_row() {
        let tree = Node::container()
            .with_child(Node::text("a "))
            .with_child(Node::text("b").with_tone(Tone::Strong));
        let frame = layout(&tree);
        assert_eq!(frame.plain_lines(), vec!["a b".to_string()]);
        assert_eq!(frame.rows()[0][1].style, SpanStyle::Text(Tone::Strong));
    }

    #[test]
    fn buttons_share_a_row_after_a_blank_line() {
        let tree = Node::container()
            .with_child(Node::text("title"))
            .with_child(Node::button("One", noop).with_test_id("one"))
            .with_child(Node::button("Two", noop).with_test_id("two"));
        let frame = layout(&tree);
        assert_eq!(
            frame.plain_lines(),
            vec![
                "title".to_string(),
                String::new(),
                "[ One ]  [ Two ]".to_string()
            ]
        );
        assert_eq!(
            frame.regions(),
            &[
                HitRegion {
                    test_id: "one".into(),
                    row: 2,
                    start: 0,
                    end: 7
                },
                HitRegion {
                    test_id: "two".into(),
                    row: 2,
                    start: 9,
                    end: 16
                },
            ]
        );
    }

    #[test]
    fn hit_respects_region_bounds() {
        let tree = Node::container()
            .with_child(Node::button("One", noop).with_test_id("one"))
            .with_child(Node::button("Two", noop).with_test_id("two"));
        let frame = layout(&tree);
        assert_eq!(frame.hit(0, 0).map(|r| r.test_id.as_str()), Some("one"));
        assert_eq!(frame.hit(6, 0).map(|r| r.test_id.as_str()), Some("one"));
        assert!(frame.hit(7, 0).is_none());
        assert!(frame.hit(8, 0).is_none());
        assert_eq!(frame.hit(9, 0).map(|r| r.test_id.as_str()), Some("two"));
        assert!(frame.hit(9, 1).is_none());
    }

    #[test]
    fn buttons_without_hooks_have_no_region() {
        let tree = Node::container().with_child(Node::button("Anon", noop));
        let frame = layout(&tree);
        assert!(frame.regions().is_empty());
        assert_eq!(frame.plain_lines(), vec!["[ Anon ]".to_string()]);
    }

    #[test]
    fn empty_container_lays_out_nothing() {
        assert!(layout(&Node::container()).rows().is_empty());
    }
}
