//! Paginated element generation.
//!
//! Walks the parsed content tree and emits an ordered sequence of drawable
//! elements for the page writer. Each top-level node maps to exactly one
//! element: inline runs flatten into attributed spans of a single element, a
//! list is one element regardless of item count, and a blockquote collapses
//! to one element however many blocks it contains. Pagination itself
//! (page-break computation) happens downstream; order is all that matters
//! here.

use crate::content::{Node, Run, parse, runs_text};
use crate::style::{PageStyles, TextStyle};

/// A drawable element of paginated output.
///
/// Carries its resolved [`TextStyle`] so the page writer never consults the
/// template again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(tag = "type", rename_all = "snake_case"))]
pub enum Element {
    Heading {
        level: u8,
        spans: Vec<Run>,
        style: TextStyle,
    },
    Paragraph {
        spans: Vec<Run>,
        style: TextStyle,
    },
    List {
        ordered: bool,
        items: Vec<Vec<Run>>,
        /// Left indent in points.
        indent: f32,
        style: TextStyle,
    },
    Blockquote {
        /// One entry per flattened inner block, in document order.
        paragraphs: Vec<Vec<Run>>,
        style: TextStyle,
    },
}

impl Element {
    /// Concatenated plain text of the element, in document order.
    pub fn text(&self) -> String {
        match self {
            Element::Heading { spans, .. } | Element::Paragraph { spans, .. } => runs_text(spans),
            Element::List { items, .. } => items
                .iter()
                .map(|item| runs_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
            Element::Blockquote { paragraphs, .. } => paragraphs
                .iter()
                .map(|runs| runs_text(runs))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Convert rich-text chapter content into drawable elements.
///
/// Empty or whitespace-only content yields an empty vec, never an error.
pub fn to_elements(html: &str, styles: &PageStyles) -> Vec<Element> {
    parse(html)
        .into_iter()
        .map(|node| node_to_element(node, styles))
        .collect()
}

fn node_to_element(node: Node, styles: &PageStyles) -> Element {
    match node {
        Node::Heading { level, runs } => Element::Heading {
            level,
            spans: runs,
            style: styles.heading(level),
        },
        Node::Paragraph { runs } => Element::Paragraph {
            spans: runs,
            style: styles.paragraph.clone(),
        },
        Node::List { ordered, items } => Element::List {
            ordered,
            items,
            indent: styles.list_indent,
            style: styles.paragraph.clone(),
        },
        Node::Blockquote { children } => {
            let mut paragraphs = Vec::new();
            flatten_quote(children, &mut paragraphs);
            Element::Blockquote {
                paragraphs,
                style: styles.blockquote.clone(),
            }
        }
    }
}

/// Flatten blockquote children into run lists, one per inner block.
fn flatten_quote(children: Vec<Node>, out: &mut Vec<Vec<Run>>) {
    for child in children {
        match child {
            Node::Heading { runs, .. } | Node::Paragraph { runs } => out.push(runs),
            Node::List { items, .. } => out.extend(items),
            Node::Blockquote { children } => flatten_quote(children, out),
        }
    }
}
