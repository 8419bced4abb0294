use serde::Serialize;

use crate::formatting::inline::InlineNode;

/// Which character delimited an italic span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItalicMarker {
    Star,
    Underscore,
}

impl ItalicMarker {
    pub fn delimiter(self) -> &'static str {
        match self {
            ItalicMarker::Star => "*",
            ItalicMarker::Underscore => "_",
        }
    }
}

/// The recursive inline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    BoldItalic,
    Bold,
    UnderlineItalic,
    Underline,
    Italic(ItalicMarker),
}

impl Emphasis {
    /// Match order. Longer delimiters sharing a character come first so
    /// `***` is never read as `**` + `*`.
    pub const PRECEDENCE: [Emphasis; 6] = [
        Emphasis::BoldItalic,
        Emphasis::Bold,
        Emphasis::UnderlineItalic,
        Emphasis::Underline,
        Emphasis::Italic(ItalicMarker::Star),
        Emphasis::Italic(ItalicMarker::Underscore),
    ];

    /// Opening and closing delimiter (they are identical).
    pub fn delimiter(self) -> &'static str {
        match self {
            Emphasis::BoldItalic => "***",
            Emphasis::Bold => "**",
            Emphasis::UnderlineItalic => "___",
            Emphasis::Underline => "__",
            Emphasis::Italic(marker) => marker.delimiter(),
        }
    }

    /// Builds the node for this style around already-parsed children.
    pub fn wrap(self, children: Vec<InlineNode>) -> InlineNode {
        match self {
            Emphasis::BoldItalic => InlineNode::BoldItalic(children),
            Emphasis::Bold => InlineNode::Bold(children),
            Emphasis::UnderlineItalic => InlineNode::UnderlineItalic(children),
            Emphasis::Underline => InlineNode::Underline(children),
            Emphasis::Italic(marker) => InlineNode::Italic { marker, children },
        }
    }

    /// Inverse of [`wrap`](Self::wrap): the style and children of an emphasis node.
    pub fn of(node: &InlineNode) -> Option<(Emphasis, &[InlineNode])> {
        match node {
            InlineNode::BoldItalic(c) => Some((Emphasis::BoldItalic, c.as_slice())),
            InlineNode::Bold(c) => Some((Emphasis::Bold, c.as_slice())),
            InlineNode::UnderlineItalic(c) => Some((Emphasis::UnderlineItalic, c.as_slice())),
            InlineNode::Underline(c) => Some((Emphasis::Underline, c.as_slice())),
            InlineNode::Italic { marker, children } => {
                Some((Emphasis::Italic(*marker), children.as_slice()))
            }
            _ => None,
        }
    }
}
