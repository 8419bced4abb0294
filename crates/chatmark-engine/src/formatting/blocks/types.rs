use serde::Serialize;

use crate::formatting::inline::InlineNode;

/// A top-level structural unit of a formatted message.
///
/// Blocks never nest. Every variant except `CodeBlock` holds inline-parsed
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// Consecutive plain lines. Line boundaries (including blank lines) are
    /// kept as [`InlineNode::LineBreak`] children.
    Paragraph(Vec<InlineNode>),
    /// A `#`, `##` or `###` line.
    Heading {
        /// Number of leading `#` characters (1..=3).
        level: u8,
        children: Vec<InlineNode>,
    },
    /// Consecutive `> ` lines, one inline sequence per line.
    Blockquote(Vec<Vec<InlineNode>>),
    /// A fenced code block. Raw zone: the body is verbatim.
    CodeBlock {
        /// Info token from the opening line, present only when the token was
        /// directly followed by a newline (which is then not part of `body`).
        language: Option<String>,
        /// Everything up to the closing fence. For a bare fence this starts
        /// with the newline that ends the opening line.
        body: String,
    },
}

impl Block {
    /// True for blocks produced from lines of a text run (everything but code).
    pub fn is_line_block(&self) -> bool {
        !matches!(self, Block::CodeBlock { .. })
    }
}
