//! # Message Formatting
//!
//! Converts a raw chat message into a presentation-agnostic node tree.
//!
//! ## Pipeline
//!
//! 1. **Fence extraction** (`blocks::fences`): fenced code blocks are cut out
//!    of the whole message first. They are raw zones; nothing inside them is
//!    ever inline-parsed.
//! 2. **Line segmentation** (`blocks::builder`): the remaining text runs are
//!    classified line by line into headings, block quotes and paragraphs.
//! 3. **Inline parsing** (`inline`): each non-code line becomes a tree of
//!    styled [`InlineNode`]s.
//!
//! The whole pipeline is total. Anything that fails to close is literal text,
//! and [`Document::to_source`] rebuilds the exact input from the tree.

pub mod blocks;
pub mod document;
pub mod inline;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

pub use blocks::Block;
pub use document::Document;
pub use inline::InlineNode;

use crate::limits::Limits;

use blocks::{BlockBuilder, Segment, split_fences};

/// Formats messages with a fixed set of [`Limits`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    limits: Limits,
}

impl Formatter {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Formats `input` into a [`Document`]. Never fails.
    pub fn format(&self, input: &str) -> Document {
        let mut blocks = Vec::new();

        for segment in split_fences(input) {
            match segment {
                Segment::Code { language, body } => blocks.push(Block::CodeBlock {
                    language: language.map(str::to_owned),
                    body: body.to_owned(),
                }),
                Segment::Text(text) => {
                    let mut builder = BlockBuilder::new(&self.limits);
                    for line in text.split('\n') {
                        builder.push(line);
                    }
                    blocks.extend(builder.finish());
                }
            }
        }

        Document { blocks }
    }
}

/// Convenience: formats `input` with default [`Limits`].
pub fn format_message(input: &str) -> Document {
    Formatter::default().format(input)
}
