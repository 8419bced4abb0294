use serde::Serialize;

use super::{
    blocks::{
        Block,
        kinds::{BlockQuote, CodeFence, Heading},
    },
    inline::{
        InlineNode, MentionTarget,
        kinds::{CodeSpan, Emphasis, LiteralStyle, Mention},
    },
};

/// Character used to mask spoiler text in [`Document::plain_text`].
pub const SPOILER_MASK: char = '█';

/// A formatted message: an ordered, immutable sequence of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Rebuilds the exact source text by re-inserting every consumed delimiter.
    ///
    /// Line blocks that follow each other were separated by one `\n` in the
    /// source; code blocks abut their neighbours directly.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        self.write_blocks(&mut out, |out, block| match block {
            Block::Paragraph(children) => write_source(out, children),
            Block::Heading { level, children } => {
                out.push_str(&Heading::marker(*level));
                write_source(out, children);
            }
            Block::Blockquote(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    out.push_str(BlockQuote::PREFIX);
                    write_source(out, line);
                }
            }
            Block::CodeBlock { language, body } => {
                out.push_str(CodeFence::FENCE);
                if let Some(lang) = language {
                    out.push_str(lang);
                    out.push('\n');
                }
                out.push_str(body);
                out.push_str(CodeFence::FENCE);
            }
        });
        out
    }

    /// Markup-free text for previews and notifications.
    ///
    /// Spoilers are masked one [`SPOILER_MASK`] per character; code is kept
    /// verbatim; mentions keep their `@`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_blocks(&mut out, |out, block| match block {
            Block::Paragraph(children) | Block::Heading { children, .. } => {
                write_plain(out, children);
            }
            Block::Blockquote(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    write_plain(out, line);
                }
            }
            Block::CodeBlock { body, .. } => out.push_str(body),
        });
        out
    }

    /// Every mention in document order. Code blocks and code spans hold none.
    pub fn mentions(&self) -> Vec<&MentionTarget> {
        let mut out = vec![];
        for block in &self.blocks {
            match block {
                Block::Paragraph(children) | Block::Heading { children, .. } => {
                    collect_mentions(children, &mut out);
                }
                Block::Blockquote(lines) => {
                    for line in lines {
                        collect_mentions(line, &mut out);
                    }
                }
                Block::CodeBlock { .. } => {}
            }
        }
        out
    }

    fn write_blocks(&self, out: &mut String, mut write: impl FnMut(&mut String, &Block)) {
        let mut prev_line_block = false;
        for block in &self.blocks {
            if prev_line_block && block.is_line_block() {
                out.push('\n');
            }
            write(out, block);
            prev_line_block = block.is_line_block();
        }
    }
}

fn write_source(out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        if let Some((style, children)) = Emphasis::of(node) {
            out.push_str(style.delimiter());
            write_source(out, children);
            out.push_str(style.delimiter());
            continue;
        }
        match node {
            InlineNode::Text(t) => out.push_str(t),
            InlineNode::Strikethrough(t) => wrap(out, LiteralStyle::Strikethrough.delimiter(), t),
            InlineNode::Spoiler(t) => wrap(out, LiteralStyle::Spoiler.delimiter(), t),
            InlineNode::InlineCode(t) => wrap(out, CodeSpan::TICK, t),
            InlineNode::Mention(target) => {
                out.push(Mention::SIGIL);
                out.push_str(target.token());
            }
            InlineNode::LineBreak => out.push('\n'),
            // emphasis handled above
            _ => {}
        }
    }
}

fn wrap(out: &mut String, delim: &str, body: &str) {
    out.push_str(delim);
    out.push_str(body);
    out.push_str(delim);
}

fn write_plain(out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        if let Some(children) = node.children() {
            write_plain(out, children);
            continue;
        }
        match node {
            InlineNode::Text(t) | InlineNode::Strikethrough(t) | InlineNode::InlineCode(t) => {
                out.push_str(t);
            }
            InlineNode::Spoiler(t) => out.extend(t.chars().map(|_| SPOILER_MASK)),
            InlineNode::Mention(target) => {
                out.push(Mention::SIGIL);
                out.push_str(target.token());
            }
            InlineNode::LineBreak => out.push('\n'),
            _ => {}
        }
    }
}

fn collect_mentions<'d>(nodes: &'d [InlineNode], out: &mut Vec<&'d MentionTarget>) {
    for node in nodes {
        match node {
            InlineNode::Mention(target) => out.push(target),
            other => {
                if let Some(children) = other.children() {
                    collect_mentions(children, out);
                }
            }
        }
    }
}
