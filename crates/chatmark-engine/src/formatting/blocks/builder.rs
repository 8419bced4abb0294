use crate::formatting::inline::{InlineNode, parse_inline_with_limits};
use crate::limits::Limits;

use super::{
    classify::{LineClass, classify},
    types::Block,
};

#[derive(Debug)]
enum OpenBlock {
    None,
    Paragraph(Vec<InlineNode>),
    Quote(Vec<Vec<InlineNode>>),
}

/// Line-driven block state machine for one text run.
///
/// Quote lines accumulate into an open `Blockquote`, plain lines (blank ones
/// included) into an open `Paragraph`. A heading, or a line of the other
/// accumulating kind, flushes whatever is open.
#[derive(Debug)]
pub struct BlockBuilder<'l> {
    limits: &'l Limits,
    open: OpenBlock,
    out: Vec<Block>,
}

impl<'l> BlockBuilder<'l> {
    pub fn new(limits: &'l Limits) -> Self {
        Self {
            limits,
            open: OpenBlock::None,
            out: vec![],
        }
    }

    /// Feeds one line, without its trailing newline.
    pub fn push(&mut self, line: &str) {
        match classify(line) {
            LineClass::Quote { rest } => {
                let children = self.inline(rest);
                match &mut self.open {
                    OpenBlock::Quote(lines) => lines.push(children),
                    _ => {
                        self.flush();
                        self.open = OpenBlock::Quote(vec![children]);
                    }
                }
            }
            LineClass::Heading { level, rest } => {
                self.flush();
                let children = self.inline(rest);
                self.out.push(Block::Heading { level, children });
            }
            LineClass::Plain(text) => {
                let children = self.inline(text);
                match &mut self.open {
                    OpenBlock::Paragraph(existing) => {
                        existing.push(InlineNode::LineBreak);
                        existing.extend(children);
                    }
                    _ => {
                        self.flush();
                        self.open = OpenBlock::Paragraph(children);
                    }
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // end-of-run flush
        self.flush();
        self.out
    }

    fn inline(&self, text: &str) -> Vec<InlineNode> {
        parse_inline_with_limits(text, self.limits)
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None => {}
            OpenBlock::Paragraph(children) => self.out.push(Block::Paragraph(children)),
            OpenBlock::Quote(lines) => self.out.push(Block::Blockquote(lines)),
        }
    }
}
