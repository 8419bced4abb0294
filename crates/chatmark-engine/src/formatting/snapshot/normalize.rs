use std::fmt::Write;

use crate::formatting::{Block, Document, InlineNode, inline::kinds::Emphasis};

/// Renders a document as an indented outline, one node per line.
///
/// ```text
/// Paragraph
///   Text "hello "
///   Bold
///     Text "world"
/// ```
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Paragraph(children) => {
                line(&mut out, 0, "Paragraph");
                inline_outline(&mut out, 1, children);
            }
            Block::Heading { level, children } => {
                line(&mut out, 0, &format!("Heading({level})"));
                inline_outline(&mut out, 1, children);
            }
            Block::Blockquote(lines) => {
                line(&mut out, 0, "Blockquote");
                for l in lines {
                    line(&mut out, 1, "Line");
                    inline_outline(&mut out, 2, l);
                }
            }
            Block::CodeBlock { language, body } => {
                let lang = language.as_deref().unwrap_or("-");
                line(&mut out, 0, &format!("CodeBlock({lang}) {body:?}"));
            }
        }
    }
    out
}

fn inline_outline(out: &mut String, depth: usize, nodes: &[InlineNode]) {
    for node in nodes {
        if let Some((style, children)) = Emphasis::of(node) {
            line(out, depth, &format!("{style:?}"));
            inline_outline(out, depth + 1, children);
            continue;
        }
        let label = match node {
            InlineNode::Text(t) => format!("Text {t:?}"),
            InlineNode::Strikethrough(t) => format!("Strikethrough {t:?}"),
            InlineNode::Spoiler(t) => format!("Spoiler {t:?}"),
            InlineNode::InlineCode(t) => format!("InlineCode {t:?}"),
            InlineNode::Mention(target) => format!("Mention {target:?}"),
            InlineNode::LineBreak => "LineBreak".to_string(),
            other => format!("{other:?}"),
        };
        line(out, depth, &label);
    }
}

fn line(out: &mut String, depth: usize, label: &str) {
    // writing to a String cannot fail
    let _ = writeln!(out, "{:indent$}{label}", "", indent = depth * 2);
}
