use crate::formatting::{Block, Document, InlineNode};

/// Validates formatter output invariants against the input it came from.
///
/// Asserts that:
/// - The document reconstructs `input` exactly
/// - Heading levels are within 1..=3
/// - Text nodes are non-empty, newline-free and never adjacent to another Text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(input: &str, doc: &Document) {
    let rebuilt = doc.to_source();
    assert!(
        rebuilt == input,
        "source not reconstructed:\n input: {input:?}\n built: {rebuilt:?}"
    );

    for block in &doc.blocks {
        match block {
            Block::Paragraph(children) => check_inline(children),
            Block::Heading { level, children } => {
                assert!(
                    (1..=3).contains(level),
                    "heading level out of range: {level}"
                );
                check_inline(children);
            }
            Block::Blockquote(lines) => {
                assert!(!lines.is_empty(), "block quote without lines");
                lines.iter().for_each(|l| check_inline(l));
            }
            Block::CodeBlock { .. } => {}
        }
    }
}

fn check_inline(nodes: &[InlineNode]) {
    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [InlineNode::Text(_), InlineNode::Text(_)]),
            "adjacent text nodes: {pair:?}"
        );
    }
    for node in nodes {
        if let InlineNode::Text(t) = node {
            assert!(!t.is_empty(), "empty text node");
            assert!(!t.contains('\n'), "text node spans a line break: {t:?}");
        }
        if let Some(children) = node.children() {
            assert!(!children.is_empty(), "styled node without children: {node:?}");
            check_inline(children);
        }
    }
}
