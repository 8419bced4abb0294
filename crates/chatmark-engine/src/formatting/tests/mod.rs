//! Integration tests for the formatting module.
//!
//! Outline snapshots pin the node tree shape; every case also runs the
//! invariant checks so reconstruction is verified alongside.


use pretty_assertions::assert_eq;

use crate::formatting::{
    Block, Formatter, InlineNode, format_message, inline::ItalicMarker, snapshot,
};
use crate::limits::Limits;

fn formatted(input: &str) -> crate::formatting::Document {
    let doc = format_message(input);
    snapshot::invariants(input, &doc);
    doc
}

fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.to_string())
}

#[test]
fn empty_message_has_no_blocks() {
    assert!(formatted("").is_empty());
}

#[test]
fn plain_text_is_one_paragraph_with_one_text_leaf() {
    let input = "just some words, nothing special";
    assert_eq!(
        formatted(input).blocks,
        vec![Block::Paragraph(vec![text(input)])]
    );
}

#[test]
fn bold_with_nested_italic() {
    assert_eq!(
        formatted("**a *b* c**").blocks,
        vec![Block::Paragraph(vec![InlineNode::Bold(vec![
            text("a "),
            InlineNode::Italic {
                marker: ItalicMarker::Star,
                children: vec![text("b")],
            },
            text(" c"),
        ])])]
    );
}

#[test]
fn strikethrough_does_not_parse_inner_markup() {
    assert_eq!(
        formatted("~~**b**~~").blocks,
        vec![Block::Paragraph(vec![InlineNode::Strikethrough(
            "**b**".into()
        )])]
    );
}

#[test]
fn unmatched_delimiter_produces_no_italic() {
    let doc = formatted("*unclosed");
    assert_eq!(doc.blocks, vec![Block::Paragraph(vec![text("*unclosed")])]);
}

#[test]
fn fence_is_isolated_from_inline_parsing() {
    let doc = formatted("`x` ```js\ncode\n``` more");
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    Paragraph
      InlineCode "x"
      Text " "
    CodeBlock(js) "code\n"
    Paragraph
      Text " more"
    "#);

    let code_blocks: Vec<_> = doc
        .blocks
        .iter()
        .filter(|b| matches!(b, Block::CodeBlock { .. }))
        .collect();
    assert_eq!(
        code_blocks,
        vec![&Block::CodeBlock {
            language: Some("js".into()),
            body: "code\n".into(),
        }]
    );
}

#[test]
fn fence_body_markup_is_never_parsed() {
    let doc = formatted("```\n**not bold** @nobody\n```");
    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            language: None,
            body: "\n**not bold** @nobody\n".into(),
        }]
    );
    assert!(doc.mentions().is_empty());
}

#[test]
fn unclosed_fence_is_literal_paragraph_text() {
    assert_eq!(
        formatted("```js\nlet x = 1;").blocks,
        vec![Block::Paragraph(vec![
            text("```js"),
            InlineNode::LineBreak,
            text("let x = 1;"),
        ])]
    );
}

#[test]
fn mixed_message_outline() {
    let doc = formatted(
        "# Release notes\n> **big** change\n> ping @here\nthanks ||team||\n\n~~old~~ _new_",
    );
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    Heading(1)
      Text "Release notes"
    Blockquote
      Line
        Bold
          Text "big"
        Text " change"
      Line
        Text "ping "
        Mention Here
    Paragraph
      Text "thanks "
      Spoiler "team"
      LineBreak
      LineBreak
      Strikethrough "old"
      Text " "
      Italic(Underscore)
        Text "new"
    "#);
}

#[test]
fn blank_lines_do_not_split_paragraphs() {
    let doc = formatted("first\n\n\nsecond");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(
        doc.blocks[0],
        Block::Paragraph(vec![
            text("first"),
            InlineNode::LineBreak,
            InlineNode::LineBreak,
            InlineNode::LineBreak,
            text("second"),
        ])
    );
}

#[test]
fn headings_beyond_level_three_are_text() {
    assert_eq!(
        formatted("#### four").blocks,
        vec![Block::Paragraph(vec![text("#### four")])]
    );
}

#[test]
fn depth_limit_is_configurable() {
    let formatter = Formatter::new(Limits {
        max_inline_depth: 2,
        ..Limits::default()
    });
    let input = "**a __b *c* d__ e**";
    let doc = formatter.format(input);
    snapshot::invariants(input, &doc);
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    Paragraph
      Bold
        Text "a "
        Underline
          Text "b *c* d"
        Text " e"
    "#);
}

#[test]
fn plain_text_masks_spoilers_and_drops_markup() {
    let doc = formatted("**hi** @ann, the answer is ||42|| `x`\n> quoted");
    assert_eq!(
        doc.plain_text(),
        "hi @ann, the answer is ██ x\nquoted"
    );
}

#[test]
fn plain_text_keeps_code_blocks_verbatim() {
    let doc = formatted("see:```sh\nls *```done");
    assert_eq!(doc.plain_text(), "see:ls *done");
}

#[test]
fn mentions_are_listed_in_order_outside_code() {
    let doc = formatted("# @ann\n> __@bob__ and `@not`\n@everyone\n```@nope```");
    let tokens: Vec<_> = doc.mentions().iter().map(|m| m.token()).collect();
    assert_eq!(tokens, vec!["ann", "bob", "everyone"]);
}
