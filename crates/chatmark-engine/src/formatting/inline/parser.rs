use crate::limits::Limits;

use super::{
    closers::Closers,
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, LiteralStyle, Mention},
    types::{InlineNode, MentionTarget},
};

/// Parses one line into a sequence of [`InlineNode`]s with default limits.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    parse_inline_with_limits(s, &Limits::default())
}

/// Parses one line (no embedded newline) into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// Code spans are checked first and suppress all other parsing inside them.
/// Then the emphasis styles in [`Emphasis::PRECEDENCE`] order, the literal
/// styles, and finally mentions.
///
/// # Returns
/// Nodes covering the entire input. Text between constructs, and every
/// delimiter that does not close, is emitted as `InlineNode::Text`.
pub fn parse_inline_with_limits(s: &str, limits: &Limits) -> Vec<InlineNode> {
    parse_level(s, 0, limits)
}

fn parse_level(s: &str, depth: usize, limits: &Limits) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut closers = Closers::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
        if !text.is_empty() {
            out.push(InlineNode::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse_construct(&mut cur, &mut closers, depth, limits) {
            flush_text(&mut out, cur.slice(text_start, start));
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, cur.slice(text_start, cur.pos()));
    out
}

/// Tries every construct at the cursor, in precedence order.
fn try_parse_construct<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'a>,
    depth: usize,
    limits: &Limits,
) -> Option<InlineNode> {
    if !cur.peek().is_some_and(opens_construct) {
        return None;
    }
    if let Some(node) = try_parse_code_span(cur, closers) {
        return Some(node);
    }
    for style in Emphasis::PRECEDENCE {
        if let Some(node) = try_parse_emphasis(cur, closers, style, depth, limits) {
            return Some(node);
        }
    }
    for style in LiteralStyle::PRECEDENCE {
        if let Some(node) = try_parse_literal(cur, closers, style) {
            return Some(node);
        }
    }
    try_parse_mention(cur)
}

/// Whether `c` is the first character of any construct's opener.
fn opens_construct(c: char) -> bool {
    let first = |d: &str| d.starts_with(c);
    first(CodeSpan::TICK)
        || Emphasis::PRECEDENCE.iter().any(|e| first(e.delimiter()))
        || LiteralStyle::PRECEDENCE.iter().any(|l| first(l.delimiter()))
        || c == Mention::SIGIL
}

/// Matches `delim body delim` at the cursor with the nearest close.
///
/// The body must be non-empty and must not start with the delimiter's own
/// character, so runs like `` ``` `` or `****` stay literal instead of
/// wrapping a lone delimiter.
///
/// On success the cursor is moved past the closing delimiter and the body is
/// returned. On failure the cursor is untouched.
fn try_delimited<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'a>,
    delim: &'static str,
) -> Option<&'a str> {
    if !cur.starts_with(delim) {
        return None;
    }
    let body_start = cur.pos() + delim.len();
    let first = cur.rest()[delim.len()..].chars().next()?;
    if delim.starts_with(first) {
        return None;
    }
    let close = closers.find(delim, body_start + first.len_utf8())?;

    let body = cur.slice(body_start, close);
    cur.jump_to(close + delim.len());
    Some(body)
}

fn try_parse_code_span<'a>(cur: &mut Cursor<'a>, closers: &mut Closers<'a>) -> Option<InlineNode> {
    let body = try_delimited(cur, closers, CodeSpan::TICK)?;
    Some(InlineNode::InlineCode(body.to_string()))
}

fn try_parse_emphasis<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'a>,
    style: Emphasis,
    depth: usize,
    limits: &Limits,
) -> Option<InlineNode> {
    let body = try_delimited(cur, closers, style.delimiter())?;
    Some(style.wrap(parse_children(body, depth, limits)))
}

/// Recurses into an emphasis body, or keeps it literal past the depth cap.
fn parse_children(body: &str, depth: usize, limits: &Limits) -> Vec<InlineNode> {
    let next = depth + 1;
    if next >= limits.max_inline_depth {
        log::debug!(
            "inline depth cap {} reached, keeping {} bytes literal",
            limits.max_inline_depth,
            body.len()
        );
        return vec![InlineNode::Text(body.to_string())];
    }
    parse_level(body, next, limits)
}

fn try_parse_literal<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'a>,
    style: LiteralStyle,
) -> Option<InlineNode> {
    let body = try_delimited(cur, closers, style.delimiter())?;
    Some(style.wrap(body))
}

/// Attempts to parse `@token` at the cursor.
///
/// Requires a token boundary before the `@` and a non-empty token after it.
fn try_parse_mention(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Mention::SIGIL) || !Mention::starts_after(cur.prev_char()) {
        return None;
    }
    let token_start = Mention::SIGIL.len_utf8();
    let rest = cur.rest();
    let len = Mention::token_len(&rest[token_start..]);
    if len == 0 {
        return None;
    }

    let target = MentionTarget::from_token(&rest[token_start..token_start + len]);
    cur.bump_n(token_start + len);
    Some(InlineNode::Mention(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::inline::ItalicMarker;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineNode {
        InlineNode::Text(s.to_string())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn parse_empty_line() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline("run `cargo test` now"),
            vec![
                text("run "),
                InlineNode::InlineCode("cargo test".into()),
                text(" now"),
            ]
        );
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        assert_eq!(
            parse_inline("`**not bold**`"),
            vec![InlineNode::InlineCode("**not bold**".into())]
        );
    }

    #[test]
    fn bold_recurses_into_italic() {
        assert_eq!(
            parse_inline("**a *b* c**"),
            vec![InlineNode::Bold(vec![
                text("a "),
                InlineNode::Italic {
                    marker: ItalicMarker::Star,
                    children: vec![text("b")],
                },
                text(" c"),
            ])]
        );
    }

    #[test]
    fn strikethrough_body_stays_literal() {
        assert_eq!(
            parse_inline("~~**b**~~"),
            vec![InlineNode::Strikethrough("**b**".into())]
        );
    }

    #[test]
    fn spoiler_body_stays_literal() {
        assert_eq!(
            parse_inline("||secret *x*||"),
            vec![InlineNode::Spoiler("secret *x*".into())]
        );
    }

    #[test]
    fn underline_recurses_into_literal_styles() {
        assert_eq!(
            parse_inline("__a ~~b~~__"),
            vec![InlineNode::Underline(vec![
                text("a "),
                InlineNode::Strikethrough("b".into()),
            ])]
        );
    }

    #[test]
    fn triple_delimiters() {
        assert_eq!(
            parse_inline("***bi*** ___ui___"),
            vec![
                InlineNode::BoldItalic(vec![text("bi")]),
                text(" "),
                InlineNode::UnderlineItalic(vec![text("ui")]),
            ]
        );
    }

    #[test]
    fn mixed_underline_italic_nests() {
        let italic = InlineNode::Italic {
            marker: ItalicMarker::Star,
            children: vec![text("x")],
        };
        assert_eq!(
            parse_inline("__*x*__"),
            vec![InlineNode::Underline(vec![italic])]
        );
        assert_eq!(
            parse_inline("*__x__*"),
            vec![InlineNode::Italic {
                marker: ItalicMarker::Star,
                children: vec![InlineNode::Underline(vec![text("x")])],
            }]
        );
    }

    #[test]
    fn underscore_italic() {
        assert_eq!(
            parse_inline("_it_"),
            vec![InlineNode::Italic {
                marker: ItalicMarker::Underscore,
                children: vec![text("it")],
            }]
        );
    }

    #[test]
    fn unclosed_italic_becomes_text() {
        assert_eq!(parse_inline("*unclosed"), vec![text("*unclosed")]);
    }

    #[test]
    fn unclosed_code_span_becomes_text() {
        assert_eq!(parse_inline("`unclosed code"), vec![text("`unclosed code")]);
    }

    #[test]
    fn empty_bodies_are_text() {
        assert_eq!(parse_inline("~~~~ `` ||||"), vec![text("~~~~ `` ||||")]);
    }

    #[test]
    fn delimiter_runs_stay_literal() {
        assert_eq!(parse_inline("```js"), vec![text("```js")]);
        assert_eq!(parse_inline("****"), vec![text("****")]);
    }

    #[test]
    fn extra_delimiter_is_left_outside() {
        assert_eq!(
            parse_inline("****x****"),
            vec![text("*"), InlineNode::BoldItalic(vec![text("x")]), text("*")]
        );
    }

    #[test]
    fn shortest_closing_span_wins() {
        assert_eq!(
            parse_inline("**a**b**"),
            vec![InlineNode::Bold(vec![text("a")]), text("b**")]
        );
    }

    #[test]
    fn mentions_and_keywords() {
        assert_eq!(
            parse_inline("hi @everyone and @here, @bob."),
            vec![
                text("hi "),
                InlineNode::Mention(MentionTarget::Everyone),
                text(" and "),
                InlineNode::Mention(MentionTarget::Here),
                text(", "),
                InlineNode::Mention(MentionTarget::User("bob".into())),
                text("."),
            ]
        );
    }

    #[test]
    fn keyword_prefix_is_an_ordinary_identifier() {
        assert_eq!(
            parse_inline("@everyones"),
            vec![InlineNode::Mention(MentionTarget::User("everyones".into()))]
        );
    }

    #[test]
    fn at_sign_inside_a_word_is_text() {
        assert_eq!(parse_inline("mail a@b.com"), vec![text("mail a@b.com")]);
    }

    #[test]
    fn lone_at_sign_is_text() {
        assert_eq!(parse_inline("@ alone"), vec![text("@ alone")]);
    }

    #[test]
    fn mention_inside_bold() {
        assert_eq!(
            parse_inline("**@ann**"),
            vec![InlineNode::Bold(vec![InlineNode::Mention(
                MentionTarget::User("ann".into())
            )])]
        );
    }

    #[test]
    fn multibyte_text_around_delimiters() {
        assert_eq!(
            parse_inline("é**ü**ß"),
            vec![text("é"), InlineNode::Bold(vec![text("ü")]), text("ß")]
        );
    }

    #[test]
    fn depth_cap_keeps_body_literal() {
        let limits = Limits {
            max_inline_depth: 1,
            ..Limits::default()
        };
        assert_eq!(
            parse_inline_with_limits("**a *b* c**", &limits),
            vec![InlineNode::Bold(vec![text("a *b* c")])]
        );
    }

    #[test]
    fn unmatched_delimiter_flood_is_text() {
        let line = "~|".repeat(2000);
        let nodes = parse_inline(&line);
        assert_eq!(nodes, vec![InlineNode::Text(line.clone())]);
    }
}
