use super::kinds::CodeFence;

/// A top-level piece of a message: either a run of ordinary text or a fenced
/// code block cut out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any closed fence. Never empty.
    Text(&'a str),
    /// A closed fence. `body` is verbatim.
    Code {
        language: Option<&'a str>,
        body: &'a str,
    },
}

/// Extracts fenced code blocks from the whole message, left to right.
///
/// Fences are matched non-greedily: each opening fence closes at the next
/// fence after its language line. An opening fence with no close anywhere
/// after it is literal text, and so is everything after it.
pub fn split_fences(input: &str) -> Vec<Segment<'_>> {
    let mut out = vec![];
    let mut text_start = 0;

    while let Some(rel) = input[text_start..].find(CodeFence::FENCE) {
        let open = text_start + rel;
        let after_open = open + CodeFence::FENCE.len();
        let (language, body_offset) = CodeFence::language(&input[after_open..]);
        let body_start = after_open + body_offset;

        let Some(close_rel) = input[body_start..].find(CodeFence::FENCE) else {
            // No later fence exists, so no later opener could close either.
            break;
        };
        let close = body_start + close_rel;

        if open > text_start {
            out.push(Segment::Text(&input[text_start..open]));
        }
        out.push(Segment::Code {
            language,
            body: &input[body_start..close],
        });
        text_start = close + CodeFence::FENCE.len();
    }

    if text_start < input.len() {
        out.push(Segment::Text(&input[text_start..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_fence_is_one_text_run() {
        assert_eq!(split_fences("hello"), vec![Segment::Text("hello")]);
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(split_fences("").is_empty());
    }

    #[test]
    fn fence_between_text_runs() {
        assert_eq!(
            split_fences("`x` ```js\ncode\n``` more"),
            vec![
                Segment::Text("`x` "),
                Segment::Code {
                    language: Some("js"),
                    body: "code\n",
                },
                Segment::Text(" more"),
            ]
        );
    }

    #[test]
    fn unclosed_fence_is_text() {
        assert_eq!(
            split_fences("a ```js\nno close"),
            vec![Segment::Text("a ```js\nno close")]
        );
    }

    #[test]
    fn fences_are_non_greedy_and_non_overlapping() {
        assert_eq!(
            split_fences("```a``` mid ```b```"),
            vec![
                Segment::Code {
                    language: None,
                    body: "a",
                },
                Segment::Text(" mid "),
                Segment::Code {
                    language: None,
                    body: "b",
                },
            ]
        );
    }

    #[test]
    fn third_fence_without_partner_is_text() {
        assert_eq!(
            split_fences("```a``` tail ```"),
            vec![
                Segment::Code {
                    language: None,
                    body: "a",
                },
                Segment::Text(" tail ```"),
            ]
        );
    }

    #[test]
    fn six_backticks_make_an_empty_block() {
        assert_eq!(
            split_fences("``````"),
            vec![Segment::Code {
                language: None,
                body: "",
            }]
        );
    }

    #[test]
    fn language_newline_is_consumed() {
        assert_eq!(
            split_fences("```rust\nfn main() {}\n```"),
            vec![Segment::Code {
                language: Some("rust"),
                body: "fn main() {}\n",
            }]
        );
    }
}
