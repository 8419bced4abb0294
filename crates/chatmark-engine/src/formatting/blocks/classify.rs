use super::kinds::{BlockQuote, Heading};

/// Classification of a single line, using only facts local to that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `> rest`
    Quote { rest: &'a str },
    /// `#`..`###` + space + rest
    Heading { level: u8, rest: &'a str },
    /// Anything else, including blank lines.
    Plain(&'a str),
}

/// Classifies one line (without its trailing newline).
///
/// Quote detection runs first, so `> # x` is a quote line whose remainder
/// happens to start with `#`.
pub fn classify(line: &str) -> LineClass<'_> {
    if let Some(rest) = BlockQuote::strip_prefix(line) {
        return LineClass::Quote { rest };
    }
    if let Some((level, rest)) = Heading::parse(line) {
        return LineClass::Heading { level, rest };
    }
    LineClass::Plain(line)
}
