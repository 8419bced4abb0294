/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The full line prefix: the quote character followed by one space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted remainder of `line`, or `None` if it is not a quote line.
    ///
    /// Only a single level is recognised: `> > x` is a quote line whose
    /// remainder is `> x`.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
