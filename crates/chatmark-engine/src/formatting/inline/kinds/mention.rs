/// Mention inline type: `@` followed by an identifier token.
pub struct Mention;

impl Mention {
    pub const SIGIL: char = '@';

    /// Length in bytes of the mention token at the start of `s` (after `@`).
    ///
    /// A token is a run of alphanumerics, `_`, `-` and `.`; trailing dots are
    /// sentence punctuation and are left out.
    pub fn token_len(s: &str) -> usize {
        let run: usize = s
            .chars()
            .take_while(|c| Self::is_token_char(*c))
            .map(char::len_utf8)
            .sum();
        s[..run].trim_end_matches('.').len()
    }

    pub fn is_token_char(c: char) -> bool {
        c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
    }

    /// Whether a mention may start after `prev` (the character before `@`).
    ///
    /// `a@b` is not a mention, `(@b` is.
    pub fn starts_after(prev: Option<char>) -> bool {
        prev.is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
    }
}
