/// Fenced code block delimiters.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Splits the text right after an opening fence into an optional language
    /// token and the byte offset where the body begins.
    ///
    /// The token counts as a language only when a newline follows it directly;
    /// that newline is consumed with it. Otherwise the body starts immediately
    /// after the fence.
    pub fn language(after_fence: &str) -> (Option<&str>, usize) {
        let len = after_fence
            .bytes()
            .take_while(|b| Self::is_language_byte(*b))
            .count();
        if len > 0 && after_fence[len..].starts_with('\n') {
            (Some(&after_fence[..len]), len + 1)
        } else {
            (None, 0)
        }
    }

    fn is_language_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || matches!(b, b'_' | b'+' | b'#' | b'.' | b'-')
    }
}
