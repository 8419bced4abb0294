//! Resource limits shared by the formatter and the suggestion ranker.

/// Platform message-length ceiling, in bytes of UTF-8 source.
///
/// The formatter accepts longer input too; this is the size the
/// latency guarantees are measured against.
pub const MESSAGE_LENGTH_CEILING: usize = 4000;

/// Default cap on nested styled inline constructs.
pub const DEFAULT_MAX_INLINE_DEPTH: usize = 16;

/// Default (and conventional) size of the suggestion list.
pub const MAX_SUGGESTIONS: usize = 10;

/// Tunable bounds for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting of recursive inline styles (bold, italic, underline...).
    /// Bodies past this depth are kept as a single literal text node.
    pub max_inline_depth: usize,
    /// Maximum number of suggestions returned by the ranker.
    pub max_suggestions: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_inline_depth: DEFAULT_MAX_INLINE_DEPTH,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}
