//! # Inline Parsing
//!
//! Cursor-based, priority-ordered inline parsing of a single line.
//!
//! ## Architecture
//!
//! At each cursor position the parser tries constructs in a fixed order and
//! takes the first that closes on the same line:
//!
//! 1. inline code (raw zone)
//! 2. bold-italic, bold, underline-italic, underline, italic (recursive)
//! 3. strikethrough, spoiler (literal)
//! 4. mention (leaf)
//!
//! Anything else, including every delimiter that fails to close, is absorbed
//! into the current `Text` run.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` and `MentionTarget`
//! - **`kinds`**: inline-specific types owning their delimiters
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`closers`**: memoised closing-delimiter search
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Bounds
//!
//! Recursion is capped by [`Limits::max_inline_depth`](crate::Limits), and
//! closing delimiters are looked up through a per-level memo, so thousands of
//! unmatched delimiters cost a linear scan rather than a quadratic one.

pub mod closers;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::ItalicMarker;
pub use parser::{parse_inline, parse_inline_with_limits};
pub use types::{InlineNode, MentionTarget};
