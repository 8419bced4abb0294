//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The builder and
//! classifier call these; they never hardcode `` ``` ``, `>` or `#`.

pub mod block_quote;
pub mod code_fence;
pub mod heading;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
