//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` - raw zone that suppresses other parsing
//! - **`Emphasis`**: `***`, `**`, `___`, `__`, `*`, `_` - recursive styles,
//!   listed in match precedence order
//! - **`LiteralStyle`**: `~~`, `||` - styled but never parsed inside
//! - **`Mention`**: `@` + token
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod literal;
pub mod mention;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, ItalicMarker};
pub use literal::LiteralStyle;
pub use mention::Mention;
