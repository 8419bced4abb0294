//! # Block Segmentation
//!
//! Two-phase block segmentation.
//!
//! ## Phases
//!
//! 1. **Fence extraction** (`fences`): the whole message is split into text
//!    runs and fenced code segments, left to right, non-overlapping. An opening
//!    fence without a matching close is not code; it stays in the text run.
//!
//! 2. **Line building** (`builder`): each text run is split on `\n`, every line
//!    is classified (`classify`), and a `BlockBuilder` accumulates quote lines
//!    and paragraph lines until a different line kind flushes them.
//!
//! ## Modules
//!
//! - **`types`**: the closed [`Block`] variant
//! - **`kinds`**: block-specific delimiters (`CodeFence`, `BlockQuote`, `Heading`)
//! - **`fences`**: `split_fences` producing [`Segment`]s
//! - **`classify`**: `classify` producing a [`LineClass`] per line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blocks never nest
//! - Code block bodies never reach the inline parser
//! - Blank lines stay inside the current paragraph as line breaks

pub mod builder;
pub mod classify;
pub mod fences;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, classify};
pub use fences::{Segment, split_fences};
pub use types::Block;
