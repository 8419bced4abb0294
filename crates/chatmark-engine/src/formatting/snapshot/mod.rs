//! # Snapshot Testing Support
//!
//! Utilities for testing the formatter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a [`Document`](crate::Document) as a stable,
//!   indented outline for `insta` snapshots
//! - **`invariants`**: runtime checks for formatter correctness (exact source
//!   reconstruction, merged text runs, heading levels)
//!
//! Formatting behaviour is pinned by outline snapshots rather than a
//! separate formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
