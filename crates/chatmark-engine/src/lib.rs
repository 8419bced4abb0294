//! # chatmark-engine
//!
//! The text-processing core of a chat client:
//!
//! - **Formatting** ([`formatting`]): turns a raw message into a [`Document`]
//!   of [`Block`]s and [`InlineNode`]s. Total and side-effect free: malformed
//!   markup degrades to literal text, never to an error.
//! - **Mentions** ([`mentions`]): detects an in-progress `@` trigger at the
//!   caret, ranks candidate completions from a roster, and drives the
//!   composer's selection/commit/cancel transitions.
//!
//! Everything here is synchronous and pure. Rosters are handed in as
//! already-resolved snapshots; the engine performs no I/O.
//!
//! ```
//! use chatmark_engine::{Block, InlineNode, format_message};
//!
//! let doc = format_message("hello **world**");
//! assert_eq!(
//!     doc.blocks,
//!     vec![Block::Paragraph(vec![
//!         InlineNode::Text("hello ".into()),
//!         InlineNode::Bold(vec![InlineNode::Text("world".into())]),
//!     ])]
//! );
//! assert_eq!(doc.to_source(), "hello **world**");
//! ```

pub mod formatting;
pub mod limits;
pub mod mentions;

// Re-export key types for easier usage
pub use formatting::{
    Document, Formatter, blocks::Block, format_message, inline::InlineNode,
    inline::ItalicMarker, inline::MentionTarget, span::Span,
};
pub use limits::Limits;
pub use mentions::{
    ComposerKey, KeyOutcome, MentionComposer, ResolvedMention, RosterEntry, SpecialKeyword,
    Splice, Suggestion, TriggerState, commit_suggestion, detect_trigger, rank_suggestions,
    resolve_mentions,
};
