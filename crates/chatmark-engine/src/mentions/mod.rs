//! # Mentions
//!
//! Composer-side `@` handling, rebuilt from scratch on every edit or caret move.
//!
//! - **`trigger`**: [`detect_trigger`] decides whether the caret sits in an
//!   in-progress `@query`
//! - **`ranker`**: [`rank_suggestions`] turns the query and a roster snapshot
//!   into a bounded candidate list
//! - **`composer`**: [`MentionComposer`] keeps the selection index and applies
//!   Up/Down/Tab/Enter/Escape
//! - **`resolve`**: [`resolve_mentions`] matches the mentions of a formatted
//!   message against a roster (for notification routing)

pub mod composer;
pub mod ranker;
pub mod resolve;
pub mod trigger;

pub use composer::{ComposerKey, KeyOutcome, MentionComposer, Splice, commit_suggestion};
pub use ranker::{RosterEntry, SpecialKeyword, Suggestion, rank_suggestions};
pub use resolve::{ResolvedMention, resolve_mentions};
pub use trigger::{TriggerState, detect_trigger};

/// Clamps `pos` into `text` and down onto a character boundary.
pub(crate) fn clamp_to_char_boundary(text: &str, pos: usize) -> usize {
    let mut p = pos.min(text.len());
    while !text.is_char_boundary(p) {
        p -= 1;
    }
    if p != pos {
        log::trace!("caret {pos} clamped to {p}");
    }
    p
}
