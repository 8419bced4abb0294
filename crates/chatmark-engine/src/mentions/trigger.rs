use serde::Serialize;

use crate::formatting::inline::kinds::Mention;

use super::clamp_to_char_boundary;

/// Whether the composer caret is inside an in-progress mention.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum TriggerState {
    #[default]
    NoTrigger,
    ActiveTrigger {
        /// Byte offset of the `@`.
        anchor: usize,
        /// Text between the `@` and the caret. Never contains whitespace.
        query: String,
    },
}

impl TriggerState {
    pub fn is_active(&self) -> bool {
        matches!(self, TriggerState::ActiveTrigger { .. })
    }

    pub fn anchor(&self) -> Option<usize> {
        match self {
            TriggerState::ActiveTrigger { anchor, .. } => Some(*anchor),
            TriggerState::NoTrigger => None,
        }
    }

    /// Offset one past the `@`, where the query begins.
    pub fn query_start(&self) -> Option<usize> {
        self.anchor().map(|a| a + Mention::SIGIL.len_utf8())
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            TriggerState::ActiveTrigger { query, .. } => Some(query),
            TriggerState::NoTrigger => None,
        }
    }
}

/// Detects an active `@` trigger ending at `caret` (a byte offset).
///
/// Scans backward from the caret to the nearest `@` on the same line. Any
/// whitespace on the way (a newline included) means there is no trigger, as
/// does a non-whitespace character directly before the `@`.
pub fn detect_trigger(text: &str, caret: usize) -> TriggerState {
    let caret = clamp_to_char_boundary(text, caret);
    let before = &text[..caret];

    for (idx, c) in before.char_indices().rev() {
        if c == Mention::SIGIL {
            let at_boundary = before[..idx].chars().next_back().is_none_or(char::is_whitespace);
            if !at_boundary {
                return TriggerState::NoTrigger;
            }
            let query = &before[idx + c.len_utf8()..];
            log::trace!("mention trigger at {idx}, query {query:?}");
            return TriggerState::ActiveTrigger {
                anchor: idx,
                query: query.to_string(),
            };
        }
        if c.is_whitespace() {
            return TriggerState::NoTrigger;
        }
    }
    TriggerState::NoTrigger
}
