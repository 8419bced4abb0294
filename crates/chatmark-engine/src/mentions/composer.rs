//! Selection and commit handling for the suggestion popup.

use serde::Serialize;

use crate::formatting::inline::kinds::Mention;
use crate::formatting::span::Span;
use crate::limits::Limits;

use super::clamp_to_char_boundary;
use super::ranker::{RosterEntry, Suggestion, rank_suggestions};
use super::trigger::{TriggerState, detect_trigger};

/// Keys the composer intercepts while a suggestion list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposerKey {
    Up,
    Down,
    Tab,
    Enter,
    Escape,
}

/// A text replacement to apply to the composer buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Splice {
    /// Replaced byte range of the original buffer, `[anchor, caret)`.
    pub range: Span,
    pub replacement: String,
    pub new_text: String,
    pub new_caret: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not consumed; the host handles the key as usual.
    Ignored,
    SelectionMoved,
    Committed(Splice),
    Dismissed,
}

/// Replaces the in-progress `@query` with `@handle ` and puts the caret
/// after the trailing space.
///
/// Returns `None` when `trigger` is inactive or no longer fits `text`: the
/// anchor must still hold an `@` at or before the caret.
pub fn commit_suggestion(
    text: &str,
    trigger: &TriggerState,
    caret: usize,
    suggestion: &Suggestion,
) -> Option<Splice> {
    let anchor = trigger.anchor()?;
    let caret = clamp_to_char_boundary(text, caret);
    let still_at_sigil = text
        .get(anchor..)
        .is_some_and(|rest| rest.starts_with(Mention::SIGIL));
    if caret < anchor || !still_at_sigil {
        log::debug!("stale trigger at {anchor} for caret {caret}");
        return None;
    }

    let replacement = format!("{}{} ", Mention::SIGIL, suggestion.handle());
    let mut new_text = String::with_capacity(text.len() - (caret - anchor) + replacement.len());
    new_text.push_str(&text[..anchor]);
    new_text.push_str(&replacement);
    new_text.push_str(&text[caret..]);

    Some(Splice {
        range: Span::new(anchor, caret),
        new_caret: anchor + replacement.len(),
        replacement,
        new_text,
    })
}

/// Trigger, suggestion list and selection of one composer.
///
/// Call [`update`](Self::update) after every edit or caret move, and route
/// navigation keys through [`handle_key`](Self::handle_key).
#[derive(Debug, Clone)]
pub struct MentionComposer {
    limits: Limits,
    trigger: TriggerState,
    suggestions: Vec<Suggestion>,
    selected: usize,
}

impl MentionComposer {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            trigger: TriggerState::NoTrigger,
            suggestions: Vec::new(),
            selected: 0,
        }
    }

    pub fn trigger(&self) -> &TriggerState {
        &self.trigger
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Index of the highlighted suggestion, if the list is showing.
    pub fn selected(&self) -> Option<usize> {
        (!self.suggestions.is_empty()).then_some(self.selected)
    }

    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.get(self.selected)
    }

    /// Whether a suggestion list should be shown.
    pub fn is_open(&self) -> bool {
        self.trigger.is_active() && !self.suggestions.is_empty()
    }

    /// Recomputes trigger and suggestions from scratch.
    ///
    /// The selection survives only if the trigger and query are unchanged,
    /// clamped to the new list.
    pub fn update(
        &mut self,
        text: &str,
        caret: usize,
        roster: &[RosterEntry],
        suppress_keywords: bool,
    ) {
        let trigger = detect_trigger(text, caret);
        self.suggestions = match trigger.query() {
            Some(query) => {
                rank_suggestions(query, suppress_keywords, roster, self.limits.max_suggestions)
            }
            None => Vec::new(),
        };

        if trigger != self.trigger {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.suggestions.len().saturating_sub(1));
        }
        self.trigger = trigger;
    }

    pub fn handle_key(&mut self, key: ComposerKey, text: &str, caret: usize) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        let len = self.suggestions.len();

        match key {
            ComposerKey::Down => {
                self.selected = (self.selected + 1) % len;
                KeyOutcome::SelectionMoved
            }
            ComposerKey::Up => {
                self.selected = (self.selected + len - 1) % len;
                KeyOutcome::SelectionMoved
            }
            ComposerKey::Tab | ComposerKey::Enter => {
                let Some(suggestion) = self.suggestions.get(self.selected) else {
                    return KeyOutcome::Ignored;
                };
                match commit_suggestion(text, &self.trigger, caret, suggestion) {
                    Some(splice) => {
                        self.reset();
                        KeyOutcome::Committed(splice)
                    }
                    None => KeyOutcome::Ignored,
                }
            }
            ComposerKey::Escape => {
                self.reset();
                KeyOutcome::Dismissed
            }
        }
    }

    fn reset(&mut self) {
        self.trigger = TriggerState::NoTrigger;
        self.suggestions.clear();
        self.selected = 0;
    }
}

impl Default for MentionComposer {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}
