//! Resolving the mentions of a formatted message against a roster.
//!
//! The formatter only knows that `@token` is syntactically a mention; this
//! maps tokens to actual participants so a host can route notifications.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::formatting::Document;
use crate::formatting::inline::MentionTarget;

use super::ranker::RosterEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResolvedMention {
    Everyone,
    Here,
    Identity(RosterEntry),
}

/// Resolves every mention in `document`, in first-mention order.
///
/// Handles are matched case-insensitively; each identity and each keyword
/// appears at most once. Tokens naming nobody on the roster are skipped.
pub fn resolve_mentions(document: &Document, roster: &[RosterEntry]) -> Vec<ResolvedMention> {
    let mut by_handle: HashMap<String, &RosterEntry> = HashMap::new();
    for entry in roster {
        by_handle.entry(entry.handle.to_lowercase()).or_insert(entry);
    }

    let mut resolved = Vec::new();
    let mut seen_ids = HashSet::new();
    let (mut everyone, mut here) = (false, false);

    for target in document.mentions() {
        match target {
            MentionTarget::Everyone if !everyone => {
                everyone = true;
                resolved.push(ResolvedMention::Everyone);
            }
            MentionTarget::Here if !here => {
                here = true;
                resolved.push(ResolvedMention::Here);
            }
            MentionTarget::User(token) => match by_handle.get(&token.to_lowercase()) {
                Some(entry) => {
                    if seen_ids.insert(entry.id.as_str()) {
                        resolved.push(ResolvedMention::Identity((*entry).clone()));
                    }
                }
                None => log::trace!("mention @{token} matches no roster entry"),
            },
            _ => {}
        }
    }

    resolved
}
