use serde::{Deserialize, Serialize};

/// A mentionable participant, as supplied by the membership collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub display_name: String,
    pub handle: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl RosterEntry {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            handle: handle.into(),
            avatar: None,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.display_name.to_lowercase().contains(needle)
            || self.handle.to_lowercase().contains(needle)
    }
}

/// Group-wide mention keywords, offered ahead of any roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpecialKeyword {
    Everyone,
    Here,
}

impl SpecialKeyword {
    pub const ALL: [SpecialKeyword; 2] = [SpecialKeyword::Everyone, SpecialKeyword::Here];

    pub fn as_str(self) -> &'static str {
        match self {
            SpecialKeyword::Everyone => "everyone",
            SpecialKeyword::Here => "here",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Suggestion {
    SpecialKeyword(SpecialKeyword),
    Identity(RosterEntry),
}

impl Suggestion {
    /// Token inserted after `@` when this suggestion is committed.
    pub fn handle(&self) -> &str {
        match self {
            Suggestion::SpecialKeyword(k) => k.as_str(),
            Suggestion::Identity(entry) => &entry.handle,
        }
    }
}

/// Ranks completions for `query`: keywords first, then roster matches in
/// roster order, truncated to `limit`.
///
/// Roster entries match on a case-insensitive substring of their display name
/// or handle; an empty query matches everything. Unless suppressed, a keyword
/// is offered when the query is a substring of it, and both keywords lead
/// any list that has identity matches.
pub fn rank_suggestions(
    query: &str,
    suppress_keywords: bool,
    roster: &[RosterEntry],
    limit: usize,
) -> Vec<Suggestion> {
    let needle = query.to_lowercase();

    let identities: Vec<&RosterEntry> = roster.iter().filter(|e| e.matches(&needle)).collect();
    let any_identity = !identities.is_empty();

    let keywords = SpecialKeyword::ALL
        .into_iter()
        .filter(|_| !suppress_keywords)
        .filter(|k| any_identity || k.as_str().contains(&needle))
        .map(Suggestion::SpecialKeyword);

    keywords
        .chain(identities.into_iter().cloned().map(Suggestion::Identity))
        .take(limit)
        .collect()
}
