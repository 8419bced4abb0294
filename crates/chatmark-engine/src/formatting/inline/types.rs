use serde::Serialize;

use super::kinds::ItalicMarker;

/// A styled or literal span within a block.
///
/// Emphasis variants hold recursively parsed children. `Strikethrough`,
/// `Spoiler` and `InlineCode` hold raw text that is never parsed further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Literal text that isn't part of any construct.
    Text(String),
    /// `***children***`
    BoldItalic(Vec<InlineNode>),
    /// `**children**`
    Bold(Vec<InlineNode>),
    /// `___children___`
    UnderlineItalic(Vec<InlineNode>),
    /// `__children__`
    Underline(Vec<InlineNode>),
    /// `*children*` or `_children_`
    Italic {
        marker: ItalicMarker,
        children: Vec<InlineNode>,
    },
    /// `~~literal~~`
    Strikethrough(String),
    /// `||literal||`. Reveal state belongs to the renderer.
    Spoiler(String),
    /// `` `literal` ``
    InlineCode(String),
    /// `@everyone`, `@here` or `@identifier`. Not resolved against any roster.
    Mention(MentionTarget),
    /// A line boundary inside a paragraph. Stands for one `\n`.
    LineBreak,
}

impl InlineNode {
    /// Children of a recursive style, `None` for leaves.
    pub fn children(&self) -> Option<&[InlineNode]> {
        match self {
            InlineNode::BoldItalic(c)
            | InlineNode::Bold(c)
            | InlineNode::UnderlineItalic(c)
            | InlineNode::Underline(c)
            | InlineNode::Italic { children: c, .. } => Some(c.as_slice()),
            InlineNode::Text(_)
            | InlineNode::Strikethrough(_)
            | InlineNode::Spoiler(_)
            | InlineNode::InlineCode(_)
            | InlineNode::Mention(_)
            | InlineNode::LineBreak => None,
        }
    }
}

/// Who a mention addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum MentionTarget {
    Everyone,
    Here,
    /// A syntactically valid identifier; may or may not name a real member.
    User(String),
}

impl MentionTarget {
    /// Maps a token (without `@`) to a target. Keywords are case-sensitive.
    pub fn from_token(token: &str) -> Self {
        match token {
            "everyone" => MentionTarget::Everyone,
            "here" => MentionTarget::Here,
            other => MentionTarget::User(other.to_string()),
        }
    }

    /// The token as written after `@`.
    pub fn token(&self) -> &str {
        match self {
            MentionTarget::Everyone => "everyone",
            MentionTarget::Here => "here",
            MentionTarget::User(id) => id.as_str(),
        }
    }
}
