use crate::formatting::inline::InlineNode;

/// Styles whose content stays literal: no inline parsing inside.
///
/// A spoiler must not reveal structure before it is clicked, so its body is
/// kept exactly as typed. Strikethrough behaves the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralStyle {
    Strikethrough,
    Spoiler,
}

impl LiteralStyle {
    pub const PRECEDENCE: [LiteralStyle; 2] = [LiteralStyle::Strikethrough, LiteralStyle::Spoiler];

    pub fn delimiter(self) -> &'static str {
        match self {
            LiteralStyle::Strikethrough => "~~",
            LiteralStyle::Spoiler => "||",
        }
    }

    pub fn wrap(self, literal: &str) -> InlineNode {
        match self {
            LiteralStyle::Strikethrough => InlineNode::Strikethrough(literal.to_string()),
            LiteralStyle::Spoiler => InlineNode::Spoiler(literal.to_string()),
        }
    }
}
