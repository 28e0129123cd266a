//! Semantic token kinds emitted by argument parsers.

use std::fmt;

use crate::base::TextRange;

/// Token type for semantic highlighting.
///
/// The discriminant is the index into [`TokenType::legend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenType {
    Comment,
    PosRel,
    Number,
    String,
    PlayerName,
    Resource,
    Uuid,
    Units,
    Swizzle,
    ScoreboardId,
    Enum,
    Operator,
    Slot,
    Keyword,
    CommandLiteral,
    Property,
    Color,
    Team,
    Objective,
    ScoreboardSlot,
    ObjectiveCriteria,
    Tag,
    Selector,
}

impl TokenType {
    pub const ALL: [TokenType; 23] = [
        TokenType::Comment,
        TokenType::PosRel,
        TokenType::Number,
        TokenType::String,
        TokenType::PlayerName,
        TokenType::Resource,
        TokenType::Uuid,
        TokenType::Units,
        TokenType::Swizzle,
        TokenType::ScoreboardId,
        TokenType::Enum,
        TokenType::Operator,
        TokenType::Slot,
        TokenType::Keyword,
        TokenType::CommandLiteral,
        TokenType::Property,
        TokenType::Color,
        TokenType::Team,
        TokenType::Objective,
        TokenType::ScoreboardSlot,
        TokenType::ObjectiveCriteria,
        TokenType::Tag,
        TokenType::Selector,
    ];

    /// Convert to LSP token type index.
    pub fn to_lsp_index(self) -> u32 {
        self as u32
    }

    /// Stable identifier for this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::PosRel => "pos_rel",
            TokenType::Number => "number",
            TokenType::String => "string",
            TokenType::PlayerName => "player_name",
            TokenType::Resource => "resource",
            TokenType::Uuid => "uuid",
            TokenType::Units => "units",
            TokenType::Swizzle => "swizzle",
            TokenType::ScoreboardId => "scoreboard_id",
            TokenType::Enum => "enum",
            TokenType::Operator => "operator",
            TokenType::Slot => "slot",
            TokenType::Keyword => "keyword",
            TokenType::CommandLiteral => "command_literal",
            TokenType::Property => "property",
            TokenType::Color => "color",
            TokenType::Team => "team",
            TokenType::Objective => "objective",
            TokenType::ScoreboardSlot => "scoreboard_slot",
            TokenType::ObjectiveCriteria => "objective_criteria",
            TokenType::Tag => "tag",
            TokenType::Selector => "selector",
        }
    }

    /// Standard LSP token type this kind is highlighted as.
    pub fn lsp_name(self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::PosRel | TokenType::Operator => "operator",
            TokenType::Number => "number",
            TokenType::String
            | TokenType::PlayerName
            | TokenType::Resource
            | TokenType::Uuid
            | TokenType::Units
            | TokenType::Swizzle
            | TokenType::ScoreboardId => "string",
            TokenType::Enum | TokenType::Slot | TokenType::Color => "enumMember",
            TokenType::Keyword => "keyword",
            TokenType::CommandLiteral => "function",
            TokenType::Property => "property",
            TokenType::Team
            | TokenType::Objective
            | TokenType::ScoreboardSlot
            | TokenType::ObjectiveCriteria => "variable",
            TokenType::Tag => "type",
            TokenType::Selector => "macro",
        }
    }

    /// Token type names in index order, as sent in the LSP legend.
    pub fn legend() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.lsp_name()).collect()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `(range, kind)` pair for editor highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticToken {
    pub range: TextRange,
    pub kind: TokenType,
}
