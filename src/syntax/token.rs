//! The positioned token value type.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::kind;

/// One lexical unit positioned in source text.
///
/// Immutable once decoded; positions are byte offsets into the source text
/// the syntax map was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    /// Token category (e.g. [`kind::COMMENT`], [`kind::IDENTIFIER`]).
    pub kind: SmolStr,
    /// Byte offset of the token's first byte.
    pub offset: TextSize,
    /// Byte length of the token.
    pub length: TextSize,
}

impl SyntaxToken {
    /// Create a token from a kind and raw byte coordinates.
    pub fn new(kind: impl Into<SmolStr>, offset: u32, length: u32) -> Self {
        Self {
            kind: kind.into(),
            offset: TextSize::new(offset),
            length: TextSize::new(length),
        }
    }

    /// Byte offset one past the token's last byte.
    pub fn end(&self) -> TextSize {
        self.offset + self.length
    }

    /// The token's byte range.
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, self.length)
    }

    /// Whether the token's kind belongs to the comment family.
    pub fn is_comment_like(&self) -> bool {
        kind::is_comment_like(&self.kind)
    }
}
