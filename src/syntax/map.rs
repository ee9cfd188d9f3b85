//! The ordered token stream for one file.

use text_size::{TextRange, TextSize};

use super::scan;
use super::token::SyntaxToken;

/// One file's full token stream at one point in time.
///
/// Tokens are stored in the order they appear in the decoded buffer, which
/// the compiler service guarantees is non-decreasing by offset. The map is
/// an immutable value type; an "updated" view is always a newly constructed
/// value. Equality is strict: two maps are equal only when they have the
/// same length and pairwise-equal tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxMap {
    tokens: Vec<SyntaxToken>,
}

impl SyntaxMap {
    /// Create a map from an explicit token list, taken as already ordered.
    pub fn new(tokens: Vec<SyntaxToken>) -> Self {
        Self { tokens }
    }

    /// The tokens in buffer order.
    pub fn tokens(&self) -> &[SyntaxToken] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the map has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The last contiguous comment-like run ending before `offset`.
    ///
    /// See [`scan::comment_range_before`] for the exact contract.
    pub fn comment_range_before(&self, offset: TextSize) -> Option<TextRange> {
        scan::comment_range_before(&self.tokens, offset)
    }
}

impl From<Vec<SyntaxToken>> for SyntaxMap {
    fn from(tokens: Vec<SyntaxToken>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a SyntaxMap {
    type Item = &'a SyntaxToken;
    type IntoIter = std::slice::Iter<'a, SyntaxToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
