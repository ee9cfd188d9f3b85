//! Token-kind vocabulary and the kind-resolution seam.
//!
//! The compiler service identifies token kinds by opaque numeric codes; the
//! mapping from code to kind string is environment-supplied. A
//! [`KindResolver`] is handed to the decoder at construction time, either as
//! a [`KindTable`] or as any `Fn(u64) -> Option<SmolStr>` closure.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Generic comment.
pub const COMMENT: &str = "comment";
/// Line comment (`//`).
pub const COMMENT_LINE: &str = "comment.line";
/// Block comment (`/* */`).
pub const COMMENT_BLOCK: &str = "comment.block";
/// Documentation comment.
pub const DOC_COMMENT: &str = "doccomment";
/// Field inside a documentation comment (e.g. a parameter entry).
pub const DOC_COMMENT_FIELD: &str = "doccomment.field";

/// Identifier.
pub const IDENTIFIER: &str = "identifier";
/// Language keyword.
pub const KEYWORD: &str = "keyword";
/// Numeric literal.
pub const NUMBER: &str = "number";
/// String literal.
pub const STRING: &str = "string";
/// Type identifier.
pub const TYPE_IDENTIFIER: &str = "typeidentifier";

/// Fallback kind for numeric codes the resolver does not know.
pub const UNKNOWN: &str = "unknown";

/// The fixed set of kinds the comment scanner treats as comment-like.
pub const COMMENT_KINDS: [&str; 5] = [
    COMMENT,
    COMMENT_LINE,
    COMMENT_BLOCK,
    DOC_COMMENT,
    DOC_COMMENT_FIELD,
];

/// Whether `kind` belongs to the comment family.
pub fn is_comment_like(kind: &str) -> bool {
    COMMENT_KINDS.contains(&kind)
}

/// Resolves the opaque numeric kind codes embedded in a syntax-map buffer.
///
/// Resolution may be partial; the decoder substitutes [`UNKNOWN`] for codes
/// that resolve to `None`. Implementations must be pure lookups.
pub trait KindResolver {
    /// Resolve `code` to a kind string, or `None` when the code is unknown.
    fn resolve(&self, code: u64) -> Option<SmolStr>;
}

impl<F> KindResolver for F
where
    F: Fn(u64) -> Option<SmolStr>,
{
    fn resolve(&self, code: u64) -> Option<SmolStr> {
        self(code)
    }
}

/// Table-backed [`KindResolver`].
#[derive(Debug, Clone, Default)]
pub struct KindTable {
    entries: FxHashMap<u64, SmolStr>,
}

impl KindTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `kind` for `code`, replacing any previous entry.
    pub fn insert(&mut self, code: u64, kind: impl Into<SmolStr>) {
        self.entries.insert(code, kind.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, code: u64, kind: impl Into<SmolStr>) -> Self {
        self.insert(code, kind);
        self
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KindResolver for KindTable {
    fn resolve(&self, code: u64) -> Option<SmolStr> {
        self.entries.get(&code).cloned()
    }
}

impl<K: Into<SmolStr>> FromIterator<(u64, K)> for KindTable {
    fn from_iter<I: IntoIterator<Item = (u64, K)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(c, k)| (c, k.into())).collect(),
        }
    }
}
