//! The slice of the external declaration-tree schema consumed here.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// One node of the declaration tree returned by the compiler service.
///
/// Only the fields that offset correlation reads are modeled; every other
/// field of the external schema is opaque to this crate and never
/// represented. A node without a name range (a non-declaration container,
/// say) still carries children that participate normally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    /// Declared name, when the node has one. Read only by caller-supplied
    /// predicates such as same-file checks.
    pub name: Option<SmolStr>,
    /// Byte offset of the name range; absent for unnamed nodes.
    pub name_offset: Option<TextSize>,
    /// Byte length of the name range; absent for unnamed nodes.
    pub name_length: Option<TextSize>,
    /// Byte length of the body; absent when the node has no body (e.g. a
    /// property without an implementation block).
    pub body_length: Option<TextSize>,
    /// Ordered children; empty for leaves.
    pub substructure: Vec<Declaration>,
}

impl Declaration {
    /// Node with a name range.
    pub fn named(name: impl Into<SmolStr>, name_offset: u32, name_length: u32) -> Self {
        Self {
            name: Some(name.into()),
            name_offset: Some(TextSize::new(name_offset)),
            name_length: Some(TextSize::new(name_length)),
            ..Self::default()
        }
    }

    /// Node with no name range.
    pub fn container() -> Self {
        Self::default()
    }

    /// Builder: attach a body of `length` bytes.
    pub fn with_body_length(mut self, length: u32) -> Self {
        self.body_length = Some(TextSize::new(length));
        self
    }

    /// Builder: attach ordered children.
    pub fn with_substructure(mut self, children: Vec<Declaration>) -> Self {
        self.substructure = children;
        self
    }

    /// The byte range this node owns for correlation purposes:
    /// `[name_offset, name_offset + name_length + body_length]`, with an
    /// absent body counting as zero length. The end bound is inclusive;
    /// containment checks use [`TextRange::contains_inclusive`]. Returns
    /// `None` when the node has no name range. The span need not equal the
    /// node's full textual extent.
    pub fn correlation_span(&self) -> Option<TextRange> {
        let start = self.name_offset?;
        let name_length = self.name_length?;
        let body_length = self.body_length.unwrap_or_default();
        Some(TextRange::new(start, start + name_length + body_length))
    }
}
