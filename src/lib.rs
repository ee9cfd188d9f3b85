//! # dockit-base
//!
//! Core library for extracting documentation-relevant metadata from a source
//! file: decoding the compiler service's binary syntax-map buffers, scanning
//! token streams for trailing comment runs, and correlating candidate offsets
//! against a declaration tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! offset    → Declaration tree slice, OffsetMap correlation
//! syntax    → SyntaxToken/SyntaxMap, wire decoding, comment scanning
//! ```
//!
//! The two modules are independent of each other; they share only the
//! byte-offset vocabulary ([`TextSize`], [`TextRange`]). Everything that
//! feeds them (transport to the compiler service, candidate-offset
//! discovery, result serialization) lives outside this crate.

// ============================================================================
// MODULES
// ============================================================================

/// Syntax: token model, syntax-map wire decoding, comment-run scanning
pub mod syntax;

/// Offset correlation: declaration tree slice, candidate → parent mapping
pub mod offset;

// Re-export commonly needed items
pub use syntax::{
    DecodeError, KindResolver, KindTable, SyntaxMap, SyntaxMapDecoder, SyntaxToken,
    comment_range_before,
};

pub use offset::{Declaration, OffsetMap, generate_offset_map};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
