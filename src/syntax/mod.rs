//! Syntax-map model and decoding.
//!
//! This module provides the token-level view of a source file:
//! - [`SyntaxToken`], [`SyntaxMap`] - positioned tokens and their ordered stream
//! - [`SyntaxMapDecoder`] - decoding of the compiler service's binary buffers
//! - [`KindResolver`], [`KindTable`] - numeric kind code → kind string seam
//! - [`comment_range_before`] - trailing comment-run scanning
//!
//! Tokens arrive pre-sorted by offset from the compiler service; nothing in
//! this module re-sorts them.

pub mod decode;
pub mod error;
pub mod kind;
pub mod map;
pub mod scan;
pub mod token;

pub use decode::SyntaxMapDecoder;
pub use error::DecodeError;
pub use kind::{KindResolver, KindTable};
pub use map::SyntaxMap;
pub use scan::comment_range_before;
pub use token::SyntaxToken;
