//! Candidate-offset correlation against the declaration tree.
//!
//! This module consumes the compiler service's hierarchical declaration
//! structure and attaches caller-supplied candidate offsets to their nearest
//! enclosing declaration:
//! - [`Declaration`] - the slice of the external tree schema read here
//! - [`OffsetMap`], [`generate_offset_map`] - the correlation walk

pub mod correlate;
pub mod declaration;

pub use correlate::{OffsetMap, generate_offset_map};
pub use declaration::Declaration;
