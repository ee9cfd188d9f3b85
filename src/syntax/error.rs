//! Error types for syntax-map decoding.

use thiserror::Error;

/// Errors that can occur while decoding a syntax-map buffer.
///
/// Decoding fails fast on structural malformation; a partially decoded map
/// is never returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer too short to contain the 16-byte header with the count field.
    #[error("syntax map buffer too short for header: {actual} bytes, need 16")]
    MissingHeader {
        /// Actual buffer length in bytes.
        actual: usize,
    },

    /// Buffer shorter than the length implied by its own count field.
    #[error(
        "syntax map buffer truncated: {declared} declared tokens need {required} bytes, got {actual}"
    )]
    Truncated {
        /// Token count declared by the header.
        declared: u64,
        /// Byte length the declared count requires.
        required: u64,
        /// Actual buffer length in bytes.
        actual: usize,
    },
}
