//! Wire-format decoding of syntax-map buffers.
//!
//! The compiler service hands over one fixed-layout little-endian buffer per
//! file:
//!
//! ```text
//! [0,  8)   ignored
//! [8, 16)   u64 raw count; token count = raw_count >> 4
//! [16, ..)  16-byte records:
//!   [0,  8)   u64 kind code
//!   [8, 12)   u32 offset
//!   [12,16)   u32 raw length; length = raw_length >> 1
//! ```
//!
//! The low nibble of the count field and the low bit of each length field
//! carry unrelated flags and are discarded by logical right shifts. There is
//! no magic number or version check beyond those embedded bits; the layout
//! must be matched byte-exactly.

use smol_str::SmolStr;
use text_size::TextSize;

use super::error::DecodeError;
use super::kind::{self, KindResolver};
use super::map::SyntaxMap;
use super::token::SyntaxToken;

/// Header length in bytes; the count field occupies its second half.
pub const HEADER_LEN: usize = 16;
/// Length of one token record in bytes.
pub const RECORD_LEN: usize = 16;

const COUNT_FIELD_OFFSET: usize = 8;
const COUNT_FLAG_BITS: u32 = 4;
const LENGTH_FLAG_BITS: u32 = 1;

/// Bounds-checked cursor over an immutable byte buffer.
///
/// Each read validates its own range once; out-of-range reads return `None`
/// instead of panicking, so malformed buffers surface as decode errors.
struct ByteReader<'a> {
    buf: &'a [u8],
}

impl<'a> ByteReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn read_u64(&self, at: usize) -> Option<u64> {
        let bytes = self.buf.get(at..at.checked_add(8)?)?;
        Some(u64::from_le_bytes(bytes.try_into().ok()?))
    }

    fn read_u32(&self, at: usize) -> Option<u32> {
        let bytes = self.buf.get(at..at.checked_add(4)?)?;
        Some(u32::from_le_bytes(bytes.try_into().ok()?))
    }
}

/// Decodes raw syntax-map buffers into [`SyntaxMap`] values.
///
/// The kind-resolution strategy is fixed at construction, which keeps the
/// decoder stateless across calls and trivially testable with a stub
/// resolver.
#[derive(Debug, Clone)]
pub struct SyntaxMapDecoder<R> {
    resolver: R,
}

impl<R: KindResolver> SyntaxMapDecoder<R> {
    /// Create a decoder that resolves kind codes through `resolver`.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Decode `buffer` into an ordered token stream.
    ///
    /// Token order is taken from the buffer as-is; the producer pre-sorts by
    /// offset. Codes the resolver does not know become [`kind::UNKNOWN`]
    /// tokens rather than errors. Offsets and lengths are not validated
    /// against any source-text length; that check belongs to callers that
    /// have the text. Bytes past the last declared record are ignored.
    pub fn decode(&self, buffer: &[u8]) -> Result<SyntaxMap, DecodeError> {
        let reader = ByteReader::new(buffer);

        let raw_count = reader
            .read_u64(COUNT_FIELD_OFFSET)
            .ok_or(DecodeError::MissingHeader {
                actual: buffer.len(),
            })?;
        let count = raw_count >> COUNT_FLAG_BITS;

        let truncated = || DecodeError::Truncated {
            declared: count,
            // Saturating arithmetic so a hostile count field cannot wrap.
            required: (HEADER_LEN as u64).saturating_add(count.saturating_mul(RECORD_LEN as u64)),
            actual: buffer.len(),
        };

        let available = ((buffer.len() - HEADER_LEN) / RECORD_LEN) as u64;
        if count > available {
            return Err(truncated());
        }

        let mut tokens = Vec::with_capacity(count as usize);
        for record in 0..count as usize {
            let base = HEADER_LEN + record * RECORD_LEN;
            let code = reader.read_u64(base).ok_or_else(truncated)?;
            let offset = reader.read_u32(base + 8).ok_or_else(truncated)?;
            let raw_length = reader.read_u32(base + 12).ok_or_else(truncated)?;

            let kind = self
                .resolver
                .resolve(code)
                .unwrap_or_else(|| SmolStr::new_static(kind::UNKNOWN));
            tokens.push(SyntaxToken {
                kind,
                offset: TextSize::new(offset),
                length: TextSize::new(raw_length >> LENGTH_FLAG_BITS),
            });
        }

        tracing::trace!(
            "[SYNTAXMAP] decoded {} tokens from {}-byte buffer",
            tokens.len(),
            buffer.len()
        );
        Ok(SyntaxMap::new(tokens))
    }
}
