#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use dockit::syntax::kind;
use dockit::{DecodeError, KindTable, SyntaxMapDecoder, SyntaxToken, TextRange, TextSize};
use once_cell::sync::Lazy;
use rstest::rstest;

/// Kind table mirroring the codes the compiler service emits for the kinds
/// exercised here.
static KINDS: Lazy<KindTable> = Lazy::new(|| {
    KindTable::new()
        .with(1, kind::KEYWORD)
        .with(2, kind::IDENTIFIER)
        .with(3, kind::COMMENT)
        .with(4, kind::DOC_COMMENT)
        .with(5, kind::NUMBER)
});

/// Build a wire buffer: 16-byte header carrying `(n << 4) | flag`, then one
/// 16-byte record per `(code, offset, raw_length)` triple.
fn encode_buffer(count_flag: u64, records: &[(u64, u32, u32)]) -> Vec<u8> {
    let mut buf = vec![0u8; 8];
    buf.extend_from_slice(&(((records.len() as u64) << 4) | count_flag).to_le_bytes());
    for &(code, offset, raw_length) in records {
        buf.extend_from_slice(&code.to_le_bytes());
        buf.extend_from_slice(&offset.to_le_bytes());
        buf.extend_from_slice(&raw_length.to_le_bytes());
    }
    buf
}

fn decode(buf: &[u8]) -> Result<dockit::SyntaxMap, DecodeError> {
    SyntaxMapDecoder::new(KINDS.clone()).decode(buf)
}

#[test]
fn test_decode_preserves_buffer_order_and_fields() {
    // func name /* doc */ 42, raw lengths carry the flag bit
    let buf = encode_buffer(
        0,
        &[
            (1, 0, 4 << 1),
            (2, 5, (4 << 1) | 1),
            (4, 10, 9 << 1),
            (5, 20, (2 << 1) | 1),
        ],
    );
    let map = decode(&buf).unwrap();
    assert_eq!(
        map.tokens(),
        [
            SyntaxToken::new(kind::KEYWORD, 0, 4),
            SyntaxToken::new(kind::IDENTIFIER, 5, 4),
            SyntaxToken::new(kind::DOC_COMMENT, 10, 9),
            SyntaxToken::new(kind::NUMBER, 20, 2),
        ]
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(16)]
fn test_decode_size_law(#[case] token_count: usize) {
    let records: Vec<_> = (0..token_count)
        .map(|i| (2u64, (i * 8) as u32, 3u32 << 1))
        .collect();
    let buf = encode_buffer(0, &records);
    assert_eq!(buf.len(), 16 + token_count * 16);
    assert_eq!(decode(&buf).unwrap().len(), token_count);

    // Any shorter buffer fails with a decode error.
    if token_count > 0 {
        let err = decode(&buf[..buf.len() - 1]).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { declared, .. }
            if declared == token_count as u64));
    }
}

#[rstest]
#[case(0x0)]
#[case(0x7)]
#[case(0xf)]
fn test_count_flag_nibble_never_changes_the_count(#[case] flag: u64) {
    let buf = encode_buffer(flag, &[(1, 0, 2 << 1), (2, 3, 2 << 1)]);
    assert_eq!(decode(&buf).unwrap().len(), 2);
}

#[test]
fn test_unresolved_kind_code_becomes_unknown() {
    let buf = encode_buffer(0, &[(0xdead_beef, 0, 2 << 1)]);
    let map = decode(&buf).unwrap();
    assert_eq!(map.tokens()[0].kind, kind::UNKNOWN);
}

#[test]
fn test_header_alone_is_a_valid_empty_map() {
    let buf = encode_buffer(0, &[]);
    let map = decode(&buf).unwrap();
    assert!(map.is_empty());
    assert_eq!(map.comment_range_before(TextSize::new(100)), None);
}

#[rstest]
#[case(0)]
#[case(8)]
#[case(15)]
fn test_buffer_without_full_header_is_rejected(#[case] len: usize) {
    let err = decode(&vec![0u8; len]).unwrap_err();
    assert_eq!(err, DecodeError::MissingHeader { actual: len });
}

#[test]
fn test_truncation_error_reports_declared_vs_actual() {
    let mut buf = encode_buffer(0, &[(1, 0, 2), (1, 4, 2), (1, 8, 2)]);
    buf.truncate(30);
    let err = decode(&buf).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Truncated {
            declared: 3,
            required: 64,
            actual: 30,
        }
    );
    let message = err.to_string();
    assert!(message.contains("3 declared tokens"), "{message}");
    assert!(message.contains("64"), "{message}");
    assert!(message.contains("30"), "{message}");
}

#[test]
fn test_decoded_map_feeds_the_comment_scanner() {
    // code, then a doc-comment run directly before offset 30
    let buf = encode_buffer(
        0,
        &[
            (1, 0, 4 << 1),
            (4, 10, 8 << 1),
            (3, 19, 5 << 1),
            (2, 30, 6 << 1),
        ],
    );
    let map = decode(&buf).unwrap();
    assert_eq!(
        map.comment_range_before(TextSize::new(30)),
        Some(TextRange::new(10.into(), 24.into()))
    );
    // Querying past the identifier: the trailing token is not comment-like.
    assert_eq!(map.comment_range_before(TextSize::new(40)), None);
}

#[test]
fn test_maps_of_different_lengths_are_unequal() {
    let long = decode(&encode_buffer(0, &[(1, 0, 2 << 1), (2, 3, 2 << 1)])).unwrap();
    let short = decode(&encode_buffer(0, &[(1, 0, 2 << 1)])).unwrap();
    assert_ne!(long, short);
    assert_ne!(short, long);
    assert_eq!(short, decode(&encode_buffer(0, &[(1, 0, 2 << 1)])).unwrap());
}
