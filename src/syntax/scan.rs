//! Trailing comment-run scanning.

use text_size::{TextRange, TextSize};

use super::token::SyntaxToken;

/// Find the last contiguous comment-like run among the tokens that start
/// before `offset`.
///
/// The run must be the *trailing* part of the filtered subsequence: scanning
/// backward from the last token starting before `offset`, comment-like
/// tokens are collected until the first non-comment token stops the run.
/// Contiguity is in token order, not byte adjacency. Returns the byte range
/// from the run's first token start to its last token end, or `None` when
/// the token directly before `offset` is not comment-like (absence, not an
/// error).
///
/// `tokens` must be ordered by offset, as decoded maps are.
pub fn comment_range_before(tokens: &[SyntaxToken], offset: TextSize) -> Option<TextRange> {
    let cut = tokens.partition_point(|token| token.offset < offset);
    let preceding = &tokens[..cut];

    let run_len = preceding
        .iter()
        .rev()
        .take_while(|token| token.is_comment_like())
        .count();
    if run_len == 0 {
        return None;
    }

    let run = &preceding[preceding.len() - run_len..];
    let first = run.first()?;
    let last = run.last()?;
    tracing::trace!(
        "[SCAN] comment run of {} tokens before offset {:?}",
        run_len,
        offset
    );
    Some(TextRange::new(first.offset, last.end()))
}
