//! Attaching candidate offsets to their nearest enclosing declaration.

use rustc_hash::FxHashMap;
use text_size::TextSize;

use super::declaration::Declaration;

/// Mapping from a candidate offset to the name offset of its nearest
/// enclosing declaration. Keys are unique; no ordering semantics attached.
pub type OffsetMap = FxHashMap<TextSize, TextSize>;

/// Build the offset map for `candidates` against `tree`.
///
/// Every candidate is first seeded mapping to itself (the sentinel for "not
/// yet attached"). The tree is then walked in pre-order; whenever a node's
/// correlation span contains a candidate, that candidate's value is
/// overwritten with the node's name offset. Parents are visited before
/// children and every match overwrites unconditionally, so the innermost
/// enclosing declaration wins. Finally, every candidate still mapped to
/// itself is pruned: in the caller's convention those are the offsets
/// already directly associated with a documented declaration.
///
/// `is_same_file` gates whether a node's own span participates; a foreign
/// node assigns nothing, but its children are still visited, matching the
/// upstream tree's embedding semantics. A candidate contained in no span is
/// silently absent from the result.
pub fn generate_offset_map(
    candidates: &[TextSize],
    tree: &Declaration,
    is_same_file: impl Fn(&Declaration) -> bool,
) -> OffsetMap {
    let mut map: OffsetMap = candidates.iter().map(|&offset| (offset, offset)).collect();
    if !map.is_empty() {
        map_offsets(&mut map, tree, &is_same_file);
    }
    map.retain(|key, value| *key != *value);
    tracing::debug!(
        "[OFFSETMAP] attached {} of {} candidates",
        map.len(),
        candidates.len()
    );
    map
}

/// Pre-order walk threading one mutable map through the recursion.
///
/// The map never escapes the enclosing [`generate_offset_map`] call, so the
/// accumulator stays scoped to a single call stack. Sibling spans are not
/// checked for overlap; a well-formed tree does not produce any.
fn map_offsets(map: &mut OffsetMap, node: &Declaration, is_same_file: &impl Fn(&Declaration) -> bool) {
    if is_same_file(node) {
        if let Some(span) = node.correlation_span() {
            for (key, value) in map.iter_mut() {
                if span.contains_inclusive(*key) {
                    *value = span.start();
                }
            }
        }
    }
    for child in &node.substructure {
        map_offsets(map, child, is_same_file);
    }
}
