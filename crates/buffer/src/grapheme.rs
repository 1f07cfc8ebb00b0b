// Chunk: docs/chunks/grapheme_cluster_awareness - Grapheme cluster boundary helpers

//! Grapheme cluster sizes for cluster-aware deletion.
//!
//! The character store holds one `char` per slot, but a user-perceived
//! character can span several: ZWJ emoji sequences, a base letter plus
//! combining marks, regional indicator pairs. The editor's grapheme deletions
//! use these helpers to remove a whole cluster at once.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the char lengths of the grapheme clusters in `chars`, in order.
fn cluster_lens(chars: &[char]) -> Vec<usize> {
    let s: String = chars.iter().collect();
    s.graphemes(true).map(|g| g.chars().count()).collect()
}

/// Returns the number of chars in the cluster that ends at the end of `chars`.
///
/// `chars` should start at a cluster boundary (e.g. a line start).
pub fn cluster_len_before(chars: &[char]) -> usize {
    match chars.last() {
        None => 0,
        // ASCII never extends a preceding cluster
        Some(ch) if ch.is_ascii() => 1,
        Some(_) => cluster_lens(chars).last().copied().unwrap_or(0),
    }
}

/// Returns the number of chars in the cluster that starts at the head of `chars`.
pub fn cluster_len_at(chars: &[char]) -> usize {
    match chars {
        [] => 0,
        [only] if only.is_ascii() => 1,
        [first, next, ..] if first.is_ascii() && next.is_ascii() => 1,
        _ => cluster_lens(chars).first().copied().unwrap_or(0),
    }
}
