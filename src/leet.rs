//! Leetspeak expansion
//!
//! Substitutions are applied position by position, left to right. Each eligible
//! position of the *original* word is visited once, and its replacements are
//! applied to every variant accumulated so far. The result therefore contains
//! every combination of substituted and untouched positions.
//!
//! Positions are character indices into the original word. A multi-character
//! replacement shifts the tail of a variant, yet later positions still index
//! the variant at the original offsets; substituted text is never revisited.

use crate::config::{lower_char, LeetMap};
use hashbrown::HashSet;

/// All strings reachable from `word` by substituting any subset of its
/// eligible positions.
pub fn leet_expand(word: &str, leet_map: &LeetMap) -> HashSet<String> {
    let positions: Vec<(usize, &[String])> = word
        .chars()
        .enumerate()
        .filter_map(|(i, c)| leet_map.get(lower_char(c)).map(|reps| (i, reps)))
        .collect();

    let mut variants = HashSet::with_capacity(1 << positions.len().min(16));
    variants.insert(word.to_string());

    for (index, replacements) in positions {
        let produced: Vec<String> = variants
            .iter()
            .flat_map(|v| replacements.iter().map(move |r| splice(v, index, r)))
            .collect();
        variants.extend(produced);
    }

    variants
}

/// Replace the character at char index `index` with `replacement`. An index at
/// or past the end appends.
fn splice(variant: &str, index: usize, replacement: &str) -> String {
    let start = variant
        .char_indices()
        .nth(index)
        .map_or(variant.len(), |(b, _)| b);
    let end = variant[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());

    let mut out = String::with_capacity(variant.len() + replacement.len());
    out.push_str(&variant[..start]);
    out.push_str(replacement);
    out.push_str(&variant[end..]);
    out
}
