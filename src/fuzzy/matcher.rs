//! Approximate string matching used as a supplementary candidate source.
//!
//! Similarity is the Ratcliff/Obershelp ratio: recursively find the longest
//! common contiguous block, count its length plus the matches on either
//! side, and scale by the combined length. 1.0 means identical, 0.0 means
//! no characters in common.

use std::collections::HashMap;

/// Similarity ratio in [0, 1] between two strings.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_total(&a, &b) as f64 / total as f64
}

fn matching_total(a: &[char], b: &[char]) -> usize {
    let (ai, bi, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }
    size
        + matching_total(&a[..ai], &b[..bi])
        + matching_total(&a[ai + size..], &b[bi + size..])
}

/// Longest common contiguous block, earliest in `a` then `b` on ties.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // j2len[j] = length of the common suffix ending at a[i-1], b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, &ac) in a.iter().enumerate() {
        let mut next: HashMap<usize, usize> = HashMap::new();
        for (j, &bc) in b.iter().enumerate() {
            if ac == bc {
                let k = match j.checked_sub(1) {
                    Some(prev) => j2len.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                next.insert(j, k);
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        j2len = next;
    }
    best
}

/// Up to `n` words from `pool` whose similarity to `query` reaches
/// `cutoff`, best first. Ties keep pool order.
pub fn close_matches(query: &str, pool: &[String], n: usize, cutoff: f64) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = pool
        .iter()
        .filter_map(|w| {
            let r = ratio(query, w);
            (r >= cutoff).then_some((r, w))
        })
        .collect();
    // Stable sort keeps first-seen order among equal ratios.
    scored.sort_by(|x, y| y.0.partial_cmp(&x.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(n).map(|(_, w)| w.clone()).collect()
}
