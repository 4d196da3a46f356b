//! Round-robin pair enumeration

/// All unordered index pairs `(i, j)` with `i < j`, in i-then-j ascending
/// order. A pool of size k yields exactly k·(k−1)/2 pairs; no index is
/// paired with itself and no pair repeats.
pub fn round_robin_pairs(count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(count * count.saturating_sub(1) / 2);
    for i in 0..count {
        for j in (i + 1)..count {
            pairs.push((i, j));
        }
    }
    pairs
}
