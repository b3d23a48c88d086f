use std::collections::HashSet;

/// Computes the Jaccard index of the two growing prefixes at every prefix
/// length from 1 to `min_len`, in O(min_len) total.
///
/// The calculator keeps a pending set of identifiers seen in exactly one of
/// the two prefixes so far, plus running intersection and union counters. At
/// step `i` it processes `list1[i]` then `list2[i]`: an incoming identifier
/// already pending cancels out of the pool and counts toward the
/// intersection; otherwise it joins the pool and counts toward the union.
/// `series[k-1]` is the cumulative `intersection / union` after step `k`.
///
/// For duplicate-free inputs this equals the plain set Jaccard index of the
/// two prefixes at every length. `min_len = 0` yields an empty series.
///
/// # Panics
///
/// Panics in debug builds if `min_len` exceeds either input length.
pub fn jaccard_series<S: AsRef<str>>(list1: &[S], list2: &[S], min_len: usize) -> Vec<f64> {
    debug_assert!(min_len <= list1.len() && min_len <= list2.len());

    let mut series = Vec::with_capacity(min_len);
    let mut pending: HashSet<&str> = HashSet::new();
    let mut intersection: u64 = 0;
    let mut union: u64 = 0;

    for i in 0..min_len {
        for id in [list1[i].as_ref(), list2[i].as_ref()] {
            if pending.remove(id) {
                intersection += 1;
            } else {
                pending.insert(id);
                union += 1;
            }
        }
        // union >= 1 here: each step inserts at least one identifier or
        // cancels one inserted earlier, and a cancel requires a prior insert.
        series.push(intersection as f64 / union as f64);
    }

    series
}
