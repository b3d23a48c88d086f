/// Computes the best Jaccard index attainable at each prefix length from 1 to
/// `min_len`, given that only `shared` identifiers are common to the two full
/// lists.
///
/// At prefix length `i` the best arrangement packs all shared identifiers
/// first, so the attainable intersection is `min(i, shared)`; every element
/// beyond that is a union-only addition on each side, penalized at 2 per unit
/// of excess. With `shared = 0` the bound is 0 at every threshold (not a
/// division error); with `shared >= min_len` it is 1 everywhere.
pub fn max_jaccard(shared: usize, min_len: usize) -> Vec<f64> {
    (1..=min_len)
        .map(|i| {
            let effective = i.min(shared);
            let excess = i.saturating_sub(shared);
            let denominator = effective + 2 * excess;
            if denominator == 0 {
                0.0
            } else {
                effective as f64 / denominator as f64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_shared_identifiers_bounds_every_threshold_at_zero() {
        assert_eq!(max_jaccard(0, 5), vec![0.0; 5]);
    }

    #[test]
    fn full_sharing_bounds_every_threshold_at_one() {
        assert_eq!(max_jaccard(4, 4), vec![1.0; 4]);
        assert_eq!(max_jaccard(10, 4), vec![1.0; 4]);
    }

    #[test]
    fn excess_beyond_the_shared_pool_is_penalized_twice_per_unit() {
        // shared = 2: thresholds 1..4 give 1/1, 2/2, 2/(2+2), 2/(2+4).
        assert_eq!(max_jaccard(2, 4), vec![1.0, 1.0, 0.5, 1.0 / 3.0]);
    }

    #[test]
    fn zero_min_len_yields_an_empty_bound() {
        assert!(max_jaccard(3, 0).is_empty());
    }

    #[test]
    fn the_bound_never_leaves_the_unit_interval_and_never_increases() {
        let bound = max_jaccard(7, 40);
        for pair in bound.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert!(bound.iter().all(|j| (0.0..=1.0).contains(j)));
    }
}
