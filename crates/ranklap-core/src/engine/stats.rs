use tracing::warn;

/// Summary of the null distribution at one prefix length.
///
/// `variance` is the Bessel-corrected sample variance (n-1 denominator), a
/// deliberate choice over the population estimator; with a single trial it
/// is defined as 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistic {
    pub mean: f64,
    pub variance: f64,
    pub n: usize,
}

/// Reduces a trial-major sample matrix to one [`SummaryStatistic`] per prefix
/// length.
///
/// # Panics
///
/// Panics in debug builds if any trial row is shorter than `min_len`.
pub fn summarize(trials: &[Vec<f64>], min_len: usize) -> Vec<SummaryStatistic> {
    debug_assert!(trials.iter().all(|row| row.len() >= min_len));

    let n = trials.len();
    (0..min_len)
        .map(|k| {
            let mean = trials.iter().map(|row| row[k]).sum::<f64>() / n as f64;
            let variance = if n > 1 {
                let sum_sq: f64 = trials
                    .iter()
                    .map(|row| {
                        let d = row[k] - mean;
                        d * d
                    })
                    .sum();
                // Squared deviations cannot go negative, but rounding can
                // leave a tiny negative residue; clamp before any sqrt.
                (sum_sq / (n - 1) as f64).max(0.0)
            } else {
                0.0
            };
            SummaryStatistic { mean, variance, n }
        })
        .collect()
}

/// Standardizes an observed value against a null distribution summary.
///
/// A degenerate null distribution (zero variance) makes the Z-score
/// mathematically undefined; it is surfaced as `NaN` so the condition is
/// detectable in the output instead of crashing or reporting a wrong number.
pub fn z_score(observed: f64, null: &SummaryStatistic) -> f64 {
    if null.variance <= 0.0 {
        warn!(
            mean = null.mean,
            n = null.n,
            "Null distribution is degenerate (zero variance); Z-score is undefined"
        );
        return f64::NAN;
    }
    (observed - null.mean) / null.variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_computes_mean_and_sample_variance_per_threshold() {
        // Column 0: samples 1, 2, 3 -> mean 2, sample variance 1.
        // Column 1: samples 4, 4, 4 -> mean 4, variance 0.
        let trials = vec![vec![1.0, 4.0], vec![2.0, 4.0], vec![3.0, 4.0]];
        let stats = summarize(&trials, 2);

        assert_eq!(stats.len(), 2);
        assert!((stats[0].mean - 2.0).abs() < 1e-12);
        assert!((stats[0].variance - 1.0).abs() < 1e-12);
        assert_eq!(stats[0].n, 3);
        assert!((stats[1].mean - 4.0).abs() < 1e-12);
        assert_eq!(stats[1].variance, 0.0);
    }

    #[test]
    fn summarize_of_a_single_trial_has_zero_variance_everywhere() {
        let trials = vec![vec![0.25, 0.5, 0.75]];
        for stat in summarize(&trials, 3) {
            assert_eq!(stat.variance, 0.0);
            assert_eq!(stat.n, 1);
        }
    }

    #[test]
    fn summarize_with_zero_min_len_is_empty() {
        let trials = vec![vec![0.1], vec![0.2]];
        assert!(summarize(&trials, 0).is_empty());
    }

    #[test]
    fn z_score_standardizes_by_the_null_standard_deviation() {
        let null = SummaryStatistic {
            mean: 0.5,
            variance: 0.04,
            n: 100,
        };
        // (0.9 - 0.5) / 0.2 = 2.0, stdev not variance in the denominator.
        assert!((z_score(0.9, &null) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn z_score_of_a_degenerate_null_is_nan() {
        let null = SummaryStatistic {
            mean: 0.5,
            variance: 0.0,
            n: 1,
        };
        assert!(z_score(0.9, &null).is_nan());
    }
}
