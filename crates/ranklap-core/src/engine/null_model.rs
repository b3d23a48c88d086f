use super::overlap::jaccard_series;
use super::progress::{Progress, ProgressReporter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::instrument;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs `num_trials` independent permutation trials and returns the sampled
/// Jaccard series, one row per trial, each of length `min_len`.
///
/// Every trial shuffles a fresh copy of both full lists with its own RNG
/// derived from `(seed, trial index)`, then reruns the prefix-overlap
/// calculator. The inputs are never mutated, so the ordering needed for the
/// observed statistic survives sampling, and the trial-indexed seeding makes
/// the matrix identical whether trials run sequentially or in parallel.
#[instrument(skip_all, fields(min_len, num_trials, seed))]
pub fn null_series<S: AsRef<str> + Sync>(
    list1: &[S],
    list2: &[S],
    min_len: usize,
    num_trials: usize,
    seed: u64,
    reporter: &ProgressReporter,
) -> Vec<Vec<f64>> {
    reporter.report(Progress::TrialsStart {
        total: num_trials as u64,
    });

    let run_trial = |trial: usize| -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
        let mut shuffled1: Vec<&str> = list1.iter().map(AsRef::as_ref).collect();
        let mut shuffled2: Vec<&str> = list2.iter().map(AsRef::as_ref).collect();
        shuffled1.shuffle(&mut rng);
        shuffled2.shuffle(&mut rng);

        let series = jaccard_series(&shuffled1, &shuffled2, min_len);
        reporter.report(Progress::TrialCompleted);
        series
    };

    #[cfg(not(feature = "parallel"))]
    let trials: Vec<Vec<f64>> = (0..num_trials).map(run_trial).collect();

    #[cfg(feature = "parallel")]
    let trials: Vec<Vec<f64>> = (0..num_trials).into_par_iter().map(run_trial).collect();

    reporter.report(Progress::TrialsFinish);
    trials
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> (Vec<String>, Vec<String>) {
        let list1: Vec<String> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let list2: Vec<String> = ["C", "E", "A", "F", "B"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        (list1, list2)
    }

    #[test]
    fn produces_one_row_per_trial_with_min_len_columns() {
        let (list1, list2) = lists();
        let reporter = ProgressReporter::new();
        let trials = null_series(&list1, &list2, 5, 7, 99, &reporter);
        assert_eq!(trials.len(), 7);
        assert!(trials.iter().all(|row| row.len() == 5));
    }

    #[test]
    fn every_sampled_value_is_a_valid_jaccard_index() {
        let (list1, list2) = lists();
        let reporter = ProgressReporter::new();
        for row in null_series(&list1, &list2, 5, 20, 3, &reporter) {
            assert!(row.iter().all(|j| (0.0..=1.0).contains(j)));
        }
    }

    #[test]
    fn the_same_seed_reproduces_the_same_matrix() {
        let (list1, list2) = lists();
        let reporter = ProgressReporter::new();
        let first = null_series(&list1, &list2, 5, 10, 1234, &reporter);
        let second = null_series(&list1, &list2, 5, 10, 1234, &reporter);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_vary_the_samples() {
        let (list1, list2) = lists();
        let reporter = ProgressReporter::new();
        let first = null_series(&list1, &list2, 5, 10, 1, &reporter);
        let second = null_series(&list1, &list2, 5, 10, 2, &reporter);
        assert_ne!(first, second);
    }

    #[test]
    fn sampling_leaves_the_input_lists_untouched() {
        let (list1, list2) = lists();
        let (orig1, orig2) = (list1.clone(), list2.clone());
        let reporter = ProgressReporter::new();
        null_series(&list1, &list2, 5, 5, 0, &reporter);
        assert_eq!(list1, orig1);
        assert_eq!(list2, orig2);
    }

    #[test]
    fn zero_min_len_yields_empty_rows() {
        let (list1, list2) = lists();
        let reporter = ProgressReporter::new();
        let trials = null_series(&list1, &list2, 0, 3, 0, &reporter);
        assert_eq!(trials.len(), 3);
        assert!(trials.iter().all(Vec::is_empty));
    }

    #[test]
    fn reporter_receives_one_completion_per_trial() {
        use std::sync::atomic::{AtomicU64, Ordering};

        let (list1, list2) = lists();
        let completed = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if matches!(event, Progress::TrialCompleted) {
                completed.fetch_add(1, Ordering::Relaxed);
            }
        }));
        null_series(&list1, &list2, 5, 12, 0, &reporter);
        assert_eq!(completed.load(Ordering::Relaxed), 12);
    }
}
