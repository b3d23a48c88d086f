use crate::core::ranking::RankedList;
use crate::core::report::ReportRow;
use crate::engine::bound::max_jaccard;
use crate::engine::config::{CompareConfig, ConfigError};
use crate::engine::error::EngineError;
use crate::engine::null_model::null_series;
use crate::engine::overlap::jaccard_series;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::stats::{summarize, z_score};
use rand::{Rng, thread_rng};
use tracing::{info, instrument};

/// Outcome of a full rank-overlap comparison.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// Prefix-length ceiling, `min(|list1|, |list2|)`.
    pub min_len: usize,
    /// Distinct identifiers common to the two full lists.
    pub shared_count: usize,
    /// Master seed the null model actually ran with; logging it makes every
    /// run reproducible even when the seed was drawn at random.
    pub seed: u64,
    /// One row per prefix length, in increasing threshold order.
    pub rows: Vec<ReportRow>,
}

/// Runs the complete significance analysis of two ranked lists.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if `config.num_trials` is 0, or
/// [`EngineError::ListCapExceeded`] if either list is longer than the
/// configured cap. Empty input is not an error: the result simply carries no
/// rows.
#[instrument(skip_all, name = "compare_workflow")]
pub fn run(
    list1: &RankedList,
    list2: &RankedList,
    config: &CompareConfig,
    reporter: &ProgressReporter,
) -> Result<ComparisonResult, EngineError> {
    validate(list1, list2, config)?;

    let seed = config.seed.unwrap_or_else(|| thread_rng().r#gen());
    let min_len = list1.len().min(list2.len());
    info!(
        min_len,
        num_trials = config.num_trials,
        seed,
        "Starting rank-overlap comparison"
    );

    if min_len == 0 {
        info!("At least one ranking is empty; emitting an empty report");
        return Ok(ComparisonResult {
            min_len,
            shared_count: 0,
            seed,
            rows: Vec::new(),
        });
    }

    reporter.report(Progress::PhaseStart {
        name: "Observed overlap",
    });
    let observed = jaccard_series(list1.ids(), list2.ids(), min_len);
    reporter.report(Progress::PhaseFinish);

    let trials = null_series(
        list1.ids(),
        list2.ids(),
        min_len,
        config.num_trials,
        seed,
        reporter,
    );
    let null_stats = summarize(&trials, min_len);

    reporter.report(Progress::PhaseStart {
        name: "Theoretical bound",
    });
    let shared_count = list1.shared_count(list2);
    let bound = max_jaccard(shared_count, min_len);
    reporter.report(Progress::PhaseFinish);

    let rows = observed
        .iter()
        .zip(&null_stats)
        .zip(&bound)
        .enumerate()
        .map(|(k, ((&observed_j, null), &max_j))| ReportRow {
            threshold: k + 1,
            observed_j,
            null_mean: null.mean,
            null_variance: null.variance,
            z_score: z_score(observed_j, null),
            max_j,
        })
        .collect();

    info!(shared_count, "Comparison complete");
    Ok(ComparisonResult {
        min_len,
        shared_count,
        seed,
        rows,
    })
}

fn validate(
    list1: &RankedList,
    list2: &RankedList,
    config: &CompareConfig,
) -> Result<(), EngineError> {
    if config.num_trials == 0 {
        return Err(ConfigError::ZeroTrials.into());
    }
    if let Some(cap) = config.max_list_len {
        for len in [list1.len(), list2.len()] {
            if len > cap {
                return Err(EngineError::ListCapExceeded { len, cap });
            }
        }
    }
    Ok(())
}
