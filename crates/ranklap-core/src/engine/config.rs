use thiserror::Error;

/// Trial count used when the caller does not override it, matching the
/// constant the analysis pipeline has always used.
pub const DEFAULT_NUM_TRIALS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Number of null-model trials must be at least 1")]
    ZeroTrials,

    #[error("Requested {requested} trials, but the trial cap is {cap}")]
    TrialCapExceeded { requested: usize, cap: usize },
}

/// Parameters of a rank-overlap comparison.
///
/// The null model is always seeded: when no seed is supplied, the workflow
/// draws one at random and logs it so any run can be reproduced exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Number of independent permutation trials.
    pub num_trials: usize,
    /// Master seed for the permutation RNG; `None` means draw one at random.
    pub seed: Option<u64>,
    /// Refuse inputs longer than this many entries, if set.
    pub max_list_len: Option<usize>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            num_trials: DEFAULT_NUM_TRIALS,
            seed: None,
            max_list_len: None,
        }
    }
}

#[derive(Default)]
pub struct CompareConfigBuilder {
    num_trials: Option<usize>,
    seed: Option<u64>,
    max_trials: Option<usize>,
    max_list_len: Option<usize>,
}

impl CompareConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_trials(mut self, n: usize) -> Self {
        self.num_trials = Some(n);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Hard cap on the trial count; exceeding it fails the build rather than
    /// silently clamping.
    pub fn max_trials(mut self, cap: usize) -> Self {
        self.max_trials = Some(cap);
        self
    }

    /// Hard cap on input list length, enforced by the workflow before any
    /// trial runs.
    pub fn max_list_len(mut self, cap: usize) -> Self {
        self.max_list_len = Some(cap);
        self
    }

    pub fn build(self) -> Result<CompareConfig, ConfigError> {
        let num_trials = self.num_trials.unwrap_or(DEFAULT_NUM_TRIALS);
        if num_trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if let Some(cap) = self.max_trials {
            if num_trials > cap {
                return Err(ConfigError::TrialCapExceeded {
                    requested: num_trials,
                    cap,
                });
            }
        }
        Ok(CompareConfig {
            num_trials,
            seed: self.seed,
            max_list_len: self.max_list_len,
        })
    }
}
