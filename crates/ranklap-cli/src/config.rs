use crate::cli::Cli;
use crate::error::{CliError, Result};
use ranklap::engine::config::{CompareConfig, CompareConfigBuilder};
use ranklap::engine::error::EngineError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Optional TOML counterpart of the engine configuration. Every field may be
/// omitted; command-line flags override file values, which override the
/// engine defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileCompareConfig {
    pub trials: Option<usize>,
    pub seed: Option<u64>,
    pub max_trials: Option<usize>,
    pub max_list_len: Option<usize>,
}

impl FileCompareConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Invalid config file '{}': {}", path.display(), e))
        })?;
        debug!(?config, "Loaded configuration file");
        Ok(config)
    }
}

/// Merges CLI flags over the optional config file into a validated
/// [`CompareConfig`].
pub fn build_config(cli: &Cli) -> Result<CompareConfig> {
    let file = match &cli.config {
        Some(path) => FileCompareConfig::from_file(path)?,
        None => FileCompareConfig::default(),
    };

    let mut builder = CompareConfigBuilder::new();
    if let Some(n) = cli.trials.or(file.trials) {
        builder = builder.num_trials(n);
    }
    if let Some(seed) = cli.seed.or(file.seed) {
        builder = builder.seed(seed);
    }
    if let Some(cap) = file.max_trials {
        builder = builder.max_trials(cap);
    }
    if let Some(cap) = cli.max_list_len.or(file.max_list_len) {
        builder = builder.max_list_len(cap);
    }

    builder
        .build()
        .map_err(|e| CliError::Engine(EngineError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("ranklap").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_apply_when_neither_flag_nor_file_is_given() {
        let cli = parse(&["a.txt", "b.txt"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.num_trials, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranklap.toml");
        std::fs::write(&path, "trials = 250\nseed = 7\n").unwrap();

        let cli = parse(&["a.txt", "b.txt", "--config", path.to_str().unwrap()]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.num_trials, 250);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranklap.toml");
        std::fs::write(&path, "trials = 250\nseed = 7\n").unwrap();

        let cli = parse(&[
            "a.txt",
            "b.txt",
            "--config",
            path.to_str().unwrap(),
            "--trials",
            "10",
            "--seed",
            "99",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.num_trials, 10);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranklap.toml");
        std::fs::write(&path, "trails = 250\n").unwrap();

        let cli = parse(&["a.txt", "b.txt", "--config", path.to_str().unwrap()]);
        assert!(matches!(build_config(&cli), Err(CliError::Config(_))));
    }

    #[test]
    fn a_trial_cap_from_the_file_rejects_an_oversized_flag_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranklap.toml");
        std::fs::write(&path, "max-trials = 100\n").unwrap();

        let cli = parse(&[
            "a.txt",
            "b.txt",
            "--config",
            path.to_str().unwrap(),
            "--trials",
            "5000",
        ]);
        assert!(matches!(build_config(&cli), Err(CliError::Engine(_))));
    }
}
