use ranklap::core::ranking::RankingError;
use ranklap::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse ranking '{path}': {source}", path = path.display())]
    RankingParsing {
        path: PathBuf,
        #[source]
        source: RankingError,
    },

    #[error("Failed to write report: {0}")]
    ReportWriting(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
