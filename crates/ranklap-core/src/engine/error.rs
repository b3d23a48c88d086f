use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Ranked list with {len} entries exceeds the configured cap of {cap}")]
    ListCapExceeded { len: usize, cap: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
