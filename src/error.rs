//! Errors raised at the edges of the engine.
//!
//! Scoring itself is total; only config loading and payload decoding fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ChaosError {
    /// Config file could not be read
    #[error("Failed to read config at {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config document is not valid JSON for `EngineConfig`
    #[error("Invalid engine config: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// Matchup payload could not be decoded
    #[error("Invalid matchup payload: {0}")]
    Payload(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChaosError>;

#[cfg(feature = "python")]
impl From<ChaosError> for pyo3::PyErr {
    fn from(err: ChaosError) -> Self {
        match err {
            ChaosError::ConfigIo { .. } => pyo3::exceptions::PyIOError::new_err(err.to_string()),
            _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
        }
    }
}
