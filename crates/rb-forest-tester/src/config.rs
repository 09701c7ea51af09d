use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}

/// What a tester run does.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "nodes": 5000, "seed": 42, "rounds": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TesterConfig {
    /// Number of distinct random values drawn per round.
    pub nodes: usize,
    /// PRNG seed. Drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Fixed values to insert instead of random ones. Duplicates are allowed.
    pub values: Option<Vec<i64>>,
    pub rounds: usize,
    /// Dump the tree after the insert phase and after each removal.
    pub print_log: bool,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            nodes: 1000,
            seed: None,
            values: None,
            rounds: 1,
            print_log: false,
        }
    }
}

impl TesterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
