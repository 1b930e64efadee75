//! Run configuration.
//!
//! Read from an optional TOML file (`strider.toml` in the working directory
//! unless a path is given). Missing keys take the built-in defaults, command
//! line flags are applied on top by the binary.
//!
//! ```toml
//! inputs = ["book1.csv", "book2.csv"]
//! delimiter = ","
//! frontier = "heap"
//! parallel = true
//!
//! [columns]
//! source = "Source"
//! target = "Target"
//! weight = "weight"
//!
//! [output]
//! all_pairs = "all_shortest_paths.txt"
//! single = "shortest_path.txt"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    algo::shortest_paths::FrontierKind,
    io::{
        report::{ALL_PAIRS_FILE, SINGLE_FILE},
        Columns, LoadOptions,
    },
};

/// Configuration file looked up when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "strider.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Edge list files, loaded in this order.
    pub inputs: Vec<PathBuf>,
    pub columns: Columns,
    pub delimiter: char,
    pub frontier: FrontierKind,
    /// Run the all pairs searches on the thread pool.
    pub parallel: bool,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub all_pairs: PathBuf,
    pub single: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            columns: Columns::default(),
            delimiter: ',',
            frontier: FrontierKind::default(),
            parallel: false,
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            all_pairs: PathBuf::from(ALL_PAIRS_FILE),
            single: PathBuf::from(SINGLE_FILE),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Loads the explicitly given file, or the default file if it exists, or
    /// falls back to the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load(path)
                } else {
                    tracing::debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Reject an unusable delimiter at load time.
        config.load_options()?;

        tracing::debug!(path = %path.display(), "config loaded");

        Ok(config)
    }

    pub fn load_options(&self) -> Result<LoadOptions, ConfigError> {
        if !self.delimiter.is_ascii() {
            return Err(ConfigError::InvalidDelimiter(self.delimiter));
        }

        Ok(LoadOptions {
            columns: self.columns.clone(),
            delimiter: self.delimiter as u8,
        })
    }
}
