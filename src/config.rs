//! Application configuration.
//!
//! Configuration is a JSON document read through a capability-scoped
//! directory handle. Every field is optional; a missing document yields
//! [`AppConfig::default`].
//!
//! ```json
//! {
//!   "seed_tasks": ["Wash clothes"],
//!   "log_filter": "ticklist=debug",
//!   "list_template": null,
//!   "deterministic_ids": false
//! }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "TICKLIST_CONFIG";

/// Log filter applied when neither `RUST_LOG` nor the configuration set one.
pub const DEFAULT_LOG_FILTER: &str = "ticklist=info";

/// Item the list starts with when no configuration overrides the seed.
pub const DEFAULT_SEED_TASK: &str = "Wash clothes";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The path has no file name component.
    #[error("configuration path '{0}' does not name a file")]
    InvalidPath(Utf8PathBuf),

    /// The file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Read {
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("failed to parse configuration '{path}': {source}")]
    Parse {
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Runtime settings for the terminal application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Descriptions the list starts with.
    pub seed_tasks: Vec<String>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    /// Custom `minijinja` list template.
    pub list_template: Option<String>,
    /// Use counter-based identifiers instead of random UUIDs.
    pub deterministic_ids: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_tasks: vec![DEFAULT_SEED_TASK.to_owned()],
            log_filter: None,
            list_template: None,
            deterministic_ids: false,
        }
    }
}

impl AppConfig {
    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the document is malformed.
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be opened, read or
    /// parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::InvalidPath(path.to_owned()))?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let read_error = |source| ConfigError::Read {
            path: path.to_owned(),
            source,
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Loads configuration from `path` when given, or the default otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicitly named file cannot be
    /// loaded.
    pub fn load_or_default(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Returns the effective log filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
