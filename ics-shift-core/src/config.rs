//! ics-shift configuration.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::{ShiftError, ShiftResult};

pub static DEFAULT_TARGET_PATH: &str = "demos/demo_import.ics";

fn default_target_path() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET_PATH)
}

/// Configuration at ~/.config/ics-shift/config.toml
///
/// Every key is optional. Without a config file the tool works on
/// [`DEFAULT_TARGET_PATH`].
#[derive(Debug, Deserialize, Clone)]
pub struct ShiftConfig {
    /// File rewritten when no path is given on the command line
    #[serde(default = "default_target_path")]
    pub default_file: PathBuf,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        ShiftConfig {
            default_file: default_target_path(),
        }
    }
}

impl ShiftConfig {
    pub fn config_path() -> ShiftResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ShiftError::Config("Could not determine config directory".into()))?
            .join("ics-shift");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. The default location is optional and
    /// is never created.
    pub fn load(path: Option<&Path>) -> ShiftResult<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path()?, false),
        };

        tracing::debug!(path = %config_path.display(), required, "loading config");

        Config::builder()
            .add_source(File::new(&config_path.to_string_lossy(), FileFormat::Toml).required(required))
            .build()
            .map_err(|e| ShiftError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ShiftError::Config(e.to_string()))
    }

    /// The configured default file with `~` expanded.
    pub fn default_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.default_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Pick the target: an explicit argument wins over the configured default.
    pub fn target_path(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.unwrap_or_else(|| self.default_path())
    }
}
