//! Optional TOML configuration.
//!
//! ```toml
//! [definitions]
//! path = "/opt/units/convert.def"
//! file_name = "convert.def"
//! search_dirs = [".", "/home/me/bin"]
//!
//! [output]
//! precision = 8
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use unit_table::LocatorConfig;

/// Significant digits printed for numbers by default.
pub const DEFAULT_PRECISION: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Significant digits for printed numbers.
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Configuration of the `convert` binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub definitions: LocatorConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
