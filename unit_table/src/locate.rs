//! Definition file lookup and loading.
//!
//! Without an explicit path the locator tries `convert.def` in the working
//! directory, then in `$HOME/bin`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::DefinitionError;
use crate::parser::parse_definitions;
use crate::records::DefinitionRecord;

/// Default name of the definition file.
pub const DEFAULT_FILE_NAME: &str = "convert.def";

/// Where to look for the definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Use exactly this file and skip the directory search.
    pub path: Option<PathBuf>,

    /// File name looked up in each search directory.
    pub file_name: String,

    /// Directories searched in order.
    pub search_dirs: Vec<PathBuf>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            path: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            search_dirs: default_search_dirs(),
        }
    }
}

/// The working directory followed by `$HOME/bin` when `HOME` is set.
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(".")];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join("bin"));
    }
    dirs
}

/// Resolves the definition file from a [`LocatorConfig`].
#[derive(Debug, Clone)]
pub struct DefinitionLocator {
    config: LocatorConfig,
}

impl DefinitionLocator {
    /// Create a locator with the given configuration.
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Override the search with a single explicit file.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    /// Paths that would be tried, in order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        match &self.config.path {
            Some(path) => vec![path.clone()],
            None => self
                .config
                .search_dirs
                .iter()
                .map(|dir| dir.join(&self.config.file_name))
                .collect(),
        }
    }

    /// Return the first candidate that is an existing file.
    pub fn locate(&self) -> Result<PathBuf, DefinitionError> {
        let candidates = self.candidates();
        for candidate in &candidates {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "using definition file");
                return Ok(candidate.clone());
            }
            debug!(path = %candidate.display(), "definition file not found");
        }
        Err(DefinitionError::NotFound {
            searched: candidates,
        })
    }

    /// Locate and load the definition file.
    pub fn load(&self) -> Result<DefinitionFile, DefinitionError> {
        let path = self.locate()?;
        DefinitionFile::read(path)
    }
}

/// A parsed definition file.
#[derive(Debug, Clone)]
pub struct DefinitionFile {
    pub path: PathBuf,
    pub records: Vec<DefinitionRecord>,
}

impl DefinitionFile {
    /// Read and parse the file at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref().to_path_buf();
        let source = std::fs::read_to_string(&path).map_err(|source| DefinitionError::Io {
            path: path.clone(),
            source,
        })?;
        let records = parse_definitions(&source)?;
        Ok(Self { path, records })
    }
}
