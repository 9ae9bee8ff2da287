//! Errors raised while locating, reading, or parsing a definition file.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the definition table. All of them abort the load.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// No readable definition file in any of the searched locations.
    #[error("cannot open definition file (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    /// The file exists but could not be read.
    #[error("cannot read definition file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not follow the definition file format.
    #[error("error in definition file, line {line}: {message}")]
    Syntax { line: usize, message: String },
}

impl DefinitionError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        DefinitionError::Syntax {
            line,
            message: message.into(),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
