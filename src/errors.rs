/*!
 * Error types for the ue4-proto-tools utilities.
 *
 * Library operations return `ToolError`; the binaries wrap it with
 * `anyhow` context and turn any failure into exit status 1.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running one of the build utilities
#[derive(Error, Debug)]
pub enum ToolError {
    /// A required command-line flag is absent or has an empty value
    #[error("No path to {what} given. Use {flag}.")]
    MissingArgument {
        /// Human readable name of the expected value
        what: &'static str,
        /// The flag that should have carried it
        flag: &'static str,
    },

    /// Reading or writing a file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// The file the operation was applied to
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ToolError {
    /// Shorthand for an I/O failure on `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error comes from argument validation
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::MissingArgument { .. })
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
