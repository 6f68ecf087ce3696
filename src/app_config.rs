use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ToolError;
use crate::file_utils::FileManager;

/// Application configuration module
/// Settings for the header patching utilities and logging. Every field has
/// a default, so a config file only needs the keys it wants to change.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Name of the generated service, as used in the wrapper include paths
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Warnings disabled by the pragma injector, in output order
    #[serde(default = "default_pragma_warnings")]
    pub pragma_warnings: Vec<PragmaWarning>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// One MSVC warning to silence in generated code
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PragmaWarning {
    // @field: Compiler warning number
    pub code: u32,

    // @field: Trailing explanation written after the pragma
    #[serde(default = "String::new")]
    pub comment: String,
}

impl PragmaWarning {
    pub fn new(code: u32, comment: &str) -> Self {
        Self {
            code,
            comment: comment.to_string(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_service_name() -> String {
    "economy_service".to_string()
}

fn default_pragma_warnings() -> Vec<PragmaWarning> {
    vec![
        PragmaWarning::new(4800, "forcing value to bool true or false"),
        PragmaWarning::new(4125, "decimal digit terminates octal escape sequence"),
        PragmaWarning::new(4647, "behavior change __is_pod has different value in previous version"),
        PragmaWarning::new(
            4668,
            "'symbol' is not defined as a preprocessor macro, replacing with '0' for 'directives'",
        ),
        PragmaWarning::new(4946, "reinterpret_cast used"),
    ]
}

impl Config {
    /// Load a configuration file. Missing keys fall back to their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ToolError> {
        let path = path.as_ref();
        let contents = FileManager::read_to_string(path)
            .map_err(|e| ToolError::Config(format!("failed to read {:?}: {}", path, e)))?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, otherwise use the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ToolError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ToolError> {
        let name = self.service_name.trim();
        if name.is_empty() {
            return Err(ToolError::Config("service_name must not be empty".to_string()));
        }
        if name.contains(['/', '\\', '"']) {
            return Err(ToolError::Config(format!(
                "service_name must be a bare name, got {:?}",
                self.service_name
            )));
        }

        if let Some(warning) = self.pragma_warnings.iter().find(|w| w.code == 0) {
            return Err(ToolError::Config(format!(
                "pragma warning code must be non-zero (comment: {:?})",
                warning.comment
            )));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            pragma_warnings: default_pragma_warnings(),
            log_level: LogLevel::default(),
        }
    }
}
