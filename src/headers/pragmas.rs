use log::info;
use std::path::Path;

use crate::app_config::PragmaWarning;
use crate::errors::ToolError;
use crate::file_utils::FileManager;

/// First line of the injected block
pub const PRAGMA_BANNER: &str = "// Extra pramas to fix compilation in UE4.  DO NOT EDIT!";

/// Prepends `#pragma warning (disable : N)` lines to generated sources
#[derive(Debug, Clone)]
pub struct PragmaInjector {
    warnings: Vec<PragmaWarning>,
}

impl PragmaInjector {
    pub fn new(warnings: Vec<PragmaWarning>) -> Self {
        Self { warnings }
    }

    /// The block written in front of the file, ending with a blank line
    pub fn header(&self) -> String {
        let mut header = String::from(PRAGMA_BANNER);
        header.push('\n');
        for warning in &self.warnings {
            header.push_str(&format!("#pragma warning (disable : {})", warning.code));
            if !warning.comment.is_empty() {
                header.push_str(" // ");
                header.push_str(&warning.comment);
            }
            header.push('\n');
        }
        header.push('\n');
        header
    }

    /// Prepend the header. No check is made for an existing block.
    pub fn apply(&self, contents: &str) -> String {
        format!("{}{}", self.header(), contents)
    }

    /// Patch `path` in place
    pub fn inject_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ToolError> {
        let path = path.as_ref();
        FileManager::rewrite_in_place(path, |contents| self.apply(contents))?;
        info!("Injected {} pragma(s) into {:?}", self.warnings.len(), path);
        Ok(())
    }
}

impl Default for PragmaInjector {
    fn default() -> Self {
        Self::new(crate::app_config::Config::default().pragma_warnings)
    }
}
