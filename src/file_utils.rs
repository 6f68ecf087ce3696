use std::fs;
use std::path::Path;

use crate::errors::ToolError;

// @module: File read/write helpers shared by the utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Read a UTF-8 file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, ToolError> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|e| ToolError::io(path, e))
    }

    /// Write a string to a file, replacing any previous content.
    ///
    /// This is a single plain write: no temp file, no rename. A crash in
    /// the middle can leave a partially written file behind.
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), ToolError> {
        let path = path.as_ref();
        fs::write(path, content).map_err(|e| ToolError::io(path, e))
    }

    /// Read `path`, apply `edit` to its content and write the result back
    pub fn rewrite_in_place<P, F>(path: P, edit: F) -> Result<(), ToolError>
    where
        P: AsRef<Path>,
        F: FnOnce(&str) -> String,
    {
        let path = path.as_ref();
        let contents = Self::read_to_string(path)?;
        let updated = edit(&contents);
        Self::write_to_file(path, &updated)
    }
}
