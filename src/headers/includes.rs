use log::{debug, info};
use std::path::Path;

use crate::errors::ToolError;
use crate::file_utils::FileManager;

// @module: Include path fixer for Windows builds

/// Rewrites the generated wrapper includes from `.pb.hpp` to `.pb.h`
#[derive(Debug, Clone)]
pub struct IncludeFixer {
    service_name: String,
}

impl IncludeFixer {
    // @param service_name: Directory and file stem of the generated wrappers
    pub fn new(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
        }
    }

    /// The `(search, replacement)` include lines, message header first
    pub fn replacements(&self) -> [(String, String); 2] {
        let svc = &self.service_name;
        let include = |suffix: &str| format!("#include \"Wrappers/{svc}/{svc}.{suffix}\"");
        [
            (include("pb.hpp"), include("pb.h")),
            (include("grpc.pb.hpp"), include("grpc.pb.h")),
        ]
    }

    /// Apply both replacements, returning the new text and the change count
    pub fn apply(&self, contents: &str) -> (String, usize) {
        self.replacements()
            .iter()
            .fold((contents.to_string(), 0), |(text, total), (from, to)| {
                let count = text.matches(from.as_str()).count();
                if count == 0 {
                    (text, total)
                } else {
                    (text.replace(from.as_str(), to), total + count)
                }
            })
    }

    /// Patch `path` in place
    pub fn fix_file<P: AsRef<Path>>(&self, path: P) -> Result<usize, ToolError> {
        let path = path.as_ref();
        let mut replaced = 0;
        FileManager::rewrite_in_place(path, |contents| {
            let (text, count) = self.apply(contents);
            replaced = count;
            text
        })?;

        if replaced == 0 {
            debug!("No {} wrapper includes found in {:?}", self.service_name, path);
        }
        info!("Fixed {} include(s) in {:?}", replaced, path);
        Ok(replaced)
    }
}
