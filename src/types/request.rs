//! The resolved target of a single generation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What `gounit` should generate tests for.
///
/// Built by the resolver from the active editor and dropped once the
/// generation finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Absolute path of the Go source file.
    pub file_path: PathBuf,
    /// 1-based line of the function signature, for single-function requests.
    pub function_line: Option<u32>,
    /// Display name of the function. Only used in messages.
    pub function_name: Option<String>,
}

impl GenerationRequest {
    /// Creates a request covering every function in `file_path`.
    #[must_use]
    pub fn whole_file(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            function_line: None,
            function_name: None,
        }
    }

    /// Creates a request for the function declared on `line` (1-based).
    #[must_use]
    pub fn function(file_path: impl Into<PathBuf>, line: u32, name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            function_line: Some(line),
            function_name: Some(name.into()),
        }
    }

    /// Returns `true` for single-function requests.
    #[must_use]
    pub fn is_function(&self) -> bool {
        self.function_line.is_some()
    }

    /// Returns the segment of the file path after the last separator.
    ///
    /// ```
    /// use gounit_ide::types::GenerationRequest;
    ///
    /// let request = GenerationRequest::whole_file("/a/b/server.go");
    /// assert_eq!(request.file_base_name(), "server.go");
    /// ```
    #[must_use]
    pub fn file_base_name(&self) -> String {
        base_name(&self.file_path)
    }

    /// Returns the name used in the confirmation message.
    #[must_use]
    pub fn display_target(&self) -> String {
        match (&self.function_line, &self.function_name) {
            (Some(_), Some(name)) => name.clone(),
            (Some(_), None) => String::new(),
            (None, _) => self.file_base_name(),
        }
    }
}

fn base_name(path: &Path) -> String {
    let text = path.to_string_lossy();
    text.rsplit(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR)
        .next()
        .unwrap_or_default()
        .to_string()
}
