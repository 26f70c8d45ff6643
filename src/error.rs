//! Centralized error types for gounit-ide.
//!
//! This module provides a unified error type (`GenError`) covering every
//! failure a command can hit: unmet editor preconditions, a missing or
//! failing `gounit` executable, and host errors raised while acting on the
//! result.
//!
//! Precondition errors never escape a command. The resolver reports them to
//! the user and the command resolves as skipped. They are still modelled
//! here so the resolver can describe which check failed.
//!
//! # Example
//!
//! ```
//! use gounit_ide::error::{GenError, GenResult};
//!
//! fn check_extension(path: &str) -> GenResult<()> {
//!     if !path.ends_with(".go") {
//!         return Err(GenError::wrong_file_type(path));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_extension("main.rs").unwrap_err();
//! assert!(err.is_precondition());
//! ```

use std::fmt;

/// Result type alias using `GenError`.
pub type GenResult<T> = Result<T, GenError>;

/// Centralized error type for gounit-ide.
#[derive(Debug)]
pub enum GenError {
    // ============== Precondition Errors ==============
    /// No editor is active in the host.
    NoEditor,

    /// The active document is not a Go source file.
    WrongFileType {
        /// Path of the offending document.
        path: String,
    },

    /// The active document has unsaved changes.
    UnsavedChanges {
        /// Path of the dirty document.
        path: String,
    },

    // ============== Tool Errors ==============
    /// The generator executable could not be found.
    ToolMissing {
        /// Name of the executable that was looked up.
        tool: String,
    },

    /// The generator ran but failed, or could not be started.
    ToolExecution {
        /// The full command line that was run.
        command: String,
        /// Exit code, if the process ran to completion.
        exit_code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },

    // ============== Host Errors ==============
    /// The host asked for a command that does not exist.
    UnknownCommand {
        /// The command id that was requested.
        command: String,
    },

    /// The editor host failed to carry out an action.
    Host {
        /// Description of the host failure.
        message: String,
    },

    // ============== Wrapped Errors ==============
    /// Error from anyhow or other sources.
    Other {
        /// The wrapped error message.
        message: String,
        /// The original error, if available.
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// ============== Constructor Methods ==============

impl GenError {
    /// Creates a wrong file type error.
    #[must_use]
    pub fn wrong_file_type(path: impl Into<String>) -> Self {
        Self::WrongFileType { path: path.into() }
    }

    /// Creates an unsaved changes error.
    #[must_use]
    pub fn unsaved_changes(path: impl Into<String>) -> Self {
        Self::UnsavedChanges { path: path.into() }
    }

    /// Creates a tool missing error.
    #[must_use]
    pub fn tool_missing(tool: impl Into<String>) -> Self {
        Self::ToolMissing { tool: tool.into() }
    }

    /// Creates a tool execution error.
    #[must_use]
    pub fn tool_execution(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::ToolExecution {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Creates a host error.
    #[must_use]
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }
}

// ============== Category Methods ==============

impl GenError {
    /// Returns `true` if this error reports an unmet editor precondition.
    ///
    /// These are reported to the user and turned into a no-op by the
    /// resolver; they never propagate out of a command.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NoEditor | Self::WrongFileType { .. } | Self::UnsavedChanges { .. }
        )
    }

    /// Returns `true` if the command should resolve without failing.
    #[must_use]
    pub fn is_non_fatal(&self) -> bool {
        self.is_precondition() || matches!(self, Self::ToolMissing { .. })
    }

    /// Returns the captured standard error for tool execution failures.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::ToolExecution { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    /// Returns the module name where this error originated.
    #[must_use]
    pub fn module(&self) -> &'static str {
        match self {
            Self::NoEditor | Self::WrongFileType { .. } | Self::UnsavedChanges { .. } => {
                "resolver"
            }
            Self::ToolMissing { .. } | Self::ToolExecution { .. } => "runner",
            Self::UnknownCommand { .. } => "commands",
            Self::Host { .. } => "editor",
            Self::Other { .. } => "unknown",
        }
    }
}

// ============== Display Implementation ==============

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEditor => write!(f, "resolver: no editor selected"),
            Self::WrongFileType { path } => {
                write!(f, "resolver: '{}' is not a Go file", path)
            }
            Self::UnsavedChanges { path } => {
                write!(f, "resolver: '{}' has unsaved changes", path)
            }
            Self::ToolMissing { tool } => {
                write!(f, "runner: executable '{}' not found", tool)
            }
            Self::ToolExecution {
                command,
                exit_code: Some(code),
                stderr,
            } => {
                write!(
                    f,
                    "runner: command '{}' exited with code {}: {}",
                    command,
                    code,
                    stderr.trim_end()
                )
            }
            Self::ToolExecution {
                command,
                exit_code: None,
                stderr,
            } => {
                write!(f, "runner: command '{}' failed: {}", command, stderr.trim_end())
            }
            Self::UnknownCommand { command } => {
                write!(f, "commands: unknown command '{}'", command)
            }
            Self::Host { message } => write!(f, "editor: {}", message),
            Self::Other { message, .. } => write!(f, "error: {}", message),
        }
    }
}

// ============== Error Implementation ==============

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Other {
                source: Some(src), ..
            } => Some(src.as_ref()),
            _ => None,
        }
    }
}

// ============== Conversion Implementations ==============

impl From<anyhow::Error> for GenError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            message: format!("{:#}", err),
            source: None,
        }
    }
}

impl From<std::io::Error> for GenError {
    fn from(err: std::io::Error) -> Self {
        Self::Other {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<crate::types::SettingsError> for GenError {
    fn from(err: crate::types::SettingsError) -> Self {
        Self::Other {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
