//! Editor host abstraction.
//!
//! The orchestrator never talks to a concrete editor. It reads state and
//! requests actions through the [`Editor`] trait, which is implemented by:
//!
//! - [`snapshot::SnapshotEditor`]: built from state sent over the IDE bridge,
//!   records actions for the extension to replay
//! - [`terminal::TerminalEditor`]: backs the one-shot CLI subcommands

pub mod snapshot;
pub mod terminal;

use crate::types::{GounitSettings, SettingsError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use snapshot::{EditorAction, EditorSnapshot, SnapshotEditor};
pub use terminal::TerminalEditor;

/// 1-based index of an editor pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewColumn(pub u32);

/// State of the document in the active editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDocument {
    /// Absolute path of the document.
    pub path: PathBuf,
    /// Whether the document has unsaved modifications.
    #[serde(default)]
    pub is_dirty: bool,
    /// Line of the primary cursor (0-indexed).
    #[serde(default)]
    pub cursor_line: u32,
    /// Text of the line under the cursor.
    #[serde(default)]
    pub line_text: String,
}

impl ActiveDocument {
    /// Creates a saved document with the cursor on the first line.
    #[must_use]
    pub fn saved(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dirty: false,
            cursor_line: 0,
            line_text: String::new(),
        }
    }

    /// Places the cursor on `line` (0-indexed) whose text is `text`.
    #[must_use]
    pub fn with_cursor(mut self, line: u32, text: impl Into<String>) -> Self {
        self.cursor_line = line;
        self.line_text = text.into();
        self
    }

    /// Marks the document as having unsaved changes.
    #[must_use]
    pub fn dirty(mut self) -> Self {
        self.is_dirty = true;
        self
    }
}

/// A document shown in one of the visible panes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleEditor {
    /// Path of the shown document.
    pub path: PathBuf,
    /// Pane the document is shown in.
    pub column: ViewColumn,
}

/// Operations the orchestrator needs from the editor host.
pub trait Editor {
    /// Returns the document in the active editor, if any.
    fn active_document(&self) -> Option<ActiveDocument>;

    /// Returns the documents shown in visible panes.
    fn visible_editors(&self) -> Vec<VisibleEditor>;

    /// Opens `path`, in `column` when given or in a new pane otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot open the file.
    fn open(&mut self, path: &Path, column: Option<ViewColumn>) -> Result<()>;

    /// Shows a non-blocking informational notification.
    fn show_information_message(&mut self, message: &str);

    /// Returns the settings scoped to `document`.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be loaded.
    fn settings_for(&self, document: &Path) -> Result<GounitSettings, SettingsError> {
        GounitSettings::discover(document)
    }
}
