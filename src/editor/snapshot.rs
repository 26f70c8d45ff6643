//! Editor backed by a state snapshot from the IDE bridge.
//!
//! The extension sends the state it has at command time. Actions requested
//! by the orchestrator are recorded in order and sent back for the extension
//! to perform.

use super::{ActiveDocument, Editor, ViewColumn, VisibleEditor};
use crate::types::{GounitSettings, SettingsError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Editor state captured by the extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    /// Document in the active editor.
    #[serde(default)]
    pub active: Option<ActiveDocument>,
    /// Documents shown in visible panes.
    #[serde(default)]
    pub visible: Vec<VisibleEditor>,
    /// Settings resolved by the extension for the active document.
    ///
    /// When absent, settings are discovered from `gounit.toml` files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<GounitSettings>,
}

/// An action for the extension to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorAction {
    /// Show an informational notification.
    ShowInformationMessage {
        /// Notification text
        message: String,
    },

    /// Open a file.
    Open {
        /// File to open
        path: PathBuf,
        /// Pane to reuse; a new pane when absent
        #[serde(skip_serializing_if = "Option::is_none")]
        column: Option<ViewColumn>,
    },
}

/// [`Editor`] that reads from a snapshot and records actions.
#[derive(Debug, Clone, Default)]
pub struct SnapshotEditor {
    snapshot: EditorSnapshot,
    actions: Vec<EditorAction>,
}

impl SnapshotEditor {
    /// Creates an editor over `snapshot` with no recorded actions.
    #[must_use]
    pub fn new(snapshot: EditorSnapshot) -> Self {
        Self {
            snapshot,
            actions: Vec::new(),
        }
    }

    /// Returns the actions recorded so far.
    #[must_use]
    pub fn actions(&self) -> &[EditorAction] {
        &self.actions
    }

    /// Consumes the editor, returning the recorded actions.
    #[must_use]
    pub fn into_actions(self) -> Vec<EditorAction> {
        self.actions
    }

    /// Returns the messages shown so far.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                EditorAction::ShowInformationMessage { message } => Some(message.as_str()),
                EditorAction::Open { .. } => None,
            })
            .collect()
    }
}

impl Editor for SnapshotEditor {
    fn active_document(&self) -> Option<ActiveDocument> {
        self.snapshot.active.clone()
    }

    fn visible_editors(&self) -> Vec<VisibleEditor> {
        self.snapshot.visible.clone()
    }

    fn open(&mut self, path: &Path, column: Option<ViewColumn>) -> Result<()> {
        self.actions.push(EditorAction::Open {
            path: path.to_path_buf(),
            column,
        });
        Ok(())
    }

    fn show_information_message(&mut self, message: &str) {
        self.actions.push(EditorAction::ShowInformationMessage {
            message: message.to_string(),
        });
    }

    fn settings_for(&self, document: &Path) -> Result<GounitSettings, SettingsError> {
        match &self.snapshot.settings {
            Some(settings) => Ok(settings.clone()),
            None => GounitSettings::discover(document),
        }
    }
}
