//! Switching between a Go source file and its test file.
//!
//! The pairing is purely textual: `x_test.go` <-> `x.go`. Neither file has
//! to exist for the counterpart to be computed.

use crate::editor::Editor;
use anyhow::Result;
use std::path::PathBuf;

/// Extension of Go source files.
pub const SOURCE_EXTENSION: &str = ".go";

/// Suffix of Go test files.
pub const TEST_SUFFIX: &str = "_test.go";

/// Shown when toggling without an active editor.
pub const TOGGLE_NO_EDITOR_MESSAGE: &str = "Cannot toggle test file. No editor selected.";

/// Shown when toggling from a document that is not a Go file.
pub const TOGGLE_WRONG_FILE_TYPE_MESSAGE: &str =
    "Cannot toggle test file. File in the editor is not a Go file.";

/// What a toggle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The counterpart was opened.
    Opened(PathBuf),
    /// Nothing to toggle; the user was told why.
    Skipped,
}

/// Returns the counterpart of a Go file path, or `None` for other files.
///
/// ```
/// use gounit_ide::toggle::counterpart_path;
///
/// assert_eq!(counterpart_path("/src/calc.go").as_deref(), Some("/src/calc_test.go"));
/// assert_eq!(counterpart_path("/src/calc_test.go").as_deref(), Some("/src/calc.go"));
/// assert_eq!(counterpart_path("/src/README.md"), None);
/// ```
#[must_use]
pub fn counterpart_path(path: &str) -> Option<String> {
    if let Some(stem) = path.strip_suffix(TEST_SUFFIX) {
        return Some(format!("{stem}{SOURCE_EXTENSION}"));
    }
    path.strip_suffix(SOURCE_EXTENSION)
        .map(|stem| format!("{stem}{TEST_SUFFIX}"))
}

/// Opens the counterpart of the active document.
///
/// A pane already showing the counterpart is reused in place; otherwise the
/// file opens in a new pane.
///
/// # Errors
///
/// Returns an error only if the host fails to open the file. Missing or
/// non-Go documents are reported to the user and yield
/// [`ToggleOutcome::Skipped`].
pub fn toggle_test_file<E: Editor + ?Sized>(editor: &mut E) -> Result<ToggleOutcome> {
    let Some(document) = editor.active_document() else {
        editor.show_information_message(TOGGLE_NO_EDITOR_MESSAGE);
        return Ok(ToggleOutcome::Skipped);
    };

    let current = document.path.to_string_lossy();
    let Some(target) = counterpart_path(&current) else {
        editor.show_information_message(TOGGLE_WRONG_FILE_TYPE_MESSAGE);
        return Ok(ToggleOutcome::Skipped);
    };
    let target = PathBuf::from(target);

    let column = editor
        .visible_editors()
        .into_iter()
        .find(|visible| visible.path == target)
        .map(|visible| visible.column);

    tracing::debug!(
        "Toggling {} -> {} (column {:?})",
        document.path.display(),
        target.display(),
        column
    );
    editor.open(&target, column)?;

    Ok(ToggleOutcome::Opened(target))
}
