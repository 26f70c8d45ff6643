//! Resolves the generation target from editor state.
//!
//! Failed preconditions are reported to the user and turned into `None`;
//! callers treat that as a no-op.

use crate::editor::{ActiveDocument, Editor};
use crate::error::{GenError, GenResult};
use crate::toggle::SOURCE_EXTENSION;
use crate::types::GenerationRequest;

/// Shown when no editor is active.
pub const NO_EDITOR_MESSAGE: &str = "Cannot generate unit tests. No editor selected.";

/// Shown when the active document is not a Go file.
pub const WRONG_FILE_TYPE_MESSAGE: &str =
    "Cannot generate unit tests. File in the editor is not a Go file.";

/// Shown when the active document has unsaved changes.
pub const UNSAVED_CHANGES_MESSAGE: &str = "File has unsaved changes. Save and try again.";

/// Returns the active document if it can be handed to the generator.
///
/// # Errors
///
/// Returns [`GenError::NoEditor`], [`GenError::WrongFileType`] or
/// [`GenError::UnsavedChanges`], checked in that order.
pub fn check_active_document<E: Editor + ?Sized>(editor: &E) -> GenResult<ActiveDocument> {
    let document = editor.active_document().ok_or(GenError::NoEditor)?;
    let path = document.path.to_string_lossy();

    if !path.ends_with(SOURCE_EXTENSION) {
        return Err(GenError::wrong_file_type(path));
    }
    if document.is_dirty {
        return Err(GenError::unsaved_changes(path));
    }

    Ok(document)
}

/// Returns the notification text for a precondition error.
#[must_use]
pub fn precondition_message(err: &GenError) -> Option<&'static str> {
    match err {
        GenError::NoEditor => Some(NO_EDITOR_MESSAGE),
        GenError::WrongFileType { .. } => Some(WRONG_FILE_TYPE_MESSAGE),
        GenError::UnsavedChanges { .. } => Some(UNSAVED_CHANGES_MESSAGE),
        _ => None,
    }
}

/// Resolves a request covering the whole active file.
pub fn resolve_whole_file<E: Editor + ?Sized>(editor: &mut E) -> Option<GenerationRequest> {
    let document = checked(editor)?;
    Some(GenerationRequest::whole_file(document.path))
}

/// Resolves a request for the function declared on the cursor line.
pub fn resolve_function<E: Editor + ?Sized>(editor: &mut E) -> Option<GenerationRequest> {
    let document = checked(editor)?;
    let name = function_name_from_line(&document.line_text);
    let line = document.cursor_line.saturating_add(1);
    Some(GenerationRequest::function(document.path, line, name))
}

/// Derives a display name from a function signature line.
///
/// ```
/// use gounit_ide::generate::resolver::function_name_from_line;
///
/// assert_eq!(function_name_from_line("func Foo(a int) error {  "), "func Foo(a int) error");
/// ```
#[must_use]
pub fn function_name_from_line(text: &str) -> String {
    let trimmed = text.trim();
    trimmed
        .strip_suffix('{')
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

fn checked<E: Editor + ?Sized>(editor: &mut E) -> Option<ActiveDocument> {
    match check_active_document(editor) {
        Ok(document) => Some(document),
        Err(err) => {
            tracing::debug!("Generation skipped: {}", err);
            if let Some(message) = precondition_message(&err) {
                editor.show_information_message(message);
            }
            None
        }
    }
}
