//! Tests for generation target resolution

use gounit_ide::editor::{ActiveDocument, EditorSnapshot, SnapshotEditor};
use gounit_ide::generate::args::{build_args, display_command};
use gounit_ide::generate::confirmation_message;
use gounit_ide::generate::resolver::{resolve_function, resolve_whole_file};
use gounit_ide::types::{GenerationRequest, GounitSettings};
use pretty_assertions::assert_eq;

fn editor_on(document: ActiveDocument) -> SnapshotEditor {
    SnapshotEditor::new(EditorSnapshot {
        active: Some(document),
        ..EditorSnapshot::default()
    })
}

#[test]
fn test_method_receiver_is_kept_in_name() {
    let mut editor = editor_on(
        ActiveDocument::saved("/srv/api/handler.go")
            .with_cursor(9, "\tfunc (h *Handler) ServeHTTP(w http.ResponseWriter, r *http.Request) {"),
    );

    let request = resolve_function(&mut editor).unwrap();

    assert_eq!(request.function_line, Some(10));
    assert_eq!(
        confirmation_message(&request),
        "Test for func (h *Handler) ServeHTTP(w http.ResponseWriter, r *http.Request) generated"
    );
    assert!(editor.messages().is_empty());
}

#[test]
fn test_blank_cursor_line_still_generates() {
    let mut editor = editor_on(ActiveDocument::saved("/a/b.go").with_cursor(0, "   "));

    let request = resolve_function(&mut editor).unwrap();

    assert_eq!(request.function_line, Some(1));
    assert_eq!(confirmation_message(&request), "Test for  generated");
}

#[test]
fn test_whole_file_ignores_cursor() {
    let mut editor = editor_on(ActiveDocument::saved("/a/b.go").with_cursor(12, "func X() {"));

    let request = resolve_whole_file(&mut editor).unwrap();

    assert_eq!(request, GenerationRequest::whole_file("/a/b.go"));
    assert_eq!(confirmation_message(&request), "Test for b.go generated");
}

#[test]
fn test_command_line_for_function_with_flags() {
    let request = GenerationRequest::function("/a/b.go", 7, "func X()");
    let settings = GounitSettings {
        tool: "/opt/bin/gounit".to_string(),
        flags: vec!["-t".to_string(), "testify".to_string()],
    };

    let args = build_args(&request, &settings);

    assert_eq!(
        display_command(&settings.tool, &args),
        "/opt/bin/gounit gen -i /a/b.go -t testify -l 7"
    );
}
