//! End-to-end generation against stand-in `gounit` executables.

#![cfg(unix)]

use crate::common::TestContext;
use gounit_ide::editor::{ActiveDocument, EditorAction, EditorSnapshot, SnapshotEditor};
use gounit_ide::generate::{
    GenerationOutcome, Orchestrator, GENERATION_FAILED_PREFIX, INSTALL_HINT,
};
use gounit_ide::output::MemoryOutput;
use gounit_ide::runner::ProcessRunner;
use gounit_ide::types::GounitSettings;
use gounit_ide::GenError;
use pretty_assertions::assert_eq;
use std::path::Path;
use std::sync::Arc;

fn orchestrator() -> (Orchestrator<ProcessRunner>, MemoryOutput) {
    let output = MemoryOutput::new();
    let orchestrator = Orchestrator::new(ProcessRunner::new(), Arc::new(output.clone()));
    (orchestrator, output)
}

fn editor_for(document: ActiveDocument, tool: &Path, flags: &[&str]) -> SnapshotEditor {
    SnapshotEditor::new(EditorSnapshot {
        active: Some(document),
        visible: vec![],
        settings: Some(GounitSettings {
            tool: tool.display().to_string(),
            flags: flags.iter().map(|f| f.to_string()).collect(),
        }),
    })
}

#[tokio::test]
async fn test_generate_file_runs_tool_and_toggles() {
    let ctx = TestContext::new();
    let source = ctx.create_go_source();
    let tool = ctx.create_recording_gounit();
    let (orchestrator, output) = orchestrator();
    let mut editor = editor_for(ActiveDocument::saved(&source), &tool, &["-v"]);

    let outcome = orchestrator.generate_current_file(&mut editor).await.unwrap();

    match outcome {
        GenerationOutcome::Generated { message, stdout } => {
            assert_eq!(message, "Test for calc.go generated");
            assert_eq!(stdout, "Generated tests\n");
        }
        other => panic!("Expected Generated, got {:?}", other),
    }
    assert_eq!(
        ctx.recorded_args(),
        vec![
            "gen".to_string(),
            "-i".to_string(),
            source.display().to_string(),
            "-v".to_string(),
        ]
    );
    assert_eq!(
        editor.actions().last(),
        Some(&EditorAction::Open {
            path: source.with_file_name("calc_test.go"),
            column: None,
        })
    );
    assert!(output.lines()[0].starts_with("Generating Tests: "));
}

#[tokio::test]
async fn test_generate_function_passes_line_flag() {
    let ctx = TestContext::new();
    let source = ctx.create_go_source();
    let tool = ctx.create_recording_gounit();
    let (orchestrator, _output) = orchestrator();
    let document = ActiveDocument::saved(&source).with_cursor(2, "func Add(a, b int) int {");
    let mut editor = editor_for(document, &tool, &[]);

    let outcome = orchestrator
        .generate_current_function(&mut editor)
        .await
        .unwrap();

    assert!(outcome.is_generated());
    assert_eq!(
        ctx.recorded_args(),
        vec![
            "gen".to_string(),
            "-i".to_string(),
            source.display().to_string(),
            "-l".to_string(),
            "3".to_string(),
        ]
    );
    assert_eq!(editor.messages()[0], "Test for func Add(a, b int) int generated");
}

#[tokio::test]
async fn test_failing_tool_surfaces_stderr() {
    let ctx = TestContext::new();
    let source = ctx.create_go_source();
    let tool = ctx.create_script("bin/gounit", "echo 'calc.go:3: syntax error' >&2\nexit 1");
    let (orchestrator, output) = orchestrator();
    let mut editor = editor_for(ActiveDocument::saved(&source), &tool, &[]);

    let err = orchestrator
        .generate_current_file(&mut editor)
        .await
        .unwrap_err();

    match &err {
        GenError::ToolExecution {
            exit_code, stderr, ..
        } => {
            assert_eq!(*exit_code, Some(1));
            assert!(stderr.contains("syntax error"));
        }
        other => panic!("Expected ToolExecution, got {:?}", other),
    }
    assert!(editor.messages()[0].contains("syntax error"));
    assert!(output.contents().contains("syntax error"));
}

#[tokio::test]
async fn test_missing_tool_resolves_without_error() {
    let ctx = TestContext::new();
    let source = ctx.create_go_source();
    let missing = ctx.path().join("bin/gounit");
    let (orchestrator, _output) = orchestrator();
    let mut editor = editor_for(ActiveDocument::saved(&source), &missing, &[]);

    let outcome = orchestrator.generate_current_file(&mut editor).await.unwrap();

    assert_eq!(
        outcome,
        GenerationOutcome::ToolMissing {
            tool: missing.display().to_string()
        }
    );
    assert_eq!(editor.messages(), vec![INSTALL_HINT]);
}

#[tokio::test]
async fn test_missing_tool_reports_configured_name() {
    let ctx = TestContext::new();
    let source = ctx.create_go_source();
    ctx.create_file(
        "gounit.toml",
        "[gounit]\ntool = \"gounit-ide-no-such-gounit\"\n",
    );
    let (orchestrator, _output) = orchestrator();
    let mut editor = SnapshotEditor::new(EditorSnapshot {
        active: Some(ActiveDocument::saved(&source)),
        ..EditorSnapshot::default()
    });

    let outcome = orchestrator.generate_current_file(&mut editor).await.unwrap();

    assert_eq!(
        outcome,
        GenerationOutcome::ToolMissing {
            tool: "gounit-ide-no-such-gounit".to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_working_dir_fails_instead_of_hinting_install() {
    let ctx = TestContext::new();
    let source = ctx.create_go_source();
    let tool = ctx.create_recording_gounit();
    let output = MemoryOutput::new();
    let runner = ProcessRunner::new().with_working_dir(ctx.path().join("no-such-dir"));
    let orchestrator = Orchestrator::new(runner, Arc::new(output.clone()));
    let mut editor = editor_for(ActiveDocument::saved(&source), &tool, &[]);

    let err = orchestrator
        .generate_current_file(&mut editor)
        .await
        .unwrap_err();

    assert!(matches!(err, GenError::ToolExecution { exit_code: None, .. }));
    assert!(editor.messages()[0].starts_with(GENERATION_FAILED_PREFIX));
    assert!(!editor.messages().contains(&INSTALL_HINT));
    assert!(ctx.recorded_args().is_empty());
}

#[tokio::test]
async fn test_settings_discovered_from_project_file() {
    let ctx = TestContext::new();
    let source = ctx.create_go_source();
    let tool = ctx.create_recording_gounit();
    ctx.create_file(
        "gounit.toml",
        &format!(
            "[gounit]\ntool = \"{}\"\nflags = [\"-t\", \"minimock\"]\n",
            tool.display()
        ),
    );
    let (orchestrator, _output) = orchestrator();
    let mut editor = SnapshotEditor::new(EditorSnapshot {
        active: Some(ActiveDocument::saved(&source)),
        ..EditorSnapshot::default()
    });

    let outcome = orchestrator.generate_current_file(&mut editor).await.unwrap();

    assert!(outcome.is_generated());
    assert_eq!(&ctx.recorded_args()[3..], &["-t".to_string(), "minimock".to_string()]);
}

#[tokio::test]
async fn test_concurrent_generations_are_independent() {
    let ctx = TestContext::new();
    let source = ctx.create_go_source();
    let tool = ctx.create_script("bin/gounit", "sleep 0.1\necho done");
    let (orchestrator, output) = orchestrator();
    let mut first = editor_for(ActiveDocument::saved(&source), &tool, &[]);
    let mut second = editor_for(ActiveDocument::saved(&source), &tool, &[]);

    let (a, b) = tokio::join!(
        orchestrator.generate_current_file(&mut first),
        orchestrator.generate_current_file(&mut second),
    );

    assert!(a.unwrap().is_generated());
    assert!(b.unwrap().is_generated());
    let attempts = output
        .lines()
        .iter()
        .filter(|line| line.starts_with("Generating Tests: "))
        .count();
    assert_eq!(attempts, 2);
}
