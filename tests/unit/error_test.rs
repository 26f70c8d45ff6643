//! Tests for gounit-ide error types.
//!
//! These tests verify Display output, categories and conversions of
//! `GenError`.

use gounit_ide::error::{GenError, GenResult};
use gounit_ide::types::SettingsError;
use std::error::Error;
use std::path::PathBuf;

#[cfg(test)]
mod error_type_tests {
    use super::*;

    // ============== Construction Tests ==============

    #[test]
    fn test_wrong_file_type_display() {
        let err = GenError::wrong_file_type("/a/notes.md");
        assert!(err.to_string().contains("not a Go file"));
        assert!(err.to_string().contains("/a/notes.md"));
    }

    #[test]
    fn test_tool_execution_with_exit_code() {
        let err = GenError::tool_execution("gounit gen -i a.go", Some(2), "boom\n");
        assert_eq!(
            err.to_string(),
            "runner: command 'gounit gen -i a.go' exited with code 2: boom"
        );
        assert_eq!(err.stderr(), Some("boom\n"));
    }

    #[test]
    fn test_tool_execution_without_exit_code() {
        let err = GenError::tool_execution("gounit gen", None, "permission denied");
        assert!(err.to_string().contains("failed: permission denied"));
    }

    #[test]
    fn test_tool_missing_display() {
        let err = GenError::tool_missing("gounit");
        assert!(err.to_string().contains("'gounit' not found"));
    }

    // ============== Conversion Tests ==============

    #[test]
    fn test_from_anyhow_keeps_context_chain() {
        let err: GenError = anyhow::anyhow!("inner").context("outer").into();
        assert_eq!(err.to_string(), "error: outer: inner");
    }

    #[test]
    fn test_from_settings_error_keeps_source() {
        let settings_err = SettingsError::Io {
            path: PathBuf::from("/a/gounit.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let err = GenError::from(settings_err);
        assert!(err.to_string().contains("gounit.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_question_mark_conversion() {
        fn read() -> GenResult<String> {
            let content = std::fs::read_to_string("/definitely/not/here/gounit.toml")?;
            Ok(content)
        }
        assert!(matches!(read(), Err(GenError::Other { .. })));
    }
}
