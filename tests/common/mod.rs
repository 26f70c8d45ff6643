//! Common test utilities and fixtures for gounit-ide.
//!
//! This module provides shared test infrastructure including:
//! - A temporary Go project to generate into
//! - Stand-in `gounit` executables written as shell scripts

#![allow(dead_code)]

use std::path::PathBuf;

/// Test context providing common setup for integration tests.
pub struct TestContext {
    /// Temporary directory for test file operations.
    pub temp_dir: tempfile::TempDir,
}

impl TestContext {
    /// Creates a new test context with a temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Returns the path to the temporary directory.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Creates a file in the temporary directory with the given content.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be created or written.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        std::fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Creates a small Go package and returns the source file path.
    pub fn create_go_source(&self) -> PathBuf {
        self.create_file(
            "calc/calc.go",
            "package calc\n\nfunc Add(a, b int) int {\n\treturn a + b\n}\n",
        )
    }

    /// Creates an executable shell script in the temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the script cannot be written or made executable.
    #[cfg(unix)]
    pub fn create_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.create_file(name, &format!("#!/bin/sh\n{}\n", body));
        let mut permissions = std::fs::metadata(&path)
            .expect("failed to stat script")
            .permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(&path, permissions).expect("failed to chmod script");
        path
    }

    /// Creates a fake `gounit` that records its arguments to `args.log`,
    /// one per line, and prints a success line.
    #[cfg(unix)]
    pub fn create_recording_gounit(&self) -> PathBuf {
        let log = self.path().join("args.log");
        self.create_script(
            "bin/gounit",
            &format!(
                "for arg in \"$@\"; do echo \"$arg\" >> '{}'; done\necho \"Generated tests\"",
                log.display()
            ),
        )
    }

    /// Returns the arguments recorded by [`TestContext::create_recording_gounit`].
    pub fn recorded_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join("args.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
