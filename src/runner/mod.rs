//! Subprocess execution for the generator.
//!
//! The orchestrator runs `gounit` through the [`ToolRunner`] trait so that
//! tests can substitute canned outcomes. [`ProcessRunner`] is the real
//! implementation on top of `tokio::process`.
//!
//! # Examples
//!
//! ```no_run
//! use gounit_ide::runner::{ProcessRunner, ToolRunner};
//!
//! # async fn example() -> std::io::Result<()> {
//! let runner = ProcessRunner::new();
//! let args = vec!["gen".to_string(), "-i".to_string(), "/src/calc.go".to_string()];
//! let output = runner.run("gounit", &args).await?;
//! assert!(output.success());
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;

/// Output from a completed process.
///
/// # Examples
///
/// ```
/// use gounit_ide::runner::ToolOutput;
///
/// let output = ToolOutput {
///     exit_code: 0,
///     stdout: "Generated calc_test.go\n".to_string(),
///     stderr: String::new(),
/// };
/// assert!(output.success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// The exit code of the process, or -1 if it was killed by a signal.
    pub exit_code: i32,
    /// Standard output captured from the process.
    pub stdout: String,
    /// Standard error captured from the process.
    pub stderr: String,
}

impl ToolOutput {
    /// Returns `true` if the process exited with code 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an external program to completion.
pub trait ToolRunner: Send + Sync {
    /// Runs `program` with `args`, waiting for it to exit.
    ///
    /// No timeout is applied.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the process cannot be started or its output
    /// cannot be collected. A missing executable surfaces as
    /// [`io::ErrorKind::NotFound`].
    fn run(
        &self,
        program: &str,
        args: &[String],
    ) -> impl Future<Output = io::Result<ToolOutput>> + Send;
}

impl<R: ToolRunner> ToolRunner for Arc<R> {
    fn run(
        &self,
        program: &str,
        args: &[String],
    ) -> impl Future<Output = io::Result<ToolOutput>> + Send {
        (**self).run(program, args)
    }
}

/// Returns `true` if `err` means the executable does not exist.
#[must_use]
pub fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// [`ToolRunner`] that spawns real processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Creates a runner that inherits the current working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs processes in `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl ToolRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<ToolOutput> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            // spawn reports a missing cwd as NotFound, indistinguishable from
            // a missing executable
            if !dir.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("working directory {} is not a directory", dir.display()),
                ));
            }
            command.current_dir(dir);
        }

        let output = command.spawn()?.wait_with_output().await?;

        Ok(ToolOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
