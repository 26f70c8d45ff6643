//! Test generation orchestrator.
//!
//! Ties the pieces of one generation together:
//!
//! 1. [`resolver`] turns editor state into a [`GenerationRequest`]
//! 2. [`args`] builds the `gounit gen` command line
//! 3. the [`ToolRunner`] runs it and waits for it to exit
//! 4. on success the user is told, and the editor toggles to the test file
//!
//! Each call is independent. Nothing is queued or de-duplicated, so two
//! generations started together simply race.

pub mod args;
pub mod resolver;

use crate::editor::Editor;
use crate::error::{GenError, GenResult};
use crate::output::OutputSink;
use crate::runner::{is_not_found, ToolOutput, ToolRunner};
use crate::toggle::{toggle_test_file, ToggleOutcome};
use crate::types::GenerationRequest;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use args::{build_args, display_command};

/// Shown when the generator executable is not installed.
pub const INSTALL_HINT: &str =
    "gounit is missing. install gounit: go get -u github.com/hexdigest/gounit/cmd/gounit";

/// Prefix of the message shown when generation fails.
pub const GENERATION_FAILED_PREFIX: &str = "Cannot generate test: ";

/// How a generation command ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A precondition failed; the user was told which.
    Skipped,
    /// The generator is not installed; the user got an install hint.
    ToolMissing {
        /// Executable that was looked up.
        tool: String,
    },
    /// Tests were generated and the editor toggled to them.
    Generated {
        /// Confirmation shown to the user.
        message: String,
        /// Standard output of the generator.
        stdout: String,
    },
}

impl GenerationOutcome {
    /// Returns `true` if tests were generated.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

/// Returns the confirmation message for a finished request.
///
/// ```
/// use gounit_ide::generate::confirmation_message;
/// use gounit_ide::types::GenerationRequest;
///
/// let request = GenerationRequest::function("/a/b.go", 3, "Foo");
/// assert_eq!(confirmation_message(&request), "Test for Foo generated");
/// ```
#[must_use]
pub fn confirmation_message(request: &GenerationRequest) -> String {
    format!("Test for {} generated", request.display_target())
}

/// Drives `gounit` on behalf of an editor.
pub struct Orchestrator<R> {
    runner: R,
    output: Arc<dyn OutputSink>,
}

impl<R: ToolRunner> Orchestrator<R> {
    /// Creates an orchestrator that runs tools with `runner` and logs to `output`.
    pub fn new(runner: R, output: Arc<dyn OutputSink>) -> Self {
        Self { runner, output }
    }

    /// Returns the tool runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Generates tests for every function in the active file.
    ///
    /// # Errors
    ///
    /// See [`Orchestrator::generate`].
    pub async fn generate_current_file<E: Editor + Send>(
        &self,
        editor: &mut E,
    ) -> GenResult<GenerationOutcome> {
        match resolver::resolve_whole_file(editor) {
            Some(request) => self.generate(editor, &request).await,
            None => Ok(GenerationOutcome::Skipped),
        }
    }

    /// Generates a test for the function under the cursor.
    ///
    /// # Errors
    ///
    /// See [`Orchestrator::generate`].
    pub async fn generate_current_function<E: Editor + Send>(
        &self,
        editor: &mut E,
    ) -> GenResult<GenerationOutcome> {
        match resolver::resolve_function(editor) {
            Some(request) => self.generate(editor, &request).await,
            None => Ok(GenerationOutcome::Skipped),
        }
    }

    /// Toggles between the active file and its counterpart.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Host`] if the editor fails to open the file.
    pub fn toggle<E: Editor + ?Sized>(&self, editor: &mut E) -> GenResult<ToggleOutcome> {
        toggle_test_file(editor).map_err(|err| GenError::host(format!("{:#}", err)))
    }

    /// Runs the generator for `request` and handles the result.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::ToolExecution`] if the generator fails or cannot be
    /// started, [`GenError::Host`] if toggling to the test file fails, and
    /// [`GenError::Other`] if the settings for the file cannot be loaded. In
    /// every case the user has already been shown a message.
    pub async fn generate<E: Editor + Send>(
        &self,
        editor: &mut E,
        request: &GenerationRequest,
    ) -> GenResult<GenerationOutcome> {
        let settings = match editor.settings_for(&request.file_path) {
            Ok(settings) => settings,
            Err(err) => {
                let err = GenError::from(err);
                self.report_failure(editor, &err);
                return Err(err);
            }
        };

        let args = build_args(request, &settings);
        let command_line = display_command(&settings.tool, &args);
        info!("Running {}", command_line);

        let result = self.runner.run(&settings.tool, &args).await;
        self.output
            .append_line(&format!("Generating Tests: {}", command_line));

        match result {
            Err(err) if is_not_found(&err) => {
                warn!("{} not found on PATH", settings.tool);
                editor.show_information_message(INSTALL_HINT);
                Ok(GenerationOutcome::ToolMissing {
                    tool: settings.tool,
                })
            }
            Err(err) => {
                error!("Failed to run {}: {}", command_line, err);
                self.output.append_line(&err.to_string());
                editor.show_information_message(&format!(
                    "{}{}",
                    GENERATION_FAILED_PREFIX, err
                ));
                Err(GenError::tool_execution(command_line, None, err.to_string()))
            }
            Ok(output) if !output.success() => {
                error!(
                    "{} exited with code {}: {}",
                    command_line,
                    output.exit_code,
                    output.stderr.trim_end()
                );
                self.output.append_line(&format!(
                    "Command failed: {} (exit code {})",
                    command_line, output.exit_code
                ));
                self.output.append_line(output.stderr.trim_end());
                editor.show_information_message(&format!(
                    "{}{}",
                    GENERATION_FAILED_PREFIX, output.stderr
                ));
                Err(GenError::tool_execution(
                    command_line,
                    Some(output.exit_code),
                    output.stderr,
                ))
            }
            Ok(output) => self.finish(editor, request, output),
        }
    }

    fn finish<E: Editor + ?Sized>(
        &self,
        editor: &mut E,
        request: &GenerationRequest,
        output: ToolOutput,
    ) -> GenResult<GenerationOutcome> {
        if !output.stdout.trim().is_empty() {
            debug!("gounit: {}", output.stdout.trim_end());
        }

        let message = confirmation_message(request);
        editor.show_information_message(&message);
        self.output.append_line(&message);

        if let Err(err) = self.toggle(editor) {
            self.report_failure(editor, &err);
            return Err(err);
        }

        Ok(GenerationOutcome::Generated {
            message,
            stdout: output.stdout,
        })
    }

    fn report_failure<E: Editor + ?Sized>(&self, editor: &mut E, err: &GenError) {
        error!("{}", err);
        let text = err.to_string();
        editor.show_information_message(&text);
        self.output.append_line(&text);
    }
}
