//! Host commands - zero-argument actions the editor binds to ids.

use crate::editor::Editor;
use crate::error::{GenError, GenResult};
use crate::generate::{GenerationOutcome, Orchestrator};
use crate::runner::ToolRunner;
use crate::toggle::ToggleOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A command the editor can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandId {
    /// `gounit.gen.file`
    #[serde(rename = "gounit.gen.file")]
    GenerateFile,
    /// `gounit.gen.function`
    #[serde(rename = "gounit.gen.function")]
    GenerateFunction,
    /// `gounit.toggle`
    #[serde(rename = "gounit.toggle")]
    ToggleTestFile,
}

impl CommandId {
    /// Every command, in registration order.
    pub const ALL: [CommandId; 3] = [
        CommandId::GenerateFile,
        CommandId::GenerateFunction,
        CommandId::ToggleTestFile,
    ];

    /// Returns the id the editor registers.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::GenerateFile => "gounit.gen.file",
            CommandId::GenerateFunction => "gounit.gen.function",
            CommandId::ToggleTestFile => "gounit.toggle",
        }
    }

    /// Returns the title shown in the command palette.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            CommandId::GenerateFile => "GoUnit: Generate tests for file",
            CommandId::GenerateFunction => "GoUnit: Generate test for function",
            CommandId::ToggleTestFile => "GoUnit: Toggle test file",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| GenError::unknown_command(s))
    }
}

/// Result of a command that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A generation command finished.
    Generation(GenerationOutcome),
    /// The toggle command finished.
    Toggle(ToggleOutcome),
}

/// Runs `command` against `editor`.
///
/// # Errors
///
/// Propagates the orchestrator's error for failed generations and toggles.
pub async fn execute<R, E>(
    orchestrator: &Orchestrator<R>,
    editor: &mut E,
    command: CommandId,
) -> GenResult<CommandOutcome>
where
    R: ToolRunner,
    E: Editor + Send,
{
    tracing::debug!("Executing {}", command);
    match command {
        CommandId::GenerateFile => orchestrator
            .generate_current_file(editor)
            .await
            .map(CommandOutcome::Generation),
        CommandId::GenerateFunction => orchestrator
            .generate_current_function(editor)
            .await
            .map(CommandOutcome::Generation),
        CommandId::ToggleTestFile => orchestrator.toggle(editor).map(CommandOutcome::Toggle),
    }
}
