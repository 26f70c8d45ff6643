//! IDE command handlers for processing IDE requests
//!
//! This module provides handler functions for each [`IdeRequest`] variant.
//! Command execution builds a fresh orchestrator per request around a
//! [`SnapshotEditor`] and a [`MemoryOutput`], so everything the command did
//! can be sent back to the extension in one response.

use super::protocol::{CommandInfo, CommandStatus, IdeRequest, IdeResponse, PROTOCOL_VERSION};
use crate::commands::{self, CommandId, CommandOutcome};
use crate::editor::{EditorSnapshot, SnapshotEditor};
use crate::generate::{GenerationOutcome, Orchestrator};
use crate::output::MemoryOutput;
use crate::runner::ToolRunner;
use crate::toggle::ToggleOutcome;
use std::path::Path;
use std::sync::Arc;

/// Context required to execute commands
#[derive(Debug)]
pub struct CommandContext<R> {
    /// Runner shared by every connection
    pub runner: Arc<R>,
}

impl<R> Clone for CommandContext<R> {
    fn clone(&self) -> Self {
        Self {
            runner: Arc::clone(&self.runner),
        }
    }
}

/// Handle a ping request - responds with version info
#[must_use]
pub fn handle_ping() -> IdeResponse {
    IdeResponse::Pong {
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: PROTOCOL_VERSION.to_string(),
    }
}

/// Handle an init request - acknowledges a new IDE session
#[must_use]
pub fn handle_init(workspace: &Path, capabilities: &[String], session_id: &str) -> IdeResponse {
    tracing::info!(
        "IDE session initialized: workspace={:?}, capabilities={:?}",
        workspace,
        capabilities
    );

    IdeResponse::InitAck {
        session_id: session_id.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: PROTOCOL_VERSION.to_string(),
        capabilities: super::protocol::default_capabilities(),
    }
}

/// Handle a list_commands request - returns every registered command
#[must_use]
pub fn handle_list_commands() -> IdeResponse {
    IdeResponse::Commands {
        commands: CommandId::ALL.into_iter().map(CommandInfo::from).collect(),
    }
}

/// Handle an execute_command request
///
/// Unknown command ids produce an `UNKNOWN_COMMAND` error. Every other
/// outcome, including failures, is a [`IdeResponse::CommandResult`] carrying
/// the actions and output lines the command produced.
pub async fn handle_execute_command<R: ToolRunner>(
    ctx: &CommandContext<R>,
    command: &str,
    snapshot: EditorSnapshot,
    request_id: Option<String>,
) -> IdeResponse {
    let command_id = match command.parse::<CommandId>() {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("{}", e);
            return IdeResponse::Error {
                code: "UNKNOWN_COMMAND".to_string(),
                message: e.to_string(),
                request_id,
            };
        }
    };

    let output = MemoryOutput::new();
    let orchestrator = Orchestrator::new(Arc::clone(&ctx.runner), Arc::new(output.clone()));
    let mut editor = SnapshotEditor::new(snapshot);

    let result = commands::execute(&orchestrator, &mut editor, command_id).await;
    let (outcome, error) = match result {
        Ok(outcome) => (status_of(&outcome), None),
        Err(e) => {
            tracing::warn!("{} failed: {}", command_id, e);
            (CommandStatus::Failed, Some(e.to_string()))
        }
    };

    let output = output.lines();
    for line in &output {
        tracing::debug!(target: "gounit", "{}", line);
    }

    IdeResponse::CommandResult {
        command: command_id.as_str().to_string(),
        outcome,
        error,
        actions: editor.into_actions(),
        output,
        request_id,
    }
}

fn status_of(outcome: &CommandOutcome) -> CommandStatus {
    match outcome {
        CommandOutcome::Generation(GenerationOutcome::Skipped) => CommandStatus::Skipped,
        CommandOutcome::Generation(GenerationOutcome::ToolMissing { .. }) => CommandStatus::ToolMissing,
        CommandOutcome::Generation(GenerationOutcome::Generated { .. }) => {
            CommandStatus::Generated
        }
        CommandOutcome::Toggle(ToggleOutcome::Opened(_)) => CommandStatus::Toggled,
        CommandOutcome::Toggle(ToggleOutcome::Skipped) => CommandStatus::Skipped,
    }
}

/// Route an incoming request to the appropriate handler
pub async fn route_request<R: ToolRunner>(
    request: IdeRequest,
    ctx: &CommandContext<R>,
    session_id: &str,
) -> IdeResponse {
    match request {
        IdeRequest::Ping => handle_ping(),
        IdeRequest::Init {
            workspace,
            capabilities,
        } => handle_init(&workspace, &capabilities, session_id),
        IdeRequest::ListCommands => handle_list_commands(),
        IdeRequest::ExecuteCommand {
            command,
            editor,
            request_id,
        } => handle_execute_command(ctx, &command, editor, request_id).await,
    }
}
