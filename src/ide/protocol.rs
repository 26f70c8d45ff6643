//! IDE message protocol for editor extensions
//!
//! Messages are newline-delimited JSON objects exchanged over TCP. Each
//! message has a `type` field that determines its variant.
//!
//! # Examples
//!
//! ```ignore
//! // Run a command with the editor state it applies to
//! {"type": "execute_command", "command": "gounit.gen.file",
//!  "editor": {"active": {"path": "/src/calc.go"}, "visible": []}}
//!
//! // What the extension should do next
//! {"type": "command_result", "command": "gounit.gen.file", "outcome": "generated",
//!  "actions": [{"type": "show_information_message", "message": "Test for calc.go generated"},
//!              {"type": "open", "path": "/src/calc_test.go"}],
//!  "output": ["Generating Tests: gounit gen -i /src/calc.go", "Test for calc.go generated"]}
//! ```

use crate::commands::CommandId;
use crate::editor::{EditorAction, EditorSnapshot};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Messages sent FROM the IDE to the bridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IdeRequest {
    /// Health check / keep-alive
    Ping,

    /// Initialize session with workspace info
    Init {
        /// Workspace root directory
        workspace: PathBuf,
        /// Supported capabilities
        #[serde(default)]
        capabilities: Vec<String>,
    },

    /// Ask which commands the extension should register
    ListCommands,

    /// Run a registered command
    ExecuteCommand {
        /// Command id, e.g. `gounit.gen.file`
        command: String,
        /// Editor state at invocation time
        #[serde(default)]
        editor: EditorSnapshot,
        /// Optional id echoed back in the result
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
}

/// A command the extension should register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    /// Command id
    pub id: String,
    /// Title for the command palette
    pub title: String,
}

impl From<CommandId> for CommandInfo {
    fn from(command: CommandId) -> Self {
        Self {
            id: command.as_str().to_string(),
            title: command.title().to_string(),
        }
    }
}

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    /// A precondition was not met
    Skipped,
    /// The generator is not installed
    ToolMissing,
    /// Tests were generated
    Generated,
    /// The counterpart file was opened
    Toggled,
    /// The command failed
    Failed,
}

/// Messages sent FROM the bridge TO the IDE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IdeResponse {
    /// Response to Ping
    Pong {
        /// Bridge version
        version: String,
        /// Wire protocol version
        protocol: String,
    },

    /// Session initialized successfully
    InitAck {
        /// Assigned session ID
        session_id: String,
        /// Bridge version
        version: String,
        /// Wire protocol version
        protocol: String,
        /// Server capabilities
        capabilities: Vec<String>,
    },

    /// Registered commands
    Commands {
        /// Commands in registration order
        commands: Vec<CommandInfo>,
    },

    /// Result of an executed command
    CommandResult {
        /// Command id that ran
        command: String,
        /// How it ended
        outcome: CommandStatus,
        /// Error description when `outcome` is `failed`
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        /// Editor actions to perform, in order
        actions: Vec<EditorAction>,
        /// Lines to append to the output channel
        output: Vec<String>,
        /// Request ID from the request, if any
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },

    /// Error response
    Error {
        /// Error code
        code: String,
        /// Human-readable message
        message: String,
        /// Optional request ID if error relates to specific request
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
}

/// Parse an IDE request from JSON bytes
///
/// # Errors
///
/// Returns an error if the JSON is malformed or missing required fields.
pub fn parse_request(data: &[u8]) -> Result<IdeRequest, serde_json::Error> {
    serde_json::from_slice(data)
}

/// Serialize an IDE response to JSON bytes
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for valid data).
pub fn serialize_response(response: &IdeResponse) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(response)
}

/// Protocol version for compatibility checks, sent in `pong` and `init_ack`
pub const PROTOCOL_VERSION: &str = "1.0";

/// Default server capabilities
pub fn default_capabilities() -> Vec<String> {
    vec!["commands".to_string(), "output".to_string()]
}
