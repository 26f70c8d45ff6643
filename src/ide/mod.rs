//! IDE bridge - lets an editor extension drive gounit-ide over TCP
//!
//! The extension registers the commands returned by `list_commands`, and on
//! each invocation sends the command id together with an
//! [`EditorSnapshot`](crate::editor::EditorSnapshot). The bridge runs the
//! command and replies with the editor actions to replay and the lines to
//! append to the output channel.

pub mod controller;
pub mod handlers;
pub mod protocol;

pub use controller::IdeController;
pub use handlers::CommandContext;
pub use protocol::{CommandInfo, CommandStatus, IdeRequest, IdeResponse};
