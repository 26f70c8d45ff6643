//! IDE server controller for managing connections and message routing
//!
//! This module provides the `IdeController` which manages the lifecycle of
//! the IDE bridge server, accepting connections and routing each request to
//! the handlers.
//!
//! Every connection runs on its own task. Requests on one connection are
//! answered in order; requests on different connections run concurrently
//! with no coordination between them.

use super::handlers::{route_request, CommandContext};
use super::protocol::{parse_request, serialize_response, IdeResponse};
use crate::runner::ToolRunner;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Controller for the IDE bridge server
pub struct IdeController<R> {
    /// Port to listen on
    port: u16,
    /// Context shared by all connections
    ctx: CommandContext<R>,
}

impl<R: ToolRunner + 'static> IdeController<R> {
    /// Creates a new IDE controller for the specified port
    #[must_use]
    pub fn new(port: u16, runner: R) -> Self {
        Self {
            port,
            ctx: CommandContext {
                runner: Arc::new(runner),
            },
        }
    }

    /// Returns the port the controller binds in [`IdeController::run`]
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Binds to the configured port and serves connections
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified port.
    pub async fn run(&self) -> Result<()> {
        let addr = format!("127.0.0.1:{}", self.port);
        let listener = TcpListener::bind(&addr).await?;
        info!("IDE bridge listening on {}", addr);
        self.serve(listener).await
    }

    /// Serves connections from an already bound listener
    ///
    /// This function runs indefinitely, spawning a new task for each connection.
    ///
    /// # Errors
    ///
    /// Never returns an error in practice; accept failures are logged and
    /// the loop continues.
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        loop {
            match listener.accept().await {
                Ok((stream, addr)) => {
                    let session_id = Uuid::new_v4().to_string();
                    info!("IDE connection from {} (session {})", addr, session_id);

                    let ctx = self.ctx.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, ctx, session_id.clone()).await {
                            warn!("IDE connection {} error: {}", session_id, e);
                        }
                        debug!("IDE connection {} closed", session_id);
                    });
                }
                Err(e) => {
                    error!("Failed to accept IDE connection: {}", e);
                }
            }
        }
    }
}

/// Handles a single IDE connection
///
/// Reads newline-delimited JSON requests and writes one JSON response line
/// per request.
async fn handle_connection<R: ToolRunner>(
    stream: TcpStream,
    ctx: CommandContext<R>,
    session_id: String,
) -> Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match parse_request(line.as_bytes()) {
            Ok(request) => {
                debug!("IDE request: {:?}", request);
                route_request(request, &ctx, &session_id).await
            }
            Err(e) => {
                warn!("Failed to parse IDE request: {}", e);
                IdeResponse::Error {
                    code: "PARSE_ERROR".to_string(),
                    message: format!("Failed to parse request: {}", e),
                    request_id: None,
                }
            }
        };

        let response_bytes = serialize_response(&response)?;
        writer.write_all(&response_bytes).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
