//! gounit-ide - editor bridge for the `gounit` test generator
//!
//! Resolves the Go file or function under the cursor, runs `gounit gen` on
//! it, reports the result, and toggles the editor between a source file and
//! its `_test.go` counterpart.
//!
//! This library exposes the orchestration for the binary and for testing.

pub mod commands;
pub mod editor;
pub mod error;
pub mod generate;
pub mod ide;
pub mod output;
pub mod runner;
pub mod toggle;
pub mod types;

// Re-export core types for convenient access
pub use error::{GenError, GenResult};
pub use generate::{GenerationOutcome, Orchestrator};
pub use types::{GenerationRequest, GounitSettings};
