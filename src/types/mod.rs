//! Core type definitions for gounit-ide.
//!
//! - [`config`] - Settings consumed per document and bridge defaults
//! - [`request`] - The resolved target of one generation
//!
//! # Re-exports
//!
//! ```
//! use gounit_ide::types::{GenerationRequest, GounitSettings};
//! ```

pub mod config;
pub mod request;

pub use config::{GounitSettings, SettingsError};
pub use request::GenerationRequest;
