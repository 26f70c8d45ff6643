//! Configuration types for gounit-ide.
//!
//! Settings are scoped per document: the nearest `gounit.toml` found by
//! walking up from the document's directory wins, then the file in the user
//! config directory, then the built-in defaults.
//!
//! # Example Settings File
//!
//! ```toml
//! [gounit]
//! flags = ["-t", "minimock"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-project settings file.
pub const SETTINGS_FILE_NAME: &str = "gounit.toml";

/// Default executable invoked for generation.
pub const DEFAULT_TOOL: &str = "gounit";

/// Default TCP port for the IDE bridge.
pub const DEFAULT_BRIDGE_PORT: u16 = 7733;

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// IO error when reading a settings file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The settings file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse {path}: {source}")]
    Toml {
        /// The settings file being parsed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for the `gounit` integration.
///
/// # Examples
///
/// ```
/// use gounit_ide::types::GounitSettings;
///
/// let settings = GounitSettings::from_toml_str("[gounit]\nflags = [\"-v\"]\n").unwrap();
/// assert_eq!(settings.flags, vec!["-v"]);
/// assert_eq!(settings.tool, "gounit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GounitSettings {
    /// Executable to run.
    pub tool: String,

    /// Extra flags appended verbatim after the input file argument.
    pub flags: Vec<String>,
}

impl Default for GounitSettings {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            flags: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    gounit: GounitSettings,
}

impl GounitSettings {
    /// Parses settings from the contents of a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or the `[gounit]`
    /// table has the wrong shape.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: SettingsFile = toml::from_str(content)?;
        Ok(file.gounit)
    }

    /// Loads settings from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| SettingsError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Finds the settings that apply to `document`.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file is found but cannot be loaded.
    pub fn discover(document: &Path) -> Result<Self, SettingsError> {
        match Self::locate(document) {
            Some(path) => {
                tracing::debug!("Using settings from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Returns the settings file that applies to `document`, if any.
    #[must_use]
    pub fn locate(document: &Path) -> Option<PathBuf> {
        let project = document
            .parent()
            .into_iter()
            .flat_map(Path::ancestors)
            .map(|dir| dir.join(SETTINGS_FILE_NAME))
            .find(|candidate| candidate.is_file());

        project.or_else(|| Self::user_config_path().filter(|path| path.is_file()))
    }

    /// Returns the user-level settings path.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "gounit", "gounit-ide")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }
}
