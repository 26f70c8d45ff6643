//! Editor used by the one-shot CLI subcommands.
//!
//! The "active document" is the file named on the command line, always
//! saved since it is read straight from disk. Notifications go to stdout and
//! opening a file prints its path.

use super::{ActiveDocument, Editor, ViewColumn, VisibleEditor};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// [`Editor`] over a single on-disk file.
#[derive(Debug, Clone)]
pub struct TerminalEditor {
    document: ActiveDocument,
    opened: Vec<PathBuf>,
    quiet: bool,
}

impl TerminalEditor {
    /// Creates an editor with `path` active and the cursor on `line` (1-based).
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or `line` is past its end.
    pub fn for_file(path: &Path, line: Option<u32>) -> Result<Self> {
        let path = fs::canonicalize(path)
            .with_context(|| format!("Cannot open {}", path.display()))?;

        let mut document = ActiveDocument::saved(&path);
        if let Some(line) = line {
            if line == 0 {
                bail!("Line numbers start at 1");
            }
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            let text = content.lines().nth((line - 1) as usize).with_context(|| {
                format!("{} has no line {}", path.display(), line)
            })?;
            document = document.with_cursor(line - 1, text);
        }

        Ok(Self {
            document,
            opened: Vec::new(),
            quiet: false,
        })
    }

    /// Suppresses printing; actions are still recorded.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Returns the files opened so far.
    #[must_use]
    pub fn opened(&self) -> &[PathBuf] {
        &self.opened
    }
}

impl Editor for TerminalEditor {
    fn active_document(&self) -> Option<ActiveDocument> {
        Some(self.document.clone())
    }

    fn visible_editors(&self) -> Vec<VisibleEditor> {
        Vec::new()
    }

    fn open(&mut self, path: &Path, _column: Option<ViewColumn>) -> Result<()> {
        if !self.quiet {
            println!("{}", path.display());
        }
        self.opened.push(path.to_path_buf());
        Ok(())
    }

    fn show_information_message(&mut self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }
}
