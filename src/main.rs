//! gounit-ide - editor bridge for the gounit test generator

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gounit_ide::editor::TerminalEditor;
use gounit_ide::generate::{GenerationOutcome, Orchestrator};
use gounit_ide::ide::IdeController;
use gounit_ide::output::TracingOutput;
use gounit_ide::runner::ProcessRunner;
use gounit_ide::toggle::ToggleOutcome;
use gounit_ide::types::config::DEFAULT_BRIDGE_PORT;
use gounit_ide::GenError;

#[derive(Parser, Debug)]
#[command(name = "gounit-ide")]
#[command(about = "Editor bridge for the gounit Go test generator")]
#[command(version)]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the IDE bridge for editor extensions.
    Serve {
        /// Port to listen on (127.0.0.1 only)
        #[arg(short, long, env = "GOUNIT_IDE_PORT", default_value_t = DEFAULT_BRIDGE_PORT)]
        port: u16,

        /// Directory gounit runs in
        #[arg(short = 'C', long)]
        directory: Option<PathBuf>,
    },

    /// Generate tests for a Go file, or for the function declared on a line.
    Gen {
        /// Go source file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// 1-based line of the function signature
        #[arg(short, long)]
        line: Option<u32>,
    },

    /// Print the test file paired with a Go file, or the source paired with a test.
    Toggle {
        /// Go source or test file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match args.command {
        Command::Serve { port, directory } => serve(port, directory).await,
        Command::Gen { file, line } => generate(file, line).await,
        Command::Toggle { file } => toggle(file),
    }
}

async fn serve(port: u16, directory: Option<PathBuf>) -> Result<()> {
    let runner = match directory {
        Some(dir) => {
            let dir = std::fs::canonicalize(&dir)
                .with_context(|| format!("Cannot use {} as working directory", dir.display()))?;
            if !dir.is_dir() {
                bail!("{} is not a directory", dir.display());
            }
            ProcessRunner::new().with_working_dir(dir)
        }
        None => ProcessRunner::new(),
    };
    IdeController::new(port, runner).run().await
}

async fn generate(file: PathBuf, line: Option<u32>) -> Result<()> {
    let mut editor = TerminalEditor::for_file(&file, line)?;
    let orchestrator = Orchestrator::new(ProcessRunner::new(), Arc::new(TracingOutput));

    let outcome = match line {
        Some(_) => orchestrator.generate_current_function(&mut editor).await?,
        None => orchestrator.generate_current_file(&mut editor).await?,
    };

    match outcome {
        GenerationOutcome::Generated { .. } => Ok(()),
        GenerationOutcome::ToolMissing { tool } => Err(GenError::tool_missing(tool).into()),
        GenerationOutcome::Skipped => bail!("No tests generated for {}", file.display()),
    }
}

fn toggle(file: PathBuf) -> Result<()> {
    let mut editor = TerminalEditor::for_file(&file, None)?;
    let orchestrator = Orchestrator::new(ProcessRunner::new(), Arc::new(TracingOutput));

    match orchestrator.toggle(&mut editor)? {
        ToggleOutcome::Opened(_) => Ok(()),
        ToggleOutcome::Skipped => bail!("{} has no counterpart", file.display()),
    }
}
