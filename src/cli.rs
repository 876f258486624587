//! Command-line driver for the AULA front-end.
//!
//! Reads one source buffer (a file, or stdin), runs [`crate::analyze`] on
//! it, and prints the tokens and/or tree as JSON on stdout. Failures are
//! rendered by [`DiagnosticPrinter`] on stderr.
//!
//! Command functions return `CliResult<T>`; only [`run`] exits.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};

use crate::diagnostics::DiagnosticPrinter;
use crate::{analyze, Analysis};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    /// The source is valid AULA and the requested output was produced.
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// The source was read but is not valid AULA.
    pub const INVALID: ExitCode = ExitCode(1);
    /// The source could not be read, or output could not be produced.
    pub const IO: ExitCode = ExitCode(2);
}

/// Error type for CLI operations: a message ready for display and the
/// exit code to leave with.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// What to print on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    Tokens,
    Tree,
    All,
}

/// Tokenize and parse an AULA program
#[derive(Parser, Debug)]
#[command(name = "aula")]
#[command(version)]
#[command(about = "Tokenize and parse an AULA program", long_about = None)]
pub struct Cli {
    /// Source file; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Which result to print
    #[arg(long, value_enum, default_value_t = Emit::All)]
    pub emit: Emit,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Only validate; print nothing on success
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Name used for the source in diagnostics.
    fn display_name(&self) -> String {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Parses arguments, runs the pipeline, and exits with its status.
pub fn run() {
    let cli = Cli::parse();

    let result = execute(&cli);

    match &result {
        Ok(output) if !output.is_empty() => println!("{}", output),
        Err(e) if !e.message.is_empty() => eprintln!("{}", e),
        _ => {}
    }

    process::exit(status(&result).0);
}

/// The exit code an invocation finishes with.
pub fn status<T>(result: &CliResult<T>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => e.exit_code,
    }
}

/// Runs one invocation and returns what should go to stdout.
pub fn execute(cli: &Cli) -> CliResult<String> {
    let source = read_source(cli)?;
    let name = cli.display_name();
    info!(file = %name, bytes = source.len(), "analyzing source");

    let analysis = match analyze(&source) {
        Ok(analysis) => analysis,
        Err(err) => {
            warn!(code = err.code, "analysis failed");
            DiagnosticPrinter::new(&name, &source).print(&err);
            return Err(CliError::new("", ExitCode::INVALID));
        }
    };

    debug!(
        tokens = analysis.tokens.len(),
        declarations = analysis.program.len(),
        "analysis succeeded"
    );

    if cli.check {
        return Ok(String::new());
    }

    render(&analysis, cli.emit, cli.compact)
}

/// Serializes the requested parts of an analysis.
pub fn render(analysis: &Analysis, emit: Emit, compact: bool) -> CliResult<String> {
    let to_cli = |e: serde_json::Error| CliError::new(format!("failed to serialize output: {}", e), ExitCode::IO);

    match emit {
        Emit::Tokens => analysis.tokens_json(compact).map_err(to_cli),
        Emit::Tree => analysis.tree_json(compact).map_err(to_cli),
        Emit::All => {
            let both = serde_json::json!({
                "tokens": analysis.tokens,
                "tree": analysis.program,
            });
            let text = if compact {
                serde_json::to_string(&both)
            } else {
                serde_json::to_string_pretty(&both)
            };
            text.map_err(to_cli)
        }
    }
}

fn read_source(cli: &Cli) -> CliResult<String> {
    match &cli.file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path).map_err(|e| {
            CliError::new(format!("cannot read {}: {}", path.display(), e), ExitCode::IO)
        }),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| CliError::new(format!("cannot read stdin: {}", e), ExitCode::IO))?;
            Ok(source)
        }
    }
}
