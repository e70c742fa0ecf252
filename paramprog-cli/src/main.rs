//! paramprog CLI: compile, check and run parameter programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input, compile or parameter error
//! - 3: Runtime error

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use paramprog_cli::commands::{self, RunOptions};
use tracing_subscriber::{fmt, EnvFilter};

/// Compile and evaluate paramprog expressions.
#[derive(Parser)]
#[command(name = "paramprog", version, about = "Parameter expression compiler and VM")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Program text, from a file or inline.
#[derive(Args)]
struct SourceArgs {
    /// Path to a source file
    #[arg(required_unless_present = "expr", conflicts_with = "expr")]
    file: Option<PathBuf>,
    /// Source text given on the command line
    #[arg(short = 'e', long = "expr", allow_hyphen_values = true)]
    expr: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile and print the canonical token text
    Compile {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Compile only and report the first error
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Compile and execute, printing the final stack bottom to top
    Run {
        #[command(flatten)]
        source: SourceArgs,
        /// Parameter value as name=value (integer or millimeter literal)
        #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
        param: Vec<String>,
        /// JSON file mapping parameter names to integer values
        #[arg(long = "params", value_name = "FILE")]
        params_file: Option<PathBuf>,
        /// Maximum stack depth
        #[arg(long = "max-stack", value_name = "N")]
        max_stack: Option<usize>,
        /// Print results as millimeters instead of raw integers
        #[arg(long)]
        mm: bool,
    },
}

/// Initialize logging on stderr. `RUST_LOG` overrides the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile { source } => {
            commands::source_from(source.file.as_deref(), source.expr.as_deref())
                .and_then(|s| commands::compile_cmd(&s))
        }
        Commands::Check { source } => {
            commands::source_from(source.file.as_deref(), source.expr.as_deref())
                .and_then(|s| commands::check(&s))
        }
        Commands::Run {
            source,
            param,
            params_file,
            max_stack,
            mm,
        } => {
            let options = RunOptions {
                params_file,
                assignments: param,
                max_stack,
                millimeters: mm,
            };
            commands::source_from(source.file.as_deref(), source.expr.as_deref())
                .and_then(|s| commands::run(&s, &options))
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}
