//! CLI command implementations.
//!
//! Each command returns `Err(exit_code)` after printing its own diagnostics.

use std::fs;
use std::path::{Path, PathBuf};

use paramprog_compiler::{compile, format_tokens};
use paramprog_vm::{Limits, Program};
use tracing::debug;

use crate::params;

/// Exit code for input, compile and parameter errors.
pub const EXIT_INPUT: i32 = 1;
/// Exit code for runtime errors.
pub const EXIT_RUNTIME: i32 = 3;

/// Where program source comes from.
#[derive(Debug, Clone)]
pub enum Source {
    File(PathBuf),
    Inline(String),
}

impl Source {
    fn read(&self) -> Result<String, i32> {
        match self {
            Source::File(path) => fs::read_to_string(path).map_err(|e| {
                eprintln!("error: cannot read '{}': {e}", path.display());
                EXIT_INPUT
            }),
            Source::Inline(text) => Ok(text.clone()),
        }
    }
}

/// Options for the `run` command.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub params_file: Option<PathBuf>,
    pub assignments: Vec<String>,
    pub max_stack: Option<usize>,
    pub millimeters: bool,
}

/// Compile and print canonical token text.
pub fn compile_cmd(source: &Source) -> Result<(), i32> {
    let text = source.read()?;
    let tokens = compile(&text).map_err(|e| {
        eprintln!("error: {e}");
        EXIT_INPUT
    })?;
    println!("{}", format_tokens(&tokens));
    Ok(())
}

/// Compile only, reporting success or the first error.
pub fn check(source: &Source) -> Result<(), i32> {
    let text = source.read()?;
    match compile(&text) {
        Ok(tokens) => {
            debug!(tokens = tokens.len(), "check passed");
            println!("OK");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            Err(EXIT_INPUT)
        }
    }
}

/// Compile and execute, printing the final stack bottom to top.
pub fn run(source: &Source, options: &RunOptions) -> Result<(), i32> {
    let text = source.read()?;

    let params = params::collect(options.params_file.as_deref(), &options.assignments)
        .map_err(|e| {
            eprintln!("error: {e}");
            EXIT_INPUT
        })?;
    debug!(parameters = params.len(), "parameters loaded");

    let mut program: Program = text.parse().map_err(|e| {
        eprintln!("error: {e}");
        EXIT_INPUT
    })?;
    if let Some(depth) = options.max_stack {
        program = program.with_limits(Limits::with_max_stack_depth(depth));
    }

    match program.run(&params) {
        Ok(stack) => {
            for value in stack {
                if options.millimeters {
                    println!("{}", params::format_millimeters(*value));
                } else {
                    println!("{value}");
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(EXIT_RUNTIME)
        }
    }
}

/// Build a [`Source`] from the mutually exclusive file / `-e` arguments.
pub fn source_from(file: Option<&Path>, expr: Option<&str>) -> Result<Source, i32> {
    match (file, expr) {
        (Some(path), None) => Ok(Source::File(path.to_path_buf())),
        (None, Some(text)) => Ok(Source::Inline(text.to_string())),
        _ => {
            eprintln!("error: give either a source file or -e <expr>");
            Err(EXIT_INPUT)
        }
    }
}
