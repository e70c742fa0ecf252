//! Runtime errors for the paramprog VM.
//!
//! Every error that comes from a token includes its top-level index (`at`).

use paramprog_common::ParameterId;
use paramprog_compiler::CompileError;
use thiserror::Error;

/// Errors that occur during program execution.
///
/// Execution stops at the first error. The compiled tokens are never
/// affected, so a later run with different parameters may succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A built-in needed more values than the stack holds.
    #[error("stack underflow in '{command}' at token {at}")]
    StackUnderflow { at: usize, command: &'static str },

    /// A push would exceed the configured stack depth.
    #[error("stack overflow (limit {limit}) at token {at}")]
    StackOverflow { at: usize, limit: usize },

    /// Command name is neither a built-in nor `get-parameter`.
    #[error("unknown command '{name}' at token {at}")]
    UnknownCommand { at: usize, name: String },

    /// Command was given the wrong arguments.
    #[error("'{command}' requires one string argument at token {at}")]
    BadArguments { at: usize, command: &'static str },

    /// String argument does not name a parameter.
    #[error("invalid parameter '{name}' at token {at}")]
    InvalidParameterName { at: usize, name: String },

    /// Parameter is valid but has no value in the supplied table.
    #[error("parameter not found: {parameter} at token {at}")]
    ParameterNotFound { at: usize, parameter: ParameterId },

    /// Integer division with a zero divisor.
    #[error("division by zero at token {at}")]
    DivisionByZero { at: usize },

    /// The program's last compile failed, so there is nothing to run.
    #[error("program did not compile: {0}")]
    NotCompiled(CompileError),
}
