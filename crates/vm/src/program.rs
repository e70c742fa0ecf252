//! A program: source text together with its compiled form.

use std::str::FromStr;

use crate::dump::{DumpSink, TracingSink};
use crate::error::RuntimeError;
use crate::machine::{Limits, Machine};
use paramprog_common::{ParameterSource, Token};
use paramprog_compiler::{compile, CompileError};

/// Source text, its compiled tokens and the stack of the last run.
///
/// Cloning copies the token tree, so clones can be run on separate
/// threads without affecting each other.
#[derive(Debug, Clone, Default)]
pub struct Program {
    source: String,
    tokens: Vec<Token>,
    /// Error from the last compile; `tokens` is empty while this is set.
    error: Option<CompileError>,
    machine: Machine,
}

impl Program {
    /// Create a program and compile it immediately.
    ///
    /// A compile failure does not prevent construction; it is kept and
    /// reported by [`compile_error`](Self::compile_error) and by every run.
    pub fn new(source: impl Into<String>) -> Self {
        let mut program = Self {
            source: source.into(),
            ..Self::default()
        };
        // The error is retained on the program.
        let _ = program.recompile();
        program
    }

    /// Replace the execution limits. The stack is cleared.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.machine = Machine::with_limits(limits);
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replace the source text and recompile.
    ///
    /// The previous tokens are discarded whether or not compilation succeeds.
    pub fn set_source(&mut self, source: impl Into<String>) -> Result<(), CompileError> {
        self.source = source.into();
        self.recompile()
    }

    fn recompile(&mut self) -> Result<(), CompileError> {
        match compile(&self.source) {
            Ok(tokens) => {
                self.tokens = tokens;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.tokens.clear();
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// The error from the last compile, if it failed.
    pub fn compile_error(&self) -> Option<&CompileError> {
        self.error.as_ref()
    }

    /// Compiled tokens. Empty if the last compile failed.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Stack after the last run, bottom first.
    pub fn stack(&self) -> &[i64] {
        self.machine.stack()
    }

    pub fn limits(&self) -> Limits {
        self.machine.limits()
    }

    /// Run the program against `params`, sending `dump` output to tracing.
    pub fn run<P: ParameterSource + ?Sized>(&mut self, params: &P) -> Result<&[i64], RuntimeError> {
        self.run_with(params, &mut TracingSink)
    }

    /// Run the program against `params`, sending `dump` output to `sink`.
    pub fn run_with<P, D>(&mut self, params: &P, sink: &mut D) -> Result<&[i64], RuntimeError>
    where
        P: ParameterSource + ?Sized,
        D: DumpSink + ?Sized,
    {
        if let Some(e) = &self.error {
            self.machine.reset();
            return Err(RuntimeError::NotCompiled(e.clone()));
        }
        self.machine.execute(&self.tokens, params, sink)?;
        Ok(self.machine.stack())
    }
}

/// Parses and compiles, failing if the source does not compile.
impl FromStr for Program {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut program = Self {
            source: s.to_string(),
            ..Self::default()
        };
        program.recompile()?;
        Ok(program)
    }
}
