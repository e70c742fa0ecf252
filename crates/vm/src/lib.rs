//! paramprog virtual machine: executes compiled token sequences.
//!
//! The VM is a stack machine over `i64` values:
//! - integer tokens push themselves
//! - built-in commands (`dup`, `+`, `+xy`, ...) rewrite the top of the stack
//! - `get-parameter [ name ]` pushes a value from the caller's parameter table
//!
//! # Usage
//!
//! ```
//! use paramprog_common::{ParameterId, ParameterSet};
//! use paramprog_vm::Program;
//!
//! let mut params = ParameterSet::new();
//! params.insert(ParameterId::PadWidth, 1_200_000);
//!
//! let mut program = Program::new("get-parameter [ pad-width ] 0.1mm +");
//! assert_eq!(program.run(&params).unwrap(), &[1_300_000]);
//! ```

pub mod builtin;
pub mod dump;
pub mod error;
pub mod execute;
pub mod machine;
pub mod program;

pub use builtin::Builtin;
pub use dump::{DumpSink, TracingSink};
pub use error::RuntimeError;
pub use machine::{Limits, Machine};
pub use program::Program;

use paramprog_common::{ParameterSource, Token};

/// Execute a token sequence and return the final stack, bottom first.
///
/// `dump` output goes to [`TracingSink`]. Use [`Machine::execute`] to
/// reuse a stack allocation or pick another sink.
///
/// # Errors
///
/// Returns the first [`RuntimeError`] raised by any token.
pub fn run<P: ParameterSource + ?Sized>(
    tokens: &[Token],
    params: &P,
) -> Result<Vec<i64>, RuntimeError> {
    let mut machine = Machine::new();
    machine.execute(tokens, params, &mut TracingSink)?;
    Ok(machine.into_stack())
}
