//! paramprog common types.
//!
//! This crate provides the data structures shared by the compiler and the
//! virtual machine:
//!
//! - [`Token`]: one structural unit of a compiled program
//! - [`ParameterId`]: the closed set of named design parameters
//! - [`ParameterSet`]: a parameter table supplied at execution time
//! - [`ParameterSource`]: the read-only lookup the VM goes through
//! - [`ParseParameterIdError`]: unknown parameter name

pub mod error;
pub mod parameter;
pub mod token;

// Re-export commonly used types at the crate root.
pub use error::ParseParameterIdError;
pub use parameter::{ParameterId, ParameterSet, ParameterSource};
pub use token::Token;
