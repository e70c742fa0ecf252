//! paramprog compiler: source text to token sequence.
//!
//! Source is a whitespace-separated list of lexemes: integers, millimeter
//! literals, command names, math operators and `[ ... ]` argument lists.
//! There is no quoting, no comments and no multi-line structure.
//!
//! # Usage
//!
//! ```
//! use paramprog_common::Token;
//! use paramprog_compiler::{compile, format_tokens};
//!
//! let tokens = compile("get-parameter [ pitch ] 0.5mm +").unwrap();
//! assert_eq!(tokens[1], Token::Int(500_000));
//! assert_eq!(format_tokens(&tokens), "get-parameter [ pitch ] 500000 +");
//! ```

pub mod error;

mod formatter;
mod lexer;
mod parser;

pub use error::CompileError;
pub use formatter::format_tokens;
pub use lexer::UNITS_PER_MM;

use paramprog_common::Token;
use tracing::debug;

/// Compile source text into a token sequence.
///
/// Returns the first error encountered; nothing is returned on failure.
pub fn compile(source: &str) -> Result<Vec<Token>, CompileError> {
    let result = parser::parse(source);
    match &result {
        Ok(tokens) => debug!(tokens = tokens.len(), "compiled program"),
        Err(e) => debug!(error = %e, "compile failed"),
    }
    result
}

/// Parse a single numeric literal: a decimal integer or a millimeter
/// literal such as `1.5mm`.
pub fn parse_number(text: &str) -> Result<i64, CompileError> {
    let unhandled = || CompileError::UnhandledToken {
        at: 0,
        token: text.to_string(),
    };
    match lexer::classify(text) {
        lexer::Lexeme::Integer(digits) => {
            digits.parse().map_err(|_| CompileError::IntegerOutOfRange {
                at: 0,
                token: text.to_string(),
            })
        }
        lexer::Lexeme::Millimeters(number) => lexer::millimeters_to_units(number).ok_or_else(
            || CompileError::DimensionOutOfRange {
                at: 0,
                token: text.to_string(),
            },
        ),
        _ => Err(unhandled()),
    }
}
