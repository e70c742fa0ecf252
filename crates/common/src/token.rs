//! Token representation for compiled programs.
//!
//! A compiled program is a flat sequence of tokens. Only [`Token::Command`]
//! may own an argument list, and argument lists are exactly one level deep.

use std::fmt;

/// One structural unit of a compiled program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A named operation, optionally carrying literal arguments.
    Command {
        /// Command name (`dup`, `+xy`, `get-parameter`, ...).
        name: String,
        /// Arguments collected between `[` and `]`.
        arguments: Vec<Token>,
    },
    /// Integer literal. Millimeter literals are stored here in nanometers.
    Int(i64),
    /// Identifier-shaped string argument (`[a-z][a-z0-9_-]*`).
    String(String),
    /// Canonical hyphenated UUID argument.
    Uuid(String),
}

impl Token {
    /// Create a command token with no arguments.
    pub fn command(name: impl Into<String>) -> Self {
        Token::Command {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Create a command token with the given arguments.
    pub fn command_with(name: impl Into<String>, arguments: Vec<Token>) -> Self {
        Token::Command {
            name: name.into(),
            arguments,
        }
    }

    /// Returns true for [`Token::Command`].
    pub fn is_command(&self) -> bool {
        matches!(self, Token::Command { .. })
    }

    /// Command name, or `None` for literal tokens.
    pub fn command_name(&self) -> Option<&str> {
        match self {
            Token::Command { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Short lowercase label for the token kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Command { .. } => "command",
            Token::Int(_) => "int",
            Token::String(_) => "string",
            Token::Uuid(_) => "uuid",
        }
    }
}

/// Renders the token as source text.
///
/// Commands with arguments render as `name [ arg arg ]`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Command { name, arguments } => {
                f.write_str(name)?;
                if !arguments.is_empty() {
                    f.write_str(" [")?;
                    for arg in arguments {
                        write!(f, " {arg}")?;
                    }
                    f.write_str(" ]")?;
                }
                Ok(())
            }
            Token::Int(value) => write!(f, "{value}"),
            Token::String(s) | Token::Uuid(s) => f.write_str(s),
        }
    }
}
