//! Error types for the paramprog compiler.

use thiserror::Error;

/// Errors produced while compiling source text into tokens.
///
/// `at` is the zero-based index of the offending whitespace-separated
/// lexeme. Compilation stops at the first error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// `[` while an argument list is already open.
    #[error("lexeme {at}: repeated '['")]
    RepeatedOpenBracket { at: usize },

    /// `[` with no command token before it.
    #[error("lexeme {at}: '[' has to follow a command token")]
    OpenBracketWithoutCommand { at: usize },

    /// `]` with no open argument list.
    #[error("lexeme {at}: repeated ']'")]
    RepeatedCloseBracket { at: usize },

    /// Input ended while an argument list was still open.
    #[error("lexeme {at}: '[' is never closed")]
    UnclosedArgumentList { at: usize },

    /// A lexeme that matches none of the token forms.
    #[error("lexeme {at}: unhandled token '{token}'")]
    UnhandledToken { at: usize, token: String },

    /// Integer literal does not fit in 64 bits.
    #[error("lexeme {at}: integer '{token}' out of range")]
    IntegerOutOfRange { at: usize, token: String },

    /// Millimeter literal does not fit in 64 bits once scaled.
    #[error("lexeme {at}: dimension '{token}' out of range")]
    DimensionOutOfRange { at: usize, token: String },
}

impl CompileError {
    /// Index of the lexeme the error refers to.
    pub fn at(&self) -> usize {
        match self {
            CompileError::RepeatedOpenBracket { at }
            | CompileError::OpenBracketWithoutCommand { at }
            | CompileError::RepeatedCloseBracket { at }
            | CompileError::UnclosedArgumentList { at }
            | CompileError::UnhandledToken { at, .. }
            | CompileError::IntegerOutOfRange { at, .. }
            | CompileError::DimensionOutOfRange { at, .. } => *at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_brackets() {
        assert_eq!(
            CompileError::RepeatedOpenBracket { at: 3 }.to_string(),
            "lexeme 3: repeated '['"
        );
        assert_eq!(
            CompileError::OpenBracketWithoutCommand { at: 0 }.to_string(),
            "lexeme 0: '[' has to follow a command token"
        );
        assert_eq!(
            CompileError::RepeatedCloseBracket { at: 1 }.to_string(),
            "lexeme 1: repeated ']'"
        );
        assert_eq!(
            CompileError::UnclosedArgumentList { at: 1 }.to_string(),
            "lexeme 1: '[' is never closed"
        );
    }

    #[test]
    fn error_display_unhandled_token() {
        let e = CompileError::UnhandledToken {
            at: 2,
            token: "FOO".to_string(),
        };
        assert_eq!(e.to_string(), "lexeme 2: unhandled token 'FOO'");
        assert_eq!(e.at(), 2);
    }

    #[test]
    fn error_display_out_of_range() {
        let e = CompileError::IntegerOutOfRange {
            at: 0,
            token: "99999999999999999999".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "lexeme 0: integer '99999999999999999999' out of range"
        );
        let e = CompileError::DimensionOutOfRange {
            at: 4,
            token: "1e30mm".to_string(),
        };
        assert_eq!(e.to_string(), "lexeme 4: dimension '1e30mm' out of range");
    }

    #[test]
    fn error_clone_and_eq() {
        let e1 = CompileError::UnhandledToken {
            at: 1,
            token: "X".to_string(),
        };
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
