//! Assembles classified lexemes into a token sequence.
//!
//! The only structure is the argument list: `[` opens one for the last
//! top-level command and `]` closes it. While a list is open, literals are
//! appended to the arguments of the last top-level token.

use crate::error::CompileError;
use crate::lexer::{self, Lexeme};
use paramprog_common::Token;

#[derive(Debug, Default)]
struct Parser {
    tokens: Vec<Token>,
    /// Lexeme index of the `[` that opened the current argument list.
    open_at: Option<usize>,
}

impl Parser {
    fn in_arguments(&self) -> bool {
        self.open_at.is_some()
    }

    /// Append a literal to the open argument list, or to the top level.
    fn push_operand(&mut self, token: Token, at: usize) -> Result<(), CompileError> {
        if !self.in_arguments() {
            self.tokens.push(token);
            return Ok(());
        }
        match self.tokens.last_mut() {
            Some(Token::Command { arguments, .. }) => {
                arguments.push(token);
                Ok(())
            }
            _ => Err(CompileError::OpenBracketWithoutCommand { at }),
        }
    }

    fn push_command(&mut self, name: &str) {
        self.tokens.push(Token::command(name));
    }

    fn open(&mut self, at: usize) -> Result<(), CompileError> {
        if self.in_arguments() {
            return Err(CompileError::RepeatedOpenBracket { at });
        }
        if !self.tokens.last().is_some_and(Token::is_command) {
            return Err(CompileError::OpenBracketWithoutCommand { at });
        }
        self.open_at = Some(at);
        Ok(())
    }

    fn close(&mut self, at: usize) -> Result<(), CompileError> {
        if self.open_at.take().is_none() {
            return Err(CompileError::RepeatedCloseBracket { at });
        }
        Ok(())
    }

    fn lexeme(&mut self, at: usize, word: &str) -> Result<(), CompileError> {
        match lexer::classify(word) {
            // Operators always start a new top-level command, even inside an
            // argument list. The list stays open and now belongs to the operator.
            Lexeme::Operator(op) => self.push_command(op),
            Lexeme::Integer(text) => {
                let value = text.parse().map_err(|_| CompileError::IntegerOutOfRange {
                    at,
                    token: word.to_string(),
                })?;
                self.push_operand(Token::Int(value), at)?;
            }
            Lexeme::Millimeters(number) => {
                let value = lexer::millimeters_to_units(number).ok_or_else(|| {
                    CompileError::DimensionOutOfRange {
                        at,
                        token: word.to_string(),
                    }
                })?;
                self.push_operand(Token::Int(value), at)?;
            }
            Lexeme::Uuid(uuid) if self.in_arguments() => {
                self.push_operand(Token::Uuid(uuid.to_string()), at)?;
            }
            Lexeme::Uuid(text) if lexer::is_identifier(text) => self.push_command(text),
            Lexeme::Identifier(name) if !self.in_arguments() => self.push_command(name),
            Lexeme::Identifier(s) => self.push_operand(Token::String(s.to_string()), at)?,
            Lexeme::OpenBracket => self.open(at)?,
            Lexeme::CloseBracket => self.close(at)?,
            Lexeme::Uuid(_) | Lexeme::Unrecognized => {
                return Err(CompileError::UnhandledToken {
                    at,
                    token: word.to_string(),
                })
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<Token>, CompileError> {
        match self.open_at {
            Some(at) => Err(CompileError::UnclosedArgumentList { at }),
            None => Ok(self.tokens),
        }
    }
}

/// Compile source text into a token sequence.
///
/// All-or-nothing: the first error discards everything built so far.
pub(crate) fn parse(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut parser = Parser::default();
    for (at, word) in lexer::words(source).enumerate() {
        parser.lexeme(at, word)?;
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Token {
        Token::Int(v)
    }

    fn string(s: &str) -> Token {
        Token::String(s.to_string())
    }

    #[test]
    fn empty_source() {
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse(" \n\t ").unwrap(), vec![]);
    }

    #[test]
    fn top_level_literals_and_commands() {
        assert_eq!(
            parse("1 2 + dup").unwrap(),
            vec![int(1), int(2), Token::command("+"), Token::command("dup")]
        );
    }

    #[test]
    fn command_with_arguments() {
        assert_eq!(
            parse("foo [ 1 2 ]").unwrap(),
            vec![Token::command_with("foo", vec![int(1), int(2)])]
        );
    }

    #[test]
    fn identifiers_become_strings_inside_arguments() {
        assert_eq!(
            parse("get-parameter [ width ] dup").unwrap(),
            vec![
                Token::command_with("get-parameter", vec![string("width")]),
                Token::command("dup"),
            ]
        );
    }

    #[test]
    fn millimeters_inside_arguments() {
        assert_eq!(
            parse("foo [ 1.5mm -2mm ]").unwrap(),
            vec![Token::command_with(
                "foo",
                vec![int(1_500_000), int(-2_000_000)]
            )]
        );
    }

    #[test]
    fn uuid_inside_arguments() {
        let uuid = "0d2a4a1c-2f1e-4b3c-9a8d-1234567890ab";
        assert_eq!(
            parse(&format!("pick [ {uuid} ]")).unwrap(),
            vec![Token::command_with(
                "pick",
                vec![Token::Uuid(uuid.to_string())]
            )]
        );
    }

    #[test]
    fn uuid_outside_arguments() {
        // Letter-first UUIDs also have identifier shape and become commands.
        let letter_first = "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d";
        assert_eq!(
            parse(letter_first).unwrap(),
            vec![Token::command(letter_first)]
        );

        let digit_first = "0d2a4a1c-2f1e-4b3c-9a8d-1234567890ab";
        assert_eq!(
            parse(digit_first).unwrap_err(),
            CompileError::UnhandledToken {
                at: 0,
                token: digit_first.to_string()
            }
        );
    }

    #[test]
    fn operator_inside_arguments_starts_new_command() {
        assert_eq!(
            parse("foo [ 1 + 2 ]").unwrap(),
            vec![
                Token::command_with("foo", vec![int(1)]),
                Token::command_with("+", vec![int(2)]),
            ]
        );
    }

    #[test]
    fn reopening_arguments_appends() {
        assert_eq!(
            parse("foo [ 1 ] [ 2 ]").unwrap(),
            vec![Token::command_with("foo", vec![int(1), int(2)])]
        );
    }

    #[test]
    fn empty_argument_list() {
        assert_eq!(parse("foo [ ]").unwrap(), vec![Token::command("foo")]);
    }

    #[test]
    fn open_bracket_at_start() {
        assert_eq!(
            parse("[ 1 ]").unwrap_err(),
            CompileError::OpenBracketWithoutCommand { at: 0 }
        );
    }

    #[test]
    fn open_bracket_after_literal() {
        assert_eq!(
            parse("1 [ 2 ]").unwrap_err(),
            CompileError::OpenBracketWithoutCommand { at: 1 }
        );
    }

    #[test]
    fn repeated_open_bracket() {
        assert_eq!(
            parse("foo [ [ 1 ]").unwrap_err(),
            CompileError::RepeatedOpenBracket { at: 2 }
        );
    }

    #[test]
    fn repeated_close_bracket() {
        assert_eq!(
            parse("foo [ 1 ] ]").unwrap_err(),
            CompileError::RepeatedCloseBracket { at: 4 }
        );
        assert_eq!(
            parse("]").unwrap_err(),
            CompileError::RepeatedCloseBracket { at: 0 }
        );
    }

    #[test]
    fn unclosed_argument_list() {
        assert_eq!(
            parse("foo [ 1 2").unwrap_err(),
            CompileError::UnclosedArgumentList { at: 1 }
        );
    }

    #[test]
    fn unhandled_token() {
        assert_eq!(
            parse("1 2 Dup").unwrap_err(),
            CompileError::UnhandledToken {
                at: 2,
                token: "Dup".to_string()
            }
        );
    }

    #[test]
    fn integer_out_of_range() {
        assert_eq!(
            parse("9223372036854775808").unwrap_err(),
            CompileError::IntegerOutOfRange {
                at: 0,
                token: "9223372036854775808".to_string()
            }
        );
        assert_eq!(
            parse("-9223372036854775808").unwrap(),
            vec![int(i64::MIN)]
        );
    }

    #[test]
    fn dimension_out_of_range() {
        assert_eq!(
            parse("10000000000000mm").unwrap_err(),
            CompileError::DimensionOutOfRange {
                at: 0,
                token: "10000000000000mm".to_string()
            }
        );
    }
}
