//! Formatter: token sequence → canonical source text.
//!
//! Output is a single line with tokens separated by one space. Arguments
//! render as `name [ arg arg ]`. Millimeter literals come back as plain
//! integers since the compiler does not keep the original spelling.

use paramprog_common::Token;

/// Render a token sequence as canonical source text.
///
/// For sequences that [`compile`](crate::compile) produced, compiling the
/// output yields the same tokens.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
