//! # Structural Token Handling
//!
//! The six single-character tokens that delimit JSON syntax without carrying
//! a value: `{ } [ ] : ,`.

use nom::{branch::alt, character::complete::char, combinator::value};

use super::token::{ParserResult, TokenKind};

/// Parses one structural character into its [`TokenKind`].
///
/// # Arguments
///
/// * `input` - The input string to parse
///
/// # Returns
///
/// * `ParserResult<TokenKind>` - The input after the character and its kind,
///   or an error if `input` does not start with one of `{ } [ ] : ,`
///
/// # Examples
///
/// ```
/// # use jsontok::tokenizer::symbol::parse_structural;
/// # use jsontok::TokenKind;
/// let (rest, kind) = parse_structural(":1").unwrap();
/// assert_eq!(kind, TokenKind::Colon);
/// assert_eq!(rest, "1");
/// ```
pub fn parse_structural(input: &str) -> ParserResult<'_, TokenKind> {
    alt((
        value(TokenKind::ObjectStart, char('{')),
        value(TokenKind::ObjectEnd, char('}')),
        value(TokenKind::ArrayStart, char('[')),
        value(TokenKind::ArrayEnd, char(']')),
        value(TokenKind::Colon, char(':')),
        value(TokenKind::Comma, char(',')),
    ))(input)
}
