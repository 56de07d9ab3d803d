//! # Whitespace Handling
//!
//! JSON allows four insignificant whitespace characters between tokens:
//! space, horizontal tab, carriage return and line feed. The tokenizer skips
//! them before every token; only line feed affects line counting.

use nom::bytes::complete::take_while;

use super::token::ParserResult;

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Parses a possibly empty run of whitespace.
///
/// # Arguments
///
/// * `input` - The input string to parse
///
/// # Returns
///
/// * `ParserResult<&str>` - The remaining input and the whitespace run. The
///   run is empty when `input` does not start with whitespace; this parser
///   never fails.
///
/// # Examples
///
/// ```
/// # use jsontok::tokenizer::whitespace::parse_whitespace;
/// let (rest, ws) = parse_whitespace(" \t\n{}").unwrap();
/// assert_eq!(ws, " \t\n");
/// assert_eq!(rest, "{}");
/// ```
pub fn parse_whitespace(input: &str) -> ParserResult<'_, &str> {
    take_while(is_whitespace)(input)
}
