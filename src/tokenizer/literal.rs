//! # Literal Token Handling
//!
//! Scanners for the JSON value literals: strings, numbers and the keywords
//! `true`, `false` and `null`.
//!
//! Every scanner returns a slice of its input. Strings are returned without
//! their quotes and with escape sequences left untouched; numbers span the
//! whole numeral from the sign to the last exponent digit.
//!
//! ## Number Grammar
//!
//! ```text
//! number   = [ "-" ] integer [ fraction ] [ exponent ]
//! integer  = "0" | digit1-9 *digit
//! fraction = "." 1*digit
//! exponent = ( "e" | "E" ) [ "+" | "-" ] 1*digit
//! ```
//!
//! A leading `0` ends the integer part, so `0123` scans as `0` followed by
//! a separate numeral `123`.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, one_of},
    combinator::{opt, recognize},
    sequence::{pair, preceded, tuple},
    Parser,
};

use super::token::{ErrorKind, ParserResult, ScanError};

/// Runs `parser` and turns any failure into a fatal error of `kind`, keeping
/// the position where the failure happened.
fn expect<'a, O, P>(kind: ErrorKind, mut parser: P) -> impl FnMut(&'a str) -> ParserResult<'a, O>
where
    P: Parser<&'a str, O, ScanError<'a>>,
{
    move |input: &'a str| match parser.parse(input) {
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(nom::Err::Failure(ScanError::new(e.input, kind)))
        }
        other => other,
    }
}

/// Scans a string literal and returns its raw content.
///
/// A backslash consumes the character after it whatever it is; escapes are
/// only tracked so the closing quote is found, never decoded.
#[tracing::instrument(level = "trace", skip(input))]
pub fn scan_string(input: &str) -> ParserResult<'_, &str> {
    let (body, _) = char('"')(input)?;
    let end = &body[body.len()..];

    let mut chars = body.char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '"' => return Ok((&body[index + 1..], &body[..index])),
            '\\' => {
                if chars.next().is_none() {
                    return Err(nom::Err::Failure(ScanError::new(
                        end,
                        ErrorKind::UnterminatedStringEscape,
                    )));
                }
            }
            _ => {}
        }
    }

    Err(nom::Err::Failure(ScanError::new(
        end,
        ErrorKind::UnterminatedString,
    )))
}

/// Scans the keyword `word` with an exact, case-sensitive match.
///
/// On mismatch the error points at the first character that differs, or
/// at the end of input when the keyword is truncated.
pub fn scan_literal<'a>(word: &'static str) -> impl FnMut(&'a str) -> ParserResult<'a, &'a str> {
    move |input: &'a str| {
        tag(word)(input).map_err(|_: nom::Err<ScanError<'a>>| {
            let matched = input
                .bytes()
                .zip(word.bytes())
                .take_while(|(a, b)| a == b)
                .count();
            nom::Err::Failure(ScanError::new(&input[matched..], ErrorKind::InvalidLiteral))
        })
    }
}

fn integer_part(input: &str) -> ParserResult<'_, &str> {
    alt((tag("0"), digit1))(input)
}

fn fraction(input: &str) -> ParserResult<'_, &str> {
    preceded(
        char('.'),
        expect(ErrorKind::MissingFractionalDigits, digit1),
    )(input)
}

fn exponent(input: &str) -> ParserResult<'_, &str> {
    preceded(
        pair(one_of("eE"), opt(one_of("+-"))),
        expect(ErrorKind::MissingExponentDigits, digit1),
    )(input)
}

/// Scans a numeral and returns it verbatim.
///
/// # Arguments
///
/// * `input` - The input string to parse, starting at `-` or a digit
///
/// # Returns
///
/// * `ParserResult<&str>` - The remaining input and the numeral from sign to
///   last digit. A missing integer, fraction or exponent digit is a
///   `nom::Err::Failure` carrying the matching [`ErrorKind`].
///
/// # Examples
///
/// ```
/// # use jsontok::tokenizer::literal::scan_number;
/// # use jsontok::ErrorKind;
/// let (rest, numeral) = scan_number("-12.5e+3,").unwrap();
/// assert_eq!(numeral, "-12.5e+3");
/// assert_eq!(rest, ",");
///
/// let Err(nom::Err::Failure(error)) = scan_number("1.e") else {
///     panic!("expected a failure");
/// };
/// assert_eq!(error.kind, ErrorKind::MissingFractionalDigits);
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn scan_number(input: &str) -> ParserResult<'_, &str> {
    recognize(tuple((
        opt(char('-')),
        expect(ErrorKind::InvalidNumberFormat, integer_part),
        opt(fraction),
        opt(exponent),
    )))(input)
}
