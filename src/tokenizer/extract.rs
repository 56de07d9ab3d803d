//! # Value Extraction
//!
//! Helpers that turn an already classified [`Token`] into a value. They
//! never fail loudly: a token of the wrong kind, or text that cannot be
//! converted, yields `None`.

use super::token::{Token, TokenKind};

pub fn extract_boolean(token: &Token<'_>) -> Option<bool> {
    match token.kind {
        TokenKind::True => Some(true),
        TokenKind::False => Some(false),
        _ => None,
    }
}

/// Returns the raw string content, escape sequences included.
pub fn extract_string<'a>(token: &Token<'a>) -> Option<&'a str> {
    match token.kind {
        TokenKind::String => Some(token.text),
        _ => None,
    }
}

/// Best-effort floating-point value of a number token.
pub fn extract_number(token: &Token<'_>) -> Option<f64> {
    match token.kind {
        TokenKind::Number => token.text.parse().ok(),
        _ => None,
    }
}

/// Integer value of a number token without fraction or exponent that fits
/// into an `i64`.
pub fn extract_integer(token: &Token<'_>) -> Option<i64> {
    match token.kind {
        TokenKind::Number if !token.text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) => {
            token.text.parse().ok()
        }
        _ => None,
    }
}

pub fn extract_null(token: &Token<'_>) -> Option<()> {
    match token.kind {
        TokenKind::Null => Some(()),
        _ => None,
    }
}
