use std::{fmt, iter::FusedIterator};

use nom::{
    combinator::map,
    error::{ErrorKind as NomErrorKind, ParseError},
    IResult,
};
use thiserror::Error;

use crate::config::{Recovery, TokenizerConfig};

use super::{
    literal::{scan_literal, scan_number, scan_string},
    symbol::parse_structural,
    whitespace::parse_whitespace,
};

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    String,
    Number,
    True,
    False,
    Null,
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `:`
    Colon,
    /// `,`
    Comma,
    EndOfInput,
    /// Malformed input. The tokenizer reports failures through this arm
    /// instead of panicking.
    Error(ErrorKind),
}

/// Why a piece of input could not be tokenized.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
pub enum ErrorKind {
    #[strum(serialize = "unterminated string")]
    UnterminatedString,
    #[strum(serialize = "unterminated string escape")]
    UnterminatedStringEscape,
    #[strum(serialize = "invalid literal")]
    InvalidLiteral,
    #[strum(serialize = "invalid number format")]
    InvalidNumberFormat,
    #[strum(serialize = "invalid number format: missing fractional digits")]
    MissingFractionalDigits,
    #[strum(serialize = "invalid number format: missing exponent digits")]
    MissingExponentDigits,
    #[strum(serialize = "unexpected character")]
    UnexpectedCharacter,
}

/// A classified span of the input.
///
/// `text` borrows from the input buffer. It holds the raw content between
/// the quotes for strings, the full numeral for numbers, the literal for
/// `true`/`false`/`null`, the offending span for errors and is empty for
/// punctuation and end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the first character.
    pub offset: usize,
    /// 1-based line of the first character.
    pub line: usize,
    /// 1-based column of the first character, counted in characters.
    pub column: usize,
}

impl<'a> Token<'a> {
    pub const fn new(
        kind: TokenKind,
        text: &'a str,
        offset: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            text,
            offset,
            line,
            column,
        }
    }

    /// Returns the error kind when this is an error token.
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self.kind {
            TokenKind::Error(kind) => Some(kind),
            _ => None,
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    pub const fn is_valid(&self) -> bool {
        !self.is_error()
    }

    /// `{ } [ ] : ,`
    pub const fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::ObjectStart
                | TokenKind::ObjectEnd
                | TokenKind::ArrayStart
                | TokenKind::ArrayEnd
                | TokenKind::Colon
                | TokenKind::Comma
        )
    }

    /// Strings, numbers and the three keyword literals.
    pub const fn is_value(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::String
                | TokenKind::Number
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Converts an error token into a [`TokenizerError`], passing every other
    /// token through.
    pub fn into_result(self) -> TokenizerResult<Self> {
        match self.kind {
            TokenKind::Error(kind) => Err(TokenizerError {
                kind,
                offset: self.offset,
                line: self.line,
                column: self.column,
            }),
            _ => Ok(self),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind)?;
        if let Some(kind) = self.error_kind() {
            write!(f, " ({})", kind)?;
        }
        if !self.text.is_empty() {
            write!(f, " {:?}", self.text)?;
        }
        Ok(())
    }
}

/// Failure reported by the sub-scanners.
///
/// `input` is the remaining input at the point where scanning stopped, so
/// the consumed prefix of a failed token can be recovered without copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError<'a> {
    pub input: &'a str,
    pub kind: ErrorKind,
}

impl<'a> ScanError<'a> {
    pub fn new(input: &'a str, kind: ErrorKind) -> Self {
        Self { input, kind }
    }

    fn from_nom(err: nom::Err<ScanError<'a>>, input: &'a str) -> Self {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
            // complete parsers never ask for more input
            nom::Err::Incomplete(_) => ScanError::new(input, ErrorKind::UnexpectedCharacter),
        }
    }
}

impl<'a> ParseError<&'a str> for ScanError<'a> {
    fn from_error_kind(input: &'a str, _kind: NomErrorKind) -> Self {
        ScanError::new(input, ErrorKind::UnexpectedCharacter)
    }

    fn append(_input: &'a str, _kind: NomErrorKind, other: Self) -> Self {
        other
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, ScanError<'a>>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at line {line}, column {column}")]
pub struct TokenizerError {
    pub kind: ErrorKind,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;

/// A cursor over a JSON input buffer producing one [`Token`] per call.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    config: TokenizerConfig,
    current_position: usize,
    current_line: usize,
    current_column: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, TokenizerConfig::default())
    }

    pub fn with_config(input: &'a str, config: TokenizerConfig) -> Self {
        Self {
            input,
            config,
            current_position: 0,
            current_line: 1,   // 1-based
            current_column: 1, // 1-based
        }
    }

    /// Skips whitespace and classifies the next token.
    ///
    /// Once [`TokenKind::EndOfInput`] is returned every further call returns
    /// it again at the same position. Error tokens move the cursor according
    /// to the configured [`Recovery`] policy.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let input = self.input;
        let offset = self.current_position;
        let line = self.current_line;
        let column = self.current_column;
        let remaining = &input[offset..];

        let Some(first) = remaining.chars().next() else {
            return Token::new(TokenKind::EndOfInput, "", offset, line, column);
        };

        match scan_token(remaining, first) {
            Ok((rest, (kind, text))) => {
                self.update_position(&remaining[..remaining.len() - rest.len()]);
                let token = Token::new(kind, text, offset, line, column);
                tracing::trace!(%token, "token");
                token
            }
            Err(err) => {
                let err = ScanError::from_nom(err, remaining);
                let text = error_text(remaining, first, &err);
                if self.config.recovery == Recovery::Skip {
                    self.update_position(text);
                }
                tracing::debug!(kind = %err.kind, line, column, text, "lexical error");
                Token::new(TokenKind::Error(err.kind), text, offset, line, column)
            }
        }
    }

    /// The character at the cursor, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.input[self.current_position..].chars().next()
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.current_position
    }

    pub fn line(&self) -> usize {
        self.current_line
    }

    pub fn column(&self) -> usize {
        self.current_column
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Turns the tokenizer into an iterator over the tokens before
    /// end of input.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            tokenizer: self,
            finished: false,
        }
    }

    fn skip_whitespace(&mut self) {
        let input = self.input;
        if let Ok((_, ws)) = parse_whitespace(&input[self.current_position..]) {
            self.update_position(ws);
        }
    }

    fn update_position(&mut self, text: &str) {
        for c in text.chars() {
            self.current_position += c.len_utf8();
            if c == '\n' {
                self.current_line += 1;
                self.current_column = 1;
            } else {
                self.current_column += 1;
            }
        }
    }
}

impl<'a> IntoIterator for Tokenizer<'a> {
    type Item = Token<'a>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

/// Iterator over the tokens of a [`Tokenizer`].
///
/// Yields every token before [`TokenKind::EndOfInput`]. Under
/// [`Recovery::Halt`] the first error token is the last item, since the
/// cursor would not move past it.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    tokenizer: Tokenizer<'a>,
    finished: bool,
}

impl<'a> Tokens<'a> {
    pub fn tokenizer(&self) -> &Tokenizer<'a> {
        &self.tokenizer
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.tokenizer.next_token();
        match token.kind {
            TokenKind::EndOfInput => {
                self.finished = true;
                None
            }
            TokenKind::Error(_) if self.tokenizer.config.recovery == Recovery::Halt => {
                self.finished = true;
                Some(token)
            }
            _ => Some(token),
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Collects every token of `input` before end of input, stopping at the
/// first lexical error.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn tokenize(input: &str) -> TokenizerResult<Vec<Token<'_>>> {
    let result = Tokenizer::new(input)
        .tokens()
        .map(Token::into_result)
        .collect::<TokenizerResult<Vec<_>>>();
    if let Err(error) = &result {
        tracing::error!("{}", error);
    }
    result
}

/// Dispatches on the first significant character.
fn scan_token(input: &str, first: char) -> ParserResult<'_, (TokenKind, &str)> {
    match first {
        '{' | '}' | '[' | ']' | ':' | ',' => {
            map(parse_structural, |kind| (kind, ""))(input)
        }
        '"' => map(scan_string, |text| (TokenKind::String, text))(input),
        't' => map(scan_literal("true"), |text| (TokenKind::True, text))(input),
        'f' => map(scan_literal("false"), |text| (TokenKind::False, text))(input),
        'n' => map(scan_literal("null"), |text| (TokenKind::Null, text))(input),
        '-' | '0'..='9' => map(scan_number, |text| (TokenKind::Number, text))(input),
        _ => Err(nom::Err::Failure(ScanError::new(
            input,
            ErrorKind::UnexpectedCharacter,
        ))),
    }
}

/// The consumed prefix of a failed token, or the offending character when
/// nothing could be consumed. Never empty.
fn error_text<'a>(remaining: &'a str, first: char, err: &ScanError<'a>) -> &'a str {
    let consumed = remaining.len().saturating_sub(err.input.len());
    if err.kind == ErrorKind::UnexpectedCharacter || consumed == 0 {
        &remaining[..first.len_utf8()]
    } else {
        &remaining[..consumed]
    }
}
