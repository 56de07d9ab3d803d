//! Malformed input and the two recovery policies.

use jsontok::{tokenize, ErrorKind, Recovery, TokenKind, Tokenizer, TokenizerConfig};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

fn skipping(input: &str) -> Tokenizer<'_> {
    Tokenizer::with_config(input, TokenizerConfig::default().with_recovery(Recovery::Skip))
}

#[test]
fn test_documented_error_kinds() {
    let cases = [
        ("@", ErrorKind::UnexpectedCharacter),
        ("\"unterminated", ErrorKind::UnterminatedString),
        ("\"trailing\\", ErrorKind::UnterminatedStringEscape),
        ("1.", ErrorKind::MissingFractionalDigits),
        ("1e", ErrorKind::MissingExponentDigits),
        ("-", ErrorKind::InvalidNumberFormat),
        ("tru", ErrorKind::InvalidLiteral),
        ("True", ErrorKind::UnexpectedCharacter),
        ("fals", ErrorKind::InvalidLiteral),
        ("nul", ErrorKind::InvalidLiteral),
        ("+1", ErrorKind::UnexpectedCharacter),
        (".5", ErrorKind::UnexpectedCharacter),
        ("'a'", ErrorKind::UnexpectedCharacter),
    ];

    for (input, expected) in cases {
        let token = Tokenizer::new(input).next_token();
        assert_eq!(token.kind, TokenKind::Error(expected), "input: {input:?}");
        assert!(token.is_error());
        assert!(!token.is_valid());
    }
}

#[test]
fn test_errors_are_reported_at_token_start() {
    let mut tokenizer = Tokenizer::new("[\n  1.e3]");
    tokenizer.next_token();
    let error = tokenizer.next_token();
    assert_eq!(error.error_kind(), Some(ErrorKind::MissingFractionalDigits));
    assert_eq!((error.line, error.column, error.offset), (2, 3, 4));
    assert_eq!(error.text, "1.");
}

#[test]
fn test_halt_repeats_the_same_error() {
    let mut tokenizer = Tokenizer::new("[nope]");
    assert_eq!(tokenizer.next_token().kind, TokenKind::ArrayStart);

    let error = tokenizer.next_token();
    assert_eq!(error.error_kind(), Some(ErrorKind::InvalidLiteral));
    for _ in 0..5 {
        assert_eq!(tokenizer.next_token(), error);
        assert_eq!(tokenizer.position(), 1);
    }
}

#[test]
fn test_skip_advances_every_call() {
    let mut tokenizer = skipping("@@@");
    for expected in 1..=3 {
        let token = tokenizer.next_token();
        assert_eq!(token.error_kind(), Some(ErrorKind::UnexpectedCharacter));
        assert_eq!(token.column, expected);
        assert_eq!(tokenizer.position(), expected);
    }
    assert_eq!(tokenizer.next_token().kind, TokenKind::EndOfInput);
}

#[test]
fn test_skip_collects_every_error() {
    let input = "{\"a\": tru, \"b\": 1., \"c\": @, \"d\": 2}";
    let errors: Vec<_> = skipping(input)
        .tokens()
        .filter_map(|t| t.error_kind().map(|kind| (kind, t.text)))
        .collect();
    assert_eq!(
        errors,
        vec![
            (ErrorKind::InvalidLiteral, "tru"),
            (ErrorKind::MissingFractionalDigits, "1."),
            (ErrorKind::UnexpectedCharacter, "@"),
        ]
    );
}

#[test]
fn test_skip_resynchronises_on_delimiters() {
    let kinds: Vec<_> = skipping("[1e, 2]").tokens().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::ArrayStart,
            TokenKind::Error(ErrorKind::MissingExponentDigits),
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::ArrayEnd,
        ]
    );
}

#[test]
fn test_skip_over_unterminated_string_reaches_end() {
    let mut tokenizer = skipping("[\"open\n, 1]");
    tokenizer.next_token();
    let error = tokenizer.next_token();
    assert_eq!(error.error_kind(), Some(ErrorKind::UnterminatedString));
    assert_eq!(error.text, "\"open\n, 1]");

    let end = tokenizer.next_token();
    assert_eq!(end.kind, TokenKind::EndOfInput);
    assert_eq!((end.line, end.column), (2, 5));
}

#[test]
fn test_tokenize_fails_on_first_error() {
    let error = tokenize("[1, 2, -]").unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidNumberFormat);
    assert_eq!((error.line, error.column, error.offset), (1, 8, 7));
}

#[test]
fn test_every_error_kind_has_a_message() {
    for kind in ErrorKind::iter() {
        assert!(!kind.to_string().is_empty());
    }
    assert_eq!(
        ErrorKind::MissingExponentDigits.to_string(),
        "invalid number format: missing exponent digits"
    );
}

#[test]
fn test_never_panics_on_arbitrary_bytes() {
    let inputs = [
        "\u{0}",
        "\"\\",
        "-e",
        "0e+",
        "{[}]\"",
        "\u{1F600}",
        "nulll",
        "1.5e+-3",
    ];
    for input in inputs {
        let mut tokenizer = skipping(input);
        let mut calls = 0;
        while tokenizer.next_token().kind != TokenKind::EndOfInput {
            calls += 1;
            assert!(calls <= input.len(), "no progress on {input:?}");
        }
    }
}
