//! # Tokenizer Component
//!
//! The Tokenizer component performs lexical analysis of JSON text, turning a
//! borrowed input buffer into a pull-based sequence of [`Token`](token::Token)
//! values. Token text is always a slice of the input, so producing a token
//! never allocates.
//!
//! ## Design Principles
//!
//! * **Zero-copy tokens**: [`Token::text`](token::Token::text) borrows from the
//!   input with the input's lifetime, so tokens cannot outlive their buffer.
//! * **Precise positions**: every token carries the byte offset, line and
//!   column of its first character. Only `\n` starts a new line.
//! * **Errors as values**: malformed input produces a token of kind
//!   [`TokenKind::Error`](token::TokenKind::Error). The tokenizer never panics,
//!   and recovery is left to the caller (see [`Recovery`](crate::config::Recovery)).
//!
//! ## Component Structure
//!
//! * [`token`]: Token types, the [`Tokenizer`](token::Tokenizer) cursor and its errors
//! * [`literal`]: String, number and keyword literal scanners
//! * [`symbol`]: Structural punctuation
//! * [`whitespace`]: Insignificant whitespace
//! * [`extract`]: Conversion of classified tokens into values
//!
//! ## Usage Example
//!
//! ```rust
//! use jsontok::tokenizer::token::{TokenKind, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new(r#"{"answer": 42}"#);
//! loop {
//!     let token = tokenizer.next_token();
//!     if token.kind == TokenKind::EndOfInput {
//!         break;
//!     }
//!     println!("{}", token);
//! }
//! ```

pub mod extract;
pub mod literal;
pub mod symbol;
pub mod token;
pub mod whitespace;
