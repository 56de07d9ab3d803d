//! # jsontok
//!
//! A zero-copy JSON tokenizer. Token text borrows from the input, positions
//! are tracked per token, and malformed input is reported as error tokens
//! rather than panics.
//!
//! ```rust
//! use jsontok::{extract_number, TokenKind, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new("[1.5]");
//! assert_eq!(tokenizer.next_token().kind, TokenKind::ArrayStart);
//! let number = tokenizer.next_token();
//! assert_eq!(extract_number(&number), Some(1.5));
//! ```

pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use config::{Recovery, TokenizerConfig};
pub use error::*;
pub use tokenizer::extract::*;
pub use tokenizer::token::{
    tokenize, ErrorKind, Token, TokenKind, Tokenizer, TokenizerError, TokenizerResult, Tokens,
};
