use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::InternalResult;

/// Tokenizer settings. Constant over the lifetime of a tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub recovery: Recovery,
}

/// Where the cursor goes after an error token.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Recovery {
    /// The cursor stays at the start of the error token; every further call
    /// returns the same error until the caller intervenes.
    #[default]
    Halt,
    /// The cursor moves past the error token's text, so each call makes
    /// progress and several errors can be collected in one pass.
    Skip,
}

impl TokenizerConfig {
    pub fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn from_json(s: &str) -> InternalResult<Self> {
        let config = serde_json::from_str(s)?;
        Ok(config)
    }
}
