//! Handling of chunks left open at the end of a document.

use serde::{Deserialize, Deserializer, Serialize};

/// What to do with a chunk that is still open when the document ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedPolicy {
    /// Treat the end of the document as the closing `@` line.
    #[default]
    Close,

    /// Fail with an `UnterminatedChunk` error.
    Error,
}

impl<'de> Deserialize<'de> for UnterminatedPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "close" | "accept" => Ok(UnterminatedPolicy::Close),
            "error" | "strict" => Ok(UnterminatedPolicy::Error),
            _ => Err(serde::de::Error::custom(format!(
                "unknown unterminated policy: '{}' (expected 'close' or 'error')",
                s
            ))),
        }
    }
}

impl UnterminatedPolicy {
    /// Returns true if an open chunk at end of document is an error.
    pub fn is_strict(&self) -> bool {
        matches!(self, UnterminatedPolicy::Error)
    }
}
