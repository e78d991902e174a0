//! Parser error types

use thiserror::Error;

/// The only way parsing can fail: no positive duration could be derived.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input had no recognizable unit, or everything it named added up to zero
    #[error("could not understand the time")]
    Unrecognized { input: String },
}

impl ParseError {
    pub fn unrecognized(input: &str) -> Self {
        Self::Unrecognized {
            input: input.to_string(),
        }
    }

    /// The raw text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::Unrecognized { input } => input,
        }
    }
}
