//! Error type for color parsing.

use std::fmt;

/// Errors produced by the palette engine.
///
/// Every engine operation is total over well-formed input, so the only
/// failure is a hex string that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not `#RGB` or `#RRGGBB` hexadecimal (leading `#` optional).
    InvalidFormat {
        /// The rejected input, as given by the caller.
        input: String,
    },
}

impl ColorError {
    /// Creates an `InvalidFormat` error for the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { input } => write!(
                f,
                "Invalid hex color format '{input}'. Expected #RRGGBB or #RGB"
            ),
        }
    }
}

impl std::error::Error for ColorError {}
