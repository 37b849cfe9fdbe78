//! Error handling for the calculator.

use std::io;

/// Errors raised while loading reference data or assessing a household
#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    /// The reference table could not be retrieved
    #[error("Reference data unavailable from {source_name}: {message}")]
    DataUnavailable {
        /// URL or path of the source
        source_name: String,
        /// What went wrong
        message: String,
    },

    /// The reference table was retrieved but holds no usable row
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A caller-supplied value is out of range or unrecognized
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Region code outside the six statistical regions
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}

impl CalculatorError {
    /// Create a data-unavailable error for a named source
    pub fn unavailable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }

    /// Create an invalid-input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether the failure happened before any data was read
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. })
    }
}

impl From<calamine::Error> for CalculatorError {
    fn from(error: calamine::Error) -> Self {
        Self::ParseError(format!("Spreadsheet error: {error}"))
    }
}

impl From<io::Error> for CalculatorError {
    fn from(error: io::Error) -> Self {
        Self::unavailable("local file", error.to_string())
    }
}

/// Result type for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;
