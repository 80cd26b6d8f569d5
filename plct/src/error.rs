//! Error handling module for the plct CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use plc_lex::ParseError;
use thiserror::Error;

/// Main error type for the plct CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of plct commands.
#[derive(Error, Debug)]
pub enum PlctError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the input does not lex.
    ///
    /// `line` and `column` are 1-based and already resolved from the
    /// byte offset stored in `source`.
    #[error("{path}:{line}:{column}: {source}")]
    Lex {
        /// Display name of the input (`<stdin>` for standard input).
        path: String,
        /// Line of the failure.
        line: usize,
        /// Column of the failure, in characters.
        column: usize,
        /// The underlying lexer error.
        source: ParseError,
    },
}

/// Result type alias using PlctError.
pub type Result<T> = std::result::Result<T, PlctError>;

#[cfg(test)]
mod tests {
    use super::*;
    use plc_lex::LexErrorKind;
    use std::error::Error as _;

    #[test]
    fn test_config_error_display() {
        let err = PlctError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = PlctError::Validation("invalid format".to_string());
        assert_eq!(err.to_string(), "Validation error: invalid format");
    }

    #[test]
    fn test_lex_error_display() {
        let err = PlctError::Lex {
            path: "main.plc".to_string(),
            line: 2,
            column: 5,
            source: ParseError::new(LexErrorKind::LeadingZero, 12),
        };
        assert_eq!(err.to_string(), "main.plc:2:5: leading zero in number at index 12");
    }

    #[test]
    fn test_lex_error_source() {
        let err = PlctError::Lex {
            path: "<stdin>".to_string(),
            line: 1,
            column: 1,
            source: ParseError::new(LexErrorKind::UnexpectedEof, 0),
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "unexpected end of input at index 0");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let plct_err: PlctError = io_err.into();
        assert!(matches!(plct_err, PlctError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let plct_err: PlctError = json_err.into();
        assert!(matches!(plct_err, PlctError::Json(_)));
    }
}
