//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
///
/// Field validation failures are not errors: they come back as
/// [`ValidationResult`](crate::ValidationResult) data. The variants here are
/// the failures a tool call or config load can report to the user.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Color input did not match `#RRGGBB`
    #[error("Malformed color: expected #RRGGBB, got '{0}'")]
    MalformedColor(String),

    /// A tool was invoked with nothing to work on.
    ///
    /// Carries the prompt shown to the user.
    #[error("{0}")]
    EmptyInput(&'static str),

    /// JSON text failed to parse
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Base64 text could not be decoded into UTF-8 text
    #[error("Decoding error: Invalid Base64 string.")]
    InvalidBase64,

    /// Configuration was readable but not acceptable
    #[error("Config error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::MalformedColor("#12".to_string());
        assert_eq!(
            format!("{}", err),
            "Malformed color: expected #RRGGBB, got '#12'"
        );
    }

    #[test]
    fn test_empty_input_shows_prompt_verbatim() {
        let err = FolioError::EmptyInput("Please enter some JSON to format.");
        assert_eq!(err.to_string(), "Please enter some JSON to format.");
    }

    #[test]
    fn test_invalid_json_prefix() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FolioError::InvalidJson(parse_err);
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let folio_err: FolioError = io_err.into();
        assert!(matches!(folio_err, FolioError::Io(_)));
    }
}
