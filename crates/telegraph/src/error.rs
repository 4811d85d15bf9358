// ABOUTME: Error type for the Telegraph client covering conversion, transport and API failures.
// ABOUTME: Provides the crate-wide Result alias and boolean helpers for matching error kinds.

use std::io;

use thiserror::Error;

/// Errors returned by the content converter and the API client.
#[derive(Debug, Error)]
pub enum Error {
    /// The content source was not text, bytes or a readable stream.
    #[error("invalid data type")]
    InvalidInputType,

    /// The markup could not be read or decoded.
    #[error(transparent)]
    Parse(io::Error),

    /// A method that needs input was called with none.
    #[error("no input data")]
    NoInputData,

    /// A secured endpoint was called without an access token.
    #[error("empty access_token")]
    EmptyAccessToken,

    /// The API answered with `ok: false`.
    #[error("{0}")]
    Api(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    Json(#[from] serde_json::Error),

    /// A local file could not be read for upload.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates an Api error from the message returned by the server.
    pub fn api(msg: impl Into<String>) -> Self {
        Error::Api(msg.into())
    }

    /// Returns true if this is an InvalidInputType error.
    pub fn is_invalid_input_type(&self) -> bool {
        matches!(self, Error::InvalidInputType)
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Returns true if this is an Api error.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    /// Returns the server message for Api errors.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_messages() {
        assert_eq!(Error::InvalidInputType.to_string(), "invalid data type");
        assert_eq!(Error::EmptyAccessToken.to_string(), "empty access_token");
        assert_eq!(Error::api("PAGE_NOT_FOUND").to_string(), "PAGE_NOT_FOUND");
    }

    #[test]
    fn parse_error_is_transparent() {
        let inner = io::Error::new(
            io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        );
        let err = Error::Parse(inner);
        assert!(err.is_parse());
        assert_eq!(err.to_string(), "stream did not contain valid UTF-8");
    }

    #[test]
    fn api_message_only_for_api_errors() {
        assert_eq!(Error::api("ACCESS_TOKEN_INVALID").api_message(), Some("ACCESS_TOKEN_INVALID"));
        assert_eq!(Error::NoInputData.api_message(), None);
    }
}
