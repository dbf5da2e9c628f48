// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Config(String),
    Search(SearchError),
}

/// Specific error types for search/transport failures.
///
/// Any of these is fatal to the current search session: the app clears the
/// search bar and presents the blocking failure dialog. The variant is only
/// used for logging; the user sees a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No API key configured (neither `settings.toml` nor environment).
    MissingApiKey,

    /// The configured endpoint is not a valid URL.
    InvalidEndpoint(String),

    /// Could not reach the API host.
    Connection(String),

    /// The request timed out.
    Timeout,

    /// The API answered with a non-success HTTP status.
    Status(u16),

    /// The response body could not be decoded as the expected JSON shape.
    MalformedBody(String),

    /// Fetched image bytes could not be decoded as an image.
    BadImageData(String),

    /// Generic error with raw message.
    Other(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else if err.is_connect() {
            SearchError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            SearchError::Status(status.as_u16())
        } else if err.is_decode() {
            SearchError::MalformedBody(err.to_string())
        } else {
            SearchError::Other(err.to_string())
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::MissingApiKey => write!(f, "No API key configured"),
            SearchError::InvalidEndpoint(url) => write!(f, "Invalid endpoint: {}", url),
            SearchError::Connection(msg) => write!(f, "Connection failed: {}", msg),
            SearchError::Timeout => write!(f, "Request timed out"),
            SearchError::Status(code) => write!(f, "API returned HTTP {}", code),
            SearchError::MalformedBody(msg) => write!(f, "Malformed response: {}", msg),
            SearchError::BadImageData(msg) => write!(f, "Bad image data: {}", msg),
            SearchError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Search(e) => write!(f, "Search Error: {}", e),
        }
    }
}

impl From<SearchError> for Error {
    fn from(err: SearchError) -> Self {
        Error::Search(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad field".to_string());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn search_error_wraps_into_error() {
        let err: Error = SearchError::Timeout.into();
        assert!(matches!(err, Error::Search(SearchError::Timeout)));
    }

    #[test]
    fn search_error_display_includes_status_code() {
        let err = SearchError::Status(429);
        assert!(format!("{}", err).contains("429"));
    }

    #[test]
    fn search_error_display_is_generic_about_keys() {
        // The message must stay safe to log: no key material is ever carried.
        assert_eq!(
            format!("{}", SearchError::MissingApiKey),
            "No API key configured"
        );
    }
}
