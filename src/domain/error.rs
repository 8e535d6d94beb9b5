use std::io;

use thiserror::Error;

/// Library-wide error type for siteconf operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Server URL could not be parsed as a URL.
    #[error("Malformed server URL '{value}': {source}")]
    MalformedServerUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Server URL parsed but carries no host to derive an image origin from.
    #[error("Server URL '{0}' has no host")]
    ServerUrlMissingHost(String),

    /// Explicitly requested redirects file does not exist.
    #[error("Redirects file not found: {0}")]
    RedirectsFileNotFound(String),

    /// Redirects file exists but is not valid TOML of the expected shape.
    #[error("Malformed redirects file {path}: {source}")]
    RedirectsParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// JSON serialization of the exported configuration failed.
    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
