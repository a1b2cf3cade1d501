use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YfError {
    /// A caller-supplied argument was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A requested symbol was absent from a spark response.
    #[error("symbol missing from response: {0}")]
    MissingSymbol(String),
}

impl YfError {
    /// Returns `true` if the error was raised by argument or configuration validation.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if the upstream API answered, but with a failure status or
    /// a body that did not have the expected shape.
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Status { .. } | Self::Data(_) | Self::MissingSymbol(_)
        )
    }
}
