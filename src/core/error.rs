use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum EdgarError {
    /// An error occurred during an HTTP request and persisted through every retry.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server kept answering with `429 Too Many Requests` until the attempts ran out.
    #[error("Rate limited at {url} after {attempts} attempts")]
    RateLimited {
        /// The URL that was being fetched.
        url: String,
        /// How many attempts were made.
        attempts: u32,
    },

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A gzip-framed response body could not be decompressed.
    #[error("Failed to decompress response body: {0}")]
    Decode(#[source] std::io::Error),

    /// A JSON document was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An information table could not be parsed by any strategy.
    #[error("Malformed information table: {0}")]
    Malformed(String),

    /// Caller-supplied input was rejected (e.g. a non-numeric CIK).
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// A local file (such as a registry) could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdgarError {
    /// Returns `true` for failures of the network fetch itself, as opposed to
    /// failures to interpret a document that was fetched successfully.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Status { .. } | Self::RateLimited { .. } | Self::Decode(_)
        )
    }
}
