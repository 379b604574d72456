//! Error types exposed by the review interaction layer.

use thiserror::Error;

/// Errors surfaced while configuring the layer or talking to the review
/// endpoints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InteractionError {
    /// The server base URL was not configured.
    #[error("server base URL is required")]
    MissingBaseUrl,

    /// No review identifier was supplied.
    #[error("review identifier is required")]
    MissingReviewId,

    /// No action was supplied to the command-line driver.
    #[error("action is required (like, approve or reject)")]
    MissingAction,

    /// The supplied review identifier is not a positive integer.
    #[error("review identifier must be a positive integer: {0}")]
    InvalidReviewId(String),

    /// The supplied action name is not recognised.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// A URL could not be parsed or joined.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The request never produced a response.
    #[error("network error talking to the review server: {message}")]
    Transport {
        /// Transport-level error detail.
        message: String,
    },

    /// The server answered with a non-success HTTP status.
    #[error("review server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` field of the JSON error body, when one was sent.
        message: Option<String>,
    },

    /// The response body was not the expected JSON document.
    #[error("review server response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl InteractionError {
    /// Returns the server-supplied message carried by the error, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
