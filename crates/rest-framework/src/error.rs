//! # Network Errors
//!
//! The closed set of failures a [`ResourceClient`](crate::ResourceClient) can surface.
//! Every operation ends either in its success value or in exactly one of these variants;
//! the client never retries and never recovers on the caller's behalf.

/// Errors that can occur while talking to the REST backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// The endpoint could not be composed into a valid address. No call was attempted.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A connection was made but the reply was not a readable HTTP response.
    #[error("Bad response: {0}")]
    BadResponse(String),

    /// The response status was outside `200..=299`. The body is not inspected.
    #[error("HTTP error: status {0}")]
    HttpError(u16),

    /// The response body could not be parsed into the expected shape.
    #[error("Decoding failed: {0}")]
    DecodingFail(String),

    /// The request body could not be serialized. No call was attempted.
    #[error("Encoding failed: {0}")]
    EncodingFail(String),

    /// An update was requested for a resource without an id. No call was attempted.
    #[error("Missing resource id")]
    MissingId,

    /// No connection could be made, or it timed out (refused, DNS, TLS handshake).
    #[error("Transport error: {0}")]
    Transport(String),
}

impl NetworkError {
    /// The HTTP status carried by [`NetworkError::HttpError`], if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetworkError::HttpError(code) => Some(*code),
            _ => None,
        }
    }
}

