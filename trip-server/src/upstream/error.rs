//! Upstream trip API error types.

use std::fmt;

use crate::error::{FETCH_FAILED_MESSAGE, TripError};

/// Errors from the upstream trip API client.
#[derive(Debug)]
pub enum UpstreamError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// No offers exist for the requested route
    RouteNotFound { origin: String, destination: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Http(e) => write!(f, "HTTP error: {e}"),
            UpstreamError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            UpstreamError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            UpstreamError::RouteNotFound {
                origin,
                destination,
            } => write!(f, "no trips found from {origin} to {destination}"),
            UpstreamError::RateLimited => write!(f, "rate limited by trip API"),
            UpstreamError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Http(err)
    }
}

impl From<UpstreamError> for TripError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::RouteNotFound { .. } => TripError::NotFound(err.to_string()),
            _ => TripError::Server(FETCH_FAILED_MESSAGE.to_string()),
        }
    }
}
