//! Error taxonomy for the preferences API client.

use thiserror::Error;

/// Everything that can go wrong while talking to the preferences API.
///
/// The client logs each of these once, at the point it is detected, before
/// handing it back to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response (network down, CORS, aborted).
    #[error("API fetch error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    ///
    /// `body` holds the response parsed as JSON, or `Value::Null` when the
    /// body was empty or not JSON.
    #[error("API request returned error response ({status})")]
    Status {
        status: u16,
        body: serde_json::Value,
    },

    /// A success response whose body did not match the expected shape.
    #[error("failed to decode API response: {0}")]
    Decode(String),

    /// The API location or anti-forgery token could not be determined.
    #[error("API configuration error: {0}")]
    Config(String),

    /// An endpoint or pagination cursor was not a valid absolute URL.
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// The HTTP status for [`ApiError::Status`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The parsed JSON error body, if the server sent one.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Status { body, .. } if !body.is_null() => Some(body),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_accessors() {
        let err = ApiError::Status {
            status: 403,
            body: json!({ "detail": "Authentication credentials were not provided." }),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(
            err.body().and_then(|b| b["detail"].as_str()),
            Some("Authentication credentials were not provided.")
        );
    }

    #[test]
    fn test_null_body_is_hidden() {
        let err = ApiError::Status {
            status: 502,
            body: serde_json::Value::Null,
        };
        assert!(err.body().is_none());
        assert!(ApiError::Transport("offline".into()).status().is_none());
    }
}
