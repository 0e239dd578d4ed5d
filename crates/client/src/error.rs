//! Client error types.

use configurator_core::auth::AuthError;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ConfiguratorError>;

/// A failed HTTP exchange.
///
/// Non-2xx responses carry their status and, when the server answered with
/// JSON, the parsed body. Transport failures use status `0` and the
/// transport error's message.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("HTTP {status}: {status_text}")]
pub struct HttpError {
    pub status: u16,
    pub status_text: String,
    pub body: Option<serde_json::Value>,
}

impl HttpError {
    /// Builds the error for a non-success response, consuming its body.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.to_ascii_lowercase().contains("json"));

        let body = if is_json {
            response
                .bytes()
                .await
                .ok()
                .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        } else {
            None
        };

        Self {
            status: status.as_u16(),
            status_text: status_text(status),
            body,
        }
    }

    /// Normalizes a transport failure (DNS, refused connection, broken body).
    pub fn transport(error: reqwest::Error) -> Self {
        Self {
            status: 0,
            status_text: error.to_string(),
            body: None,
        }
    }
}

/// Reason phrase for `status`, or a generic one for unregistered codes.
fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => format!("Unknown status {}", status.as_u16()),
    }
}

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("authentication failed: {0}")]
    Authentication(#[from] AuthError),

    #[error("no authentication context configured for bearer authentication")]
    MissingAuthenticationContext,

    #[error("no root configuration is open")]
    NoRootConfiguration,

    #[error("configuration {configuration_id} has no steps")]
    NoSteps { configuration_id: String },
}

impl ConfiguratorError {
    /// The HTTP error, if this failure came from the wire.
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(error) => Some(error),
            _ => None,
        }
    }
}
