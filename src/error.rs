//! Error taxonomy for the client layer.
//!
//! Non-2xx responses are classified into a small set of variants so callers
//! can branch on the failure class without parsing response bodies
//! themselves. The raw body is kept on every HTTP variant for diagnostics;
//! nothing is swallowed and no fallback values are substituted.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the API facades.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend rejected the request body (HTTP 400 / 422).
    #[error("backend rejected request: {body}")]
    Validation { body: String },

    /// Missing or invalid credentials or token (HTTP 401 / 403).
    #[error("authentication failed: {body}")]
    Authentication { body: String },

    /// Referenced id unknown to the backend (HTTP 404).
    #[error("resource not found: {body}")]
    NotFound { body: String },

    /// Duplicate unique field on registration (HTTP 409).
    #[error("conflict: {body}")]
    Conflict { body: String },

    /// Any other non-2xx response, with status and raw body intact.
    #[error("request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    /// Network-level failure below the HTTP layer (connect, timeout, TLS).
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classifies a non-2xx response into the taxonomy.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Self::Validation { body }
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Authentication { body },
            StatusCode::NOT_FOUND => Self::NotFound { body },
            StatusCode::CONFLICT => Self::Conflict { body },
            _ => Self::Request {
                status: status.as_u16(),
                body,
            },
        }
    }
}
