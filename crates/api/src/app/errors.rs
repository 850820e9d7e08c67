use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use itemdesk_core::DomainError;

/// Where in the request a validation failure was found.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Path => "path",
            Location::Query => "query",
            Location::Body => "body",
        }
    }
}

/// Every error the API turns into a response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid {}: {message}", .location.as_str())]
    Validation { location: Location, message: String },

    #[error("no route for {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn validation(location: Location, message: impl Into<String>) -> Self {
        Self::Validation {
            location,
            message: message.into(),
        }
    }

    pub fn path(message: impl Into<String>) -> Self {
        Self::validation(Location::Path, message)
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::validation(Location::Query, message)
    }

    pub fn body(message: impl Into<String>) -> Self {
        Self::validation(Location::Body, message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Attach a location to a domain failure.
    pub fn from_domain(location: Location, err: DomainError) -> Self {
        Self::validation(location, err.detail())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation { location, message } => {
                tracing::debug!(location = location.as_str(), %message, "request rejected");
                (
                    status,
                    axum::Json(json!({
                        "error": "validation_error",
                        "location": location.as_str(),
                        "message": message,
                    })),
                )
                    .into_response()
            }
            ApiError::NotFound(path) => json_error(status, "not_found", format!("no route for {path}")),
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
