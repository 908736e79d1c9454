//! Application error type shared by every layer.
//!
//! Repositories and services return [`AppError`]; the API layer turns it into
//! an HTTP response via [`IntoResponse`]. The core never picks status codes
//! itself, the mapping lives entirely in [`AppError::status`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::infrastructure::pricing::PricingError;
use crate::utils::db_error::sqlx_error_kind;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input, rejected at the boundary.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The referenced id has no live entity.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The (title, author) uniqueness invariant would be violated.
    #[error("{message}")]
    Duplicate { message: String, details: Value },

    /// The pricing oracle was unreachable or answered with something unusable.
    #[error("{message}")]
    ExternalService { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn duplicate(message: impl Into<String>, details: Value) -> Self {
        Self::Duplicate {
            message: message.into(),
            details,
        }
    }

    pub fn external_service(message: impl Into<String>, details: Value) -> Self {
        Self::ExternalService {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable error code exposed in response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Duplicate { .. } => "duplicate",
            Self::ExternalService { .. } => "external_service_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    /// HTTP status the boundary reports for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } => StatusCode::CONFLICT,
            Self::ExternalService { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::Duplicate { message, details }
            | Self::ExternalService { message, details }
            | Self::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed with internal error");
            }
            Self::ExternalService { message, details } => {
                tracing::warn!(%message, %details, "Request failed on pricing oracle");
            }
            _ => {}
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Database error", json!({ "kind": sqlx_error_kind(&e) }))
    }
}

impl From<PricingError> for AppError {
    fn from(e: PricingError) -> Self {
        AppError::external_service(
            "Pricing service error",
            json!({ "reason": e.to_string() }),
        )
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<Value> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter()
                    .map(|err| {
                        json!({
                            "field": field,
                            "code": err.code,
                            "message": err.message,
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        fields.sort_by(|a, b| a["field"].as_str().cmp(&b["field"].as_str()));

        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::duplicate("x", json!({})).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::external_service("x", json!({})).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::internal("x", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_pricing_error_becomes_external_service() {
        let err: AppError = PricingError::Status(503).into();
        assert!(matches!(err, AppError::ExternalService { .. }));
        assert_eq!(err.code(), "external_service_error");
    }

    #[test]
    fn test_error_info_carries_message_and_details() {
        let info = AppError::not_found("Book not found", json!({ "id": "abc" })).to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Book not found");
        assert_eq!(info.details["id"], "abc");
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_sqlx_error_carries_kind_only() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.details, json!({ "kind": "pool_timeout" }));
    }
}
