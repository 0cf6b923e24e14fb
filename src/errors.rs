//! Centralized error handling.
//!
//! Every failure in the system is expressed as an [`AppError`] kind and
//! travels up the call chain as a value. The single place where kinds
//! become HTTP responses is the [`IntoResponse`] impl below; any variant
//! not given an explicit client-facing detail falls back to the sanitized
//! internal-error message so raw causes never reach a client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::{
    DETALLE_CONSTRAINT, DETALLE_EMAIL_DUPLICADO, DETALLE_INESPERADO, ERROR_ARGUMENTO,
    ERROR_INTEGRIDAD, ERROR_INTERNO, ERROR_VALIDACION,
};

/// Application error kinds
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more declarative input rules violated; one message per rule
    #[error("Error de validación")]
    Validation(Vec<String>),

    /// The referenced id has no corresponding user
    #[error("No existe un usuario con el ID {0}")]
    NotFound(i64),

    /// Malformed input outside the declared validation rules
    #[error("{0}")]
    BadArgument(String),

    /// The store's email uniqueness constraint was violated
    #[error("El email ya está registrado")]
    DuplicateEmail,

    /// Some other integrity constraint was violated
    #[error("Violación de constraint de integridad")]
    Integrity,

    /// Database failure not attributable to a client mistake
    #[error("Error de base de datos")]
    Database(#[from] sea_orm::DbErr),

    /// Unexpected internal fault
    #[error("{0}")]
    Internal(String),
}

/// Uniform error response body, shared by every failure status
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Moment the error body was built
    pub timestamp: DateTime<Utc>,
    /// HTTP status code, duplicated in the body
    pub status: u16,
    /// Short human-readable error category
    pub error: String,
    /// One or more human-readable messages
    pub detalles: Vec<String>,
}

impl ErrorBody {
    /// Build a body with multiple detail messages
    pub fn of(status: u16, error: impl Into<String>, detalles: Vec<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status,
            error: error.into(),
            detalles,
        }
    }

    /// Build a body with a single detail message
    pub fn simple(status: u16, error: impl Into<String>, detalle: impl Into<String>) -> Self {
        Self::of(status, error, vec![detalle.into()])
    }
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) | AppError::BadArgument(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::DuplicateEmail | AppError::Integrity => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error category shown in the response body
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => ERROR_VALIDACION,
            AppError::NotFound(_) | AppError::BadArgument(_) => ERROR_ARGUMENTO,
            AppError::DuplicateEmail | AppError::Integrity => ERROR_INTEGRIDAD,
            AppError::Database(_) | AppError::Internal(_) => ERROR_INTERNO,
        }
    }

    /// Get the user-facing detail messages (hides internal causes)
    pub fn detalles(&self) -> Vec<String> {
        match self {
            AppError::Validation(detalles) => detalles.clone(),
            AppError::NotFound(_) | AppError::BadArgument(_) => vec![self.to_string()],
            AppError::DuplicateEmail => vec![DETALLE_EMAIL_DUPLICADO.to_string()],
            AppError::Integrity => vec![DETALLE_CONSTRAINT.to_string()],
            AppError::Database(_) | AppError::Internal(_) => vec![DETALLE_INESPERADO.to_string()],
        }
    }

    /// Convenience constructor for internal faults
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // The raw cause of unclassified failures is logged here and
        // replaced by a fixed sentence in the body.
        if status.is_server_error() {
            tracing::error!(error = ?self, "unclassified internal error");
        }

        let body = ErrorBody::of(status.as_u16(), self.kind(), self.detalles());
        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request_with_all_messages() {
        let err = AppError::Validation(vec![
            "nombre: El nombre no puede estar vacío".to_string(),
            "password: La contraseña debe tener al menos 6 caracteres".to_string(),
        ]);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), ERROR_VALIDACION);
        assert_eq!(err.detalles().len(), 2);
    }

    #[test]
    fn not_found_carries_the_missing_id() {
        let err = AppError::NotFound(999);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), ERROR_ARGUMENTO);
        assert_eq!(err.detalles(), vec!["No existe un usuario con el ID 999"]);
    }

    #[test]
    fn duplicate_email_maps_to_conflict() {
        let err = AppError::DuplicateEmail;
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.kind(), ERROR_INTEGRIDAD);
        assert_eq!(err.detalles(), vec![DETALLE_EMAIL_DUPLICADO]);
    }

    #[test]
    fn database_errors_are_sanitized() {
        let err = AppError::Database(sea_orm::DbErr::Custom("connection reset".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), ERROR_INTERNO);
        // The raw cause must never appear in the body
        assert_eq!(err.detalles(), vec![DETALLE_INESPERADO]);
    }

    #[test]
    fn into_response_uses_the_mapped_status() {
        let response = AppError::DuplicateEmail.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::BadArgument("ID inválido: abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
