//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps infrastructure errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every error envelope returned to a client carries the fixed support caption,
//! and every error is logged before being translated to a client-safe message.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    dto::api::{ErrorDto, UNKNOWN_ERROR},
    error::config::ConfigError,
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur while serving a request and provides
/// automatic conversion to HTTP responses. Infrastructure variants use `#[from]`
/// for automatic conversion; `NotFound`/`BadRequest`/`InternalError` carry the
/// client-facing message chosen at the call site.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Translated for the client by [`describe_db_error`]; the raw error is
    /// logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error (validation or business-rule failure).
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure with a client-safe message chosen at the call site.
    ///
    /// Results in 500 Internal Server Error; the message is also logged.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and a JSON error
/// envelope (`{ error, caption }`). Database errors are translated to
/// operator-actionable messages by [`describe_db_error`] and logged with full
/// details. Anything unrecognized falls back to a fixed unknown-error message
/// rather than a framework default page.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {err}");

                let status = match &err {
                    DbErr::RecordNotFound(_) => StatusCode::NOT_FOUND,
                    _ if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                        StatusCode::BAD_REQUEST
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };

                (status, Json(ErrorDto::new(describe_db_error(&err)))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto::new(msg))).into_response()
            }
            err => {
                tracing::error!("{err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(UNKNOWN_ERROR)),
                )
                    .into_response()
            }
        }
    }
}

/// Translates a database error into a human-readable message for the client.
///
/// Recognized conditions map to fixed strings; anything else produces a generic
/// message embedding the raw error so an operator can triage it from the
/// response alone.
pub fn describe_db_error(err: &DbErr) -> String {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return unique_violation_message(&detail);
    }

    match err {
        DbErr::RecordNotFound(_) => "Record not found".to_string(),
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            "Authentication failed. Please provide credentials to access.".to_string()
        }
        other => format!(
            "The specific cause of the error is unknown. Database error: {other}. \
             Try logging the error output to further triage the possible cause."
        ),
    }
}

/// Builds the message for a unique-constraint violation, naming the offending
/// column when it can be identified from the driver detail string.
fn unique_violation_message(detail: &str) -> String {
    match violated_column(detail) {
        Some(column) => format!("Provided {column} not available."),
        None => "The input you provided already exists.".to_string(),
    }
}

/// Extracts the violated column name from a driver constraint message.
///
/// SQLite reports violations as `UNIQUE constraint failed: user.email`; the
/// column is the segment after the final dot. Returns `None` when the message
/// carries no identifiable column.
fn violated_column(detail: &str) -> Option<String> {
    let target = detail.rsplit(':').next()?.trim();
    let first = target.split(',').next()?.trim();
    let column = first.rsplit('.').next()?.trim();

    if column.is_empty() || column.contains(' ') {
        return None;
    }

    Some(column.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_record_not_found_to_fixed_message() {
        let err = DbErr::RecordNotFound("entry with id 7".to_string());

        assert_eq!(describe_db_error(&err), "Record not found");
    }

    #[test]
    fn embeds_unrecognized_errors_for_triage() {
        let err = DbErr::Custom("disk I/O error".to_string());

        let message = describe_db_error(&err);

        assert!(message.starts_with("The specific cause of the error is unknown."));
        assert!(message.contains("disk I/O error"));
    }

    #[test]
    fn extracts_column_from_sqlite_constraint_detail() {
        assert_eq!(
            violated_column("UNIQUE constraint failed: user.email"),
            Some("email".to_string())
        );
    }

    #[test]
    fn extracts_first_column_from_multi_column_detail() {
        assert_eq!(
            violated_column("UNIQUE constraint failed: user.email, user.username"),
            Some("email".to_string())
        );
    }

    #[test]
    fn yields_generic_message_without_identifiable_column() {
        assert_eq!(
            unique_violation_message("constraint violated"),
            "The input you provided already exists."
        );
        assert_eq!(
            unique_violation_message(""),
            "The input you provided already exists."
        );
    }

    #[test]
    fn names_column_in_unavailable_message() {
        assert_eq!(
            unique_violation_message("UNIQUE constraint failed: user.username"),
            "Provided username not available."
        );
    }
}
