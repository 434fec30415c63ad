//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use std::{borrow::Cow, collections::BTreeMap};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

/// Field-level validation messages, keyed by field name.
///
/// Serialized as `{"field": ["message", ...]}`. A `BTreeMap` keeps the
/// output order stable.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Cow<'static, str>, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field error, the common case for lookups that fail.
    pub fn single(field: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<Cow<'static, str>>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Unwraps a field sent as `null`-or-value. `None` means the field was
    /// absent; an explicit `null` is recorded as an error.
    pub fn non_null<T>(&mut self, field: &'static str, value: Option<Option<T>>) -> Option<T> {
        match value {
            Some(Some(value)) => Some(value),
            Some(None) => {
                self.add(field, "This field may not be null.");
                None
            }
            None => None,
        }
    }

    /// Records a missing field unless it already carries an error.
    pub fn require<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() && !self.contains(field) {
            self.add(field, "This field is required.");
        }
        value
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

/// Flattens `validator` output, keeping each error's message (or its code
/// when no message was set).
impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Self::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .clone()
                    .unwrap_or_else(|| err.code.clone())
                    .into_owned();
                fields.add(field.to_string(), message);
            }
        }
        fields
    }
}

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error code.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Resource Errors**: Requested profissional or consulta not found
/// - **Validation Errors**: Field-level problems with a request payload
/// - **Request Errors**: Body that is not valid JSON for the endpoint
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested profissional does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Profissional not found")]
    ProfissionalNotFound,

    /// Requested consulta does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Consulta not found")]
    ConsultaNotFound,

    /// Path parameter is not a valid identifier.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Not found")]
    NotFound,

    /// One or more fields failed validation.
    ///
    /// Returns HTTP 400 Bad Request with the per-field messages.
    #[error("Invalid input")]
    Validation(FieldErrors),

    /// Request body or query string could not be parsed.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request")]
    InvalidRequest(String),

    /// Request body was sent without a JSON content type.
    ///
    /// Returns HTTP 415 Unsupported Media Type.
    #[error("Unsupported media type")]
    UnsupportedMediaType(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::UnsupportedMediaType(rejection.body_text())
            }
            _ => AppError::InvalidRequest(rejection.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// A path id that does not parse as a UUID can never name a stored row,
/// so it is reported the same way as a missing one.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "Unparseable path parameter");
        AppError::NotFound
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "validation_error",
///     "message": "Invalid input",
///     "fields": { "nome_social": ["This field may not be blank."] }
///   }
/// }
/// ```
///
/// `fields` is only present for validation errors.
///
/// # Status Code Mapping
///
/// - `ProfissionalNotFound` / `ConsultaNotFound` / `NotFound` → 404 Not Found
/// - `Validation` / `InvalidRequest` → 400 Bad Request
/// - `UnsupportedMediaType` → 415 Unsupported Media Type
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let display = self.to_string();
        let (status, code, message, fields) = match self {
            AppError::ProfissionalNotFound | AppError::ConsultaNotFound | AppError::NotFound => {
                (StatusCode::NOT_FOUND, "not_found", display, None)
            }
            AppError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                display,
                Some(fields),
            ),
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg, None)
            }
            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media_type",
                msg,
                None,
            ),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(fields) = fields {
            error["fields"] = json!(fields);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
