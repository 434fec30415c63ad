//! Request extractors whose rejections are reported as [`AppError`].
//!
//! Axum's stock `Json`, `Path` and `Query` reject with plain-text bodies. These
//! wrappers route the rejection through `AppError` so every failure shares
//! the same JSON error shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Malformed input becomes `AppError::InvalidRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters. Unparseable ids become `AppError::NotFound`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string. Unparseable input becomes `AppError::InvalidRequest`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
