//! Profissional HTTP handlers.
//!
//! This module implements the profissional API endpoints:
//! - GET /api/profissionais - List all professionals
//! - POST /api/profissionais - Create a professional
//! - GET /api/profissionais/{id} - Get one professional
//! - PUT /api/profissionais/{id} - Replace all writable fields
//! - PATCH /api/profissionais/{id} - Change only the given fields
//! - DELETE /api/profissionais/{id} - Delete a professional and its consultas

use crate::{
    db::DbPool,
    error::AppError,
    extract::{ApiJson, ApiPath},
    models::profissional::{Profissional, ProfissionalPayload},
    services::profissional_service,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

/// List all professionals.
///
/// # Response (200 OK)
///
/// JSON array of profissionais, oldest first (may be empty).
pub async fn list_profissionais(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<Profissional>>, AppError> {
    let profissionais = profissional_service::list_profissionais(&pool).await?;
    Ok(Json(profissionais))
}

/// Create a professional.
///
/// # Request Body
///
/// ```json
/// {
///   "nome_social": "Ana Souza",
///   "profissao": "Psicóloga",
///   "endereco": "Rua das Flores, 123",
///   "contato": "ana@example.com"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created profissional
/// - **Error (400)**: Missing, blank or too long fields
pub async fn create_profissional(
    State(pool): State<DbPool>,
    ApiJson(payload): ApiJson<ProfissionalPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Validate before touching the database
    let new = payload.validate()?;

    let profissional = profissional_service::create_profissional(&pool, new).await?;

    Ok((StatusCode::CREATED, Json(profissional)))
}

/// Get a professional by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the profissional
/// - **Error (404)**: Unknown or malformed id
pub async fn get_profissional(
    State(pool): State<DbPool>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Profissional>, AppError> {
    let profissional = profissional_service::get_profissional(&pool, id).await?;
    Ok(Json(profissional))
}

/// Replace a professional. All writable fields are required.
pub async fn update_profissional(
    State(pool): State<DbPool>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ProfissionalPayload>,
) -> Result<Json<Profissional>, AppError> {
    let new = payload.validate()?;

    let profissional = profissional_service::update_profissional(&pool, id, new.into()).await?;

    Ok(Json(profissional))
}

/// Partially update a professional. Omitted fields are left unchanged.
pub async fn partial_update_profissional(
    State(pool): State<DbPool>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ProfissionalPayload>,
) -> Result<Json<Profissional>, AppError> {
    let changes = payload.validate_partial()?;

    let profissional = profissional_service::update_profissional(&pool, id, changes).await?;

    Ok(Json(profissional))
}

/// Delete a professional.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: Unknown or malformed id
pub async fn delete_profissional(
    State(pool): State<DbPool>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    profissional_service::delete_profissional(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
