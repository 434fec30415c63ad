//! Consulta HTTP handlers.
//!
//! This module implements the consulta API endpoints:
//! - GET /api/consultas - List consultas, `?profissional=<uuid>` filters
//! - POST /api/consultas - Schedule a consulta
//! - GET /api/consultas/{id} - Get one consulta
//! - PUT /api/consultas/{id} - Replace all writable fields
//! - PATCH /api/consultas/{id} - Change only the given fields
//! - DELETE /api/consultas/{id} - Delete a consulta
//! - GET /api/consultas/por-profisisonal/{profissional_id} - Consultas of one professional

use crate::{
    db::DbPool,
    error::AppError,
    extract::{ApiJson, ApiPath, ApiQuery},
    models::consulta::{ConsultaFilter, ConsultaPayload, ConsultaResponse},
    services::consulta_service,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

/// List consultas.
///
/// # Query Parameters
///
/// - `profissional` (optional) - UUID of a profissional; only its consultas
///   are returned. An empty value is ignored; if repeated, the last one wins.
///
/// # Response
///
/// - **Success (200 OK)**: JSON array of consultas, oldest first
/// - **Error (400)**: `profissional` is not a valid UUID
///
/// ```json
/// [
///   {
///     "id": "770e8400-e29b-41d4-a716-446655440002",
///     "data": "2025-12-22T14:30:00Z",
///     "profissional": "550e8400-e29b-41d4-a716-446655440000",
///     "created_at": "2025-12-20T10:00:00Z",
///     "updated_at": "2025-12-20T10:00:00Z"
///   }
/// ]
/// ```
pub async fn list_consultas(
    State(pool): State<DbPool>,
    ApiQuery(params): ApiQuery<Vec<(String, String)>>,
) -> Result<Json<Vec<ConsultaResponse>>, AppError> {
    let filter: ConsultaFilter = params.into_iter().collect();
    let profissional_id = filter.profissional_id()?;

    let consultas = consulta_service::list_consultas(&pool, profissional_id).await?;

    Ok(Json(consultas.into_iter().map(Into::into).collect()))
}

/// List the consultas of one professional, id taken from the path.
///
/// Same result set as `GET /api/consultas?profissional={profissional_id}`.
/// An unknown professional yields an empty array.
pub async fn list_consultas_por_profissional(
    State(pool): State<DbPool>,
    ApiPath(profissional_id): ApiPath<Uuid>,
) -> Result<Json<Vec<ConsultaResponse>>, AppError> {
    let consultas = consulta_service::list_consultas(&pool, Some(profissional_id)).await?;

    Ok(Json(consultas.into_iter().map(Into::into).collect()))
}

/// Schedule a consulta.
///
/// # Request Body
///
/// ```json
/// {
///   "data": "2025-12-22T14:30:00Z",
///   "profissional": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created consulta
/// - **Error (400)**: Missing fields, malformed values, or unknown profissional
pub async fn create_consulta(
    State(pool): State<DbPool>,
    ApiJson(payload): ApiJson<ConsultaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let new = payload.validate()?;

    let consulta = consulta_service::create_consulta(&pool, new).await?;

    Ok((StatusCode::CREATED, Json(ConsultaResponse::from(consulta))))
}

/// Get a consulta by ID.
pub async fn get_consulta(
    State(pool): State<DbPool>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ConsultaResponse>, AppError> {
    let consulta = consulta_service::get_consulta(&pool, id).await?;
    Ok(Json(consulta.into()))
}

/// Replace a consulta. Both `data` and `profissional` are required.
pub async fn update_consulta(
    State(pool): State<DbPool>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ConsultaPayload>,
) -> Result<Json<ConsultaResponse>, AppError> {
    let new = payload.validate()?;

    let consulta = consulta_service::update_consulta(&pool, id, new.into()).await?;

    Ok(Json(consulta.into()))
}

/// Partially update a consulta, e.g. to reschedule it.
pub async fn partial_update_consulta(
    State(pool): State<DbPool>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ConsultaPayload>,
) -> Result<Json<ConsultaResponse>, AppError> {
    let changes = payload.validate_partial()?;

    let consulta = consulta_service::update_consulta(&pool, id, changes).await?;

    Ok(Json(consulta.into()))
}

/// Delete a consulta. Returns 204 No Content.
pub async fn delete_consulta(
    State(pool): State<DbPool>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    consulta_service::delete_consulta(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
