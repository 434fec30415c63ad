//! Consulta service - persistence for appointments.
//!
//! The `profissional` reference is checked by the database foreign key; a
//! violation is turned into a field error on `profissional` instead of a
//! 500.

use crate::{
    db::DbPool,
    error::AppError,
    models::consulta::{Consulta, ConsultaChanges, NewConsulta, unknown_profissional},
};
use uuid::Uuid;

/// List consultas, optionally restricted to one profissional.
///
/// Both the `?profissional=` filter and the `por-profissional` action call
/// this, so they always agree.
pub async fn list_consultas(
    pool: &DbPool,
    profissional_id: Option<Uuid>,
) -> Result<Vec<Consulta>, AppError> {
    let consultas = sqlx::query_as::<_, Consulta>(
        r#"
        SELECT id, data, profissional_id, created_at, updated_at
        FROM consultas
        WHERE ($1::uuid IS NULL OR profissional_id = $1)
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(profissional_id)
    .fetch_all(pool)
    .await?;

    Ok(consultas)
}

/// Insert a new consulta.
///
/// # Errors
///
/// - `Validation`: `profissional` does not reference an existing row
pub async fn create_consulta(pool: &DbPool, new: NewConsulta) -> Result<Consulta, AppError> {
    let consulta = sqlx::query_as::<_, Consulta>(
        r#"
        INSERT INTO consultas (id, data, profissional_id)
        VALUES ($1, $2, $3)
        RETURNING id, data, profissional_id, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.data)
    .bind(new.profissional_id)
    .fetch_one(pool)
    .await
    .map_err(|err| foreign_key_error(err, new.profissional_id))?;

    tracing::info!(
        consulta_id = %consulta.id,
        profissional_id = %consulta.profissional_id,
        "Consulta created"
    );

    Ok(consulta)
}

/// Fetch one consulta.
pub async fn get_consulta(pool: &DbPool, id: Uuid) -> Result<Consulta, AppError> {
    sqlx::query_as::<_, Consulta>(
        r#"
        SELECT id, data, profissional_id, created_at, updated_at
        FROM consultas
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::ConsultaNotFound)
}

/// Apply changes to a consulta. `None` fields keep their stored value.
pub async fn update_consulta(
    pool: &DbPool,
    id: Uuid,
    changes: ConsultaChanges,
) -> Result<Consulta, AppError> {
    let result = sqlx::query_as::<_, Consulta>(
        r#"
        UPDATE consultas
        SET data = COALESCE($1, data),
            profissional_id = COALESCE($2, profissional_id),
            updated_at = NOW()
        WHERE id = $3
        RETURNING id, data, profissional_id, created_at, updated_at
        "#,
    )
    .bind(changes.data)
    .bind(changes.profissional_id)
    .bind(id)
    .fetch_optional(pool)
    .await;

    let consulta = match (result, changes.profissional_id) {
        (Err(err), Some(profissional_id)) => return Err(foreign_key_error(err, profissional_id)),
        (result, _) => result?.ok_or(AppError::ConsultaNotFound)?,
    };

    tracing::info!(consulta_id = %consulta.id, "Consulta updated");

    Ok(consulta)
}

/// Delete a consulta.
pub async fn delete_consulta(pool: &DbPool, id: Uuid) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM consultas WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::ConsultaNotFound);
    }

    tracing::info!(consulta_id = %id, "Consulta deleted");

    Ok(())
}

fn foreign_key_error(err: sqlx::Error, profissional_id: Uuid) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return unknown_profissional(profissional_id);
        }
    }
    AppError::Database(err)
}
