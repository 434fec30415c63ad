//! Profissional service - persistence for professionals.
//!
//! Every query returns full rows so handlers never issue SQL of their own.

use crate::{
    db::DbPool,
    error::AppError,
    models::profissional::{NewProfissional, Profissional, ProfissionalChanges},
};
use uuid::Uuid;

/// List every profissional, oldest first.
pub async fn list_profissionais(pool: &DbPool) -> Result<Vec<Profissional>, AppError> {
    let profissionais = sqlx::query_as::<_, Profissional>(
        r#"
        SELECT id, nome_social, profissao, endereco, contato, created_at, updated_at
        FROM profissionais
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(profissionais)
}

/// Insert a new profissional.
pub async fn create_profissional(
    pool: &DbPool,
    new: NewProfissional,
) -> Result<Profissional, AppError> {
    let profissional = sqlx::query_as::<_, Profissional>(
        r#"
        INSERT INTO profissionais (id, nome_social, profissao, endereco, contato)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, nome_social, profissao, endereco, contato, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.nome_social)
    .bind(new.profissao)
    .bind(new.endereco)
    .bind(new.contato)
    .fetch_one(pool)
    .await?;

    tracing::info!(profissional_id = %profissional.id, "Profissional created");

    Ok(profissional)
}

/// Fetch one profissional.
///
/// # Errors
///
/// - `ProfissionalNotFound`: No row with this id
pub async fn get_profissional(pool: &DbPool, id: Uuid) -> Result<Profissional, AppError> {
    sqlx::query_as::<_, Profissional>(
        r#"
        SELECT id, nome_social, profissao, endereco, contato, created_at, updated_at
        FROM profissionais
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::ProfissionalNotFound)
}

/// Apply changes to a profissional.
///
/// Fields left as `None` keep their stored value, so the same query serves
/// both full (PUT) and partial (PATCH) updates. `updated_at` is always
/// refreshed.
pub async fn update_profissional(
    pool: &DbPool,
    id: Uuid,
    changes: ProfissionalChanges,
) -> Result<Profissional, AppError> {
    let profissional = sqlx::query_as::<_, Profissional>(
        r#"
        UPDATE profissionais
        SET nome_social = COALESCE($1, nome_social),
            profissao = COALESCE($2, profissao),
            endereco = COALESCE($3, endereco),
            contato = COALESCE($4, contato),
            updated_at = NOW()
        WHERE id = $5
        RETURNING id, nome_social, profissao, endereco, contato, created_at, updated_at
        "#,
    )
    .bind(changes.nome_social)
    .bind(changes.profissao)
    .bind(changes.endereco)
    .bind(changes.contato)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::ProfissionalNotFound)?;

    tracing::info!(profissional_id = %profissional.id, "Profissional updated");

    Ok(profissional)
}

/// Delete a profissional.
///
/// Its consultas are removed by the `ON DELETE CASCADE` foreign key.
pub async fn delete_profissional(pool: &DbPool, id: Uuid) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM profissionais WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::ProfissionalNotFound);
    }

    tracing::info!(profissional_id = %id, "Profissional deleted");

    Ok(())
}
