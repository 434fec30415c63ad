//! HTTP routing table.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{db::DbPool, handlers};

/// Build the application router.
///
/// # Routes
///
/// | path | methods |
/// |------|---------|
/// | `/health` | GET |
/// | `/api/profissionais` | GET, POST |
/// | `/api/profissionais/{id}` | GET, PUT, PATCH, DELETE |
/// | `/api/consultas` | GET (`?profissional=`), POST |
/// | `/api/consultas/{id}` | GET, PUT, PATCH, DELETE |
/// | `/api/consultas/por-profisisonal/{profissional_id}` | GET |
///
/// `por-profisisonal` is the published spelling; `por-profissional` is
/// accepted as well.
pub fn create_router(pool: DbPool) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Profissional routes
        .route(
            "/api/profissionais",
            get(handlers::profissionais::list_profissionais)
                .post(handlers::profissionais::create_profissional),
        )
        .route(
            "/api/profissionais/{id}",
            get(handlers::profissionais::get_profissional)
                .put(handlers::profissionais::update_profissional)
                .patch(handlers::profissionais::partial_update_profissional)
                .delete(handlers::profissionais::delete_profissional),
        )
        // Consulta routes
        .route(
            "/api/consultas",
            get(handlers::consultas::list_consultas).post(handlers::consultas::create_consulta),
        )
        .route(
            "/api/consultas/{id}",
            get(handlers::consultas::get_consulta)
                .put(handlers::consultas::update_consulta)
                .patch(handlers::consultas::partial_update_consulta)
                .delete(handlers::consultas::delete_consulta),
        )
        .route(
            "/api/consultas/por-profisisonal/{profissional_id}",
            get(handlers::consultas::list_consultas_por_profissional),
        )
        .route(
            "/api/consultas/por-profissional/{profissional_id}",
            get(handlers::consultas::list_consultas_por_profissional),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
