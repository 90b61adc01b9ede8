use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserRepository;

/// Liveness probe with a database connectivity check.
pub async fn health<R>(State(state): State<AppState<R>>) -> ApiSuccess<HealthResponse>
where
    R: UserRepository,
{
    let database_ok = match &state.db_pool {
        Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
        // In-process store, nothing to probe
        None => true,
    };

    let status = if database_ok { "healthy" } else { "degraded" };

    ApiSuccess::new(
        StatusCode::OK,
        HealthResponse {
            status: status.to_string(),
            database: if database_ok { "ok" } else { "error" }.to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}
