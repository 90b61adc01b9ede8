use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::login::TokenPairResponse;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserRepository;

/// Exchange a refresh token for a fresh access/refresh pair.
pub async fn refresh<R>(
    State(state): State<AppState<R>>,
    Json(body): Json<RefreshRequestBody>,
) -> Result<ApiSuccess<TokenPairResponse>, ApiError>
where
    R: UserRepository,
{
    state
        .auth_gate
        .refresh(&body.refresh_token)
        .await
        .map_err(ApiError::from)
        .map(|pair| ApiSuccess::new(StatusCode::OK, pair.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshRequestBody {
    refresh_token: String,
}
