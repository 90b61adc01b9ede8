use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserRepository;

/// Extension type carrying the verified identity of the request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware resolving the bearer token to an account via the auth gate.
///
/// A missing header and every gate failure short of an inactive account map
/// to the same 401; an inactive account surfaces as 403.
pub async fn authenticate<R>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository,
{
    let header_value = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            ApiError::Unauthorized("Could not validate credentials".to_string()).into_response()
        })?;

    let user = state
        .auth_gate
        .authenticate(header_value)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Bearer authentication failed");
            ApiError::from(e).into_response()
        })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
