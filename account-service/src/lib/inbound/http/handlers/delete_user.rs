use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::gate::AuthGate;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Administrative account deletion.
pub async fn delete_user<R>(
    State(state): State<AppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError>
where
    R: UserRepository,
{
    AuthGate::<R>::authorize_superuser(&user).map_err(ApiError::from)?;

    let user_id = UserId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .user_service
        .delete_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
