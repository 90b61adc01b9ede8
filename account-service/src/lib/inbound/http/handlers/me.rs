use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::inbound::http::middleware::CurrentUser;

/// Return the public view of the authenticated account.
pub async fn get_me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}
