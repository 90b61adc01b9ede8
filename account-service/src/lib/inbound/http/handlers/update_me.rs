use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::FullName;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// HTTP request body for self-update (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateMeRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

impl UpdateMeRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        // Validation happens here - errors are automatically converted via #[from]
        let email = self.email.map(EmailAddress::new).transpose()?;
        let username = self.username.map(Username::new).transpose()?;
        let password = self.password.map(Password::new).transpose()?;
        let full_name = self.full_name.map(FullName::new).transpose()?;

        Ok(UpdateUserCommand {
            email,
            username,
            password,
            full_name,
        })
    }
}

/// Partial update of the authenticated account.
pub async fn update_me<R>(
    State(state): State<AppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<UpdateMeRequest>,
) -> Result<ApiSuccess<UserResponse>, ApiError>
where
    R: UserRepository,
{
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&user.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref updated| ApiSuccess::new(StatusCode::OK, updated.into()))
}
