use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::domain::auth::gate::AuthGate;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserRepository;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Administrative listing of accounts, newest first.
pub async fn list_users<R>(
    State(state): State<AppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(pagination): Query<PaginationParams>,
) -> Result<ApiSuccess<PaginatedResponse<UserResponse>>, ApiError>
where
    R: UserRepository,
{
    AuthGate::<R>::authorize_superuser(&user).map_err(ApiError::from)?;

    let page = pagination.page();
    let page_size = pagination.page_size();
    let offset = (page - 1) * page_size;

    let (users, total) = state
        .user_service
        .list_users(offset, page_size)
        .await
        .map_err(ApiError::from)?;

    let total_pages = if total == 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    };

    Ok(ApiSuccess::new(
        StatusCode::OK,
        PaginatedResponse {
            items: users.iter().map(UserResponse::from).collect(),
            total,
            page,
            page_size,
            total_pages,
        },
    ))
}

/// Page-based pagination query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    page: Option<i64>,
    page_size: Option<i64>,
}

impl PaginationParams {
    fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    fn page_size(&self) -> i64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResponse<T: Serialize + PartialEq> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults_and_bounds() {
        let params = PaginationParams {
            page: None,
            page_size: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), DEFAULT_PAGE_SIZE);

        let params = PaginationParams {
            page: Some(0),
            page_size: Some(1000),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), MAX_PAGE_SIZE);
    }
}
