use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_user;
use super::handlers::health::health;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::me::get_me;
use super::handlers::refresh::refresh;
use super::handlers::register::register;
use super::handlers::update_me::update_me;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::gate::AuthGate;
use crate::domain::user::service::UserService;
use crate::user::ports::UserRepository;

pub struct AppState<R>
where
    R: UserRepository,
{
    pub user_service: Arc<UserService<R>>,
    pub auth_gate: Arc<AuthGate<R>>,
    /// Present when backed by Postgres; probed by the health endpoint
    pub db_pool: Option<PgPool>,
}

impl<R> Clone for AppState<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            auth_gate: Arc::clone(&self.auth_gate),
            db_pool: self.db_pool.clone(),
        }
    }
}

pub fn create_router<R>(
    user_service: Arc<UserService<R>>,
    auth_gate: Arc<AuthGate<R>>,
    db_pool: Option<PgPool>,
) -> Router
where
    R: UserRepository,
{
    let state = AppState {
        user_service,
        auth_gate,
        db_pool,
    };

    let public_routes = Router::new()
        .route("/api/v1/auth/register", post(register::<R>))
        .route("/api/v1/auth/login", post(login::<R>))
        .route("/api/v1/auth/refresh", post(refresh::<R>))
        .route("/health", get(health::<R>));

    let protected_routes = Router::new()
        .route("/api/v1/auth/me", get(get_me))
        .route("/api/v1/users", get(list_users::<R>))
        .route("/api/v1/users/me", put(update_me::<R>))
        .route("/api/v1/users/:user_id", get(get_user::<R>))
        .route("/api/v1/users/:user_id", delete(delete_user::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<R>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
