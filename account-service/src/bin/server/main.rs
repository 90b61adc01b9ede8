use std::sync::Arc;

use account_service::config::Config;
use account_service::config::SuperuserConfig;
use account_service::domain::auth::gate::AuthGate;
use account_service::domain::user::models::EmailAddress;
use account_service::domain::user::models::FullName;
use account_service::domain::user::models::Password;
use account_service::domain::user::models::User;
use account_service::domain::user::models::UserId;
use account_service::domain::user::models::Username;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::PostgresUserRepository;
use account_service::user::ports::UserRepository;
use anyhow::Context;
use chrono::Duration;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load().context("Failed to load configuration")?;

    tracing::info!(
        http_port = config.server.http_port,
        access_ttl_minutes = config.auth.access_token_expire_minutes,
        refresh_ttl_days = config.auth.refresh_token_expire_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));

    bootstrap_superuser(repository.as_ref(), &config.superuser).await?;

    let user_service = Arc::new(UserService::new(Arc::clone(&repository)));
    let auth_gate = Arc::new(AuthGate::new(
        Arc::clone(&repository),
        config.auth.secret.as_bytes(),
        Duration::minutes(config.auth.access_token_expire_minutes),
        Duration::days(config.auth.refresh_token_expire_days),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, auth_gate, Some(pg_pool));
    axum::serve(http_listener, http_application).await?;

    Ok(())
}

/// Create the first superuser from configuration if none exists yet.
async fn bootstrap_superuser<R>(repository: &R, config: &SuperuserConfig) -> anyhow::Result<()>
where
    R: UserRepository,
{
    if repository
        .find_by_username_or_email(&config.username)
        .await
        .map_err(|e| anyhow::anyhow!("Superuser lookup failed: {}", e))?
        .is_some()
    {
        tracing::info!(username = %config.username, "Superuser already exists");
        return Ok(());
    }

    let email = EmailAddress::new(config.email.clone())
        .map_err(|e| anyhow::anyhow!("Invalid superuser email: {}", e))?;
    let username = Username::new(config.username.clone())
        .map_err(|e| anyhow::anyhow!("Invalid superuser username: {}", e))?;
    let password = Password::new(config.password.clone())
        .map_err(|e| anyhow::anyhow!("Invalid superuser password: {}", e))?;

    let password_hash = auth::PasswordHasher::new()
        .hash(password.as_str())
        .map_err(|e| anyhow::anyhow!("Superuser password hashing failed: {}", e))?;

    let now = Utc::now();
    let superuser = User {
        id: UserId::new(),
        email,
        username,
        password_hash,
        full_name: FullName::new("Administrator".to_string()).ok(),
        is_active: true,
        is_superuser: true,
        created_at: now,
        updated_at: now,
    };

    repository
        .create(superuser)
        .await
        .map_err(|e| anyhow::anyhow!("Superuser creation failed: {}", e))?;

    tracing::info!(username = %config.username, "Superuser created");

    Ok(())
}
