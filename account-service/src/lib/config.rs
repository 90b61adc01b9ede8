use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Minimum signing secret length for HS256, in bytes.
const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub superuser: SuperuserConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Token signing configuration.
///
/// The two lifetimes are deliberately asymmetric: access tokens live for
/// minutes, refresh tokens for days.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub access_token_expire_minutes: i64,
    pub refresh_token_expire_days: i64,
}

/// First superuser bootstrapped at startup when no superuser exists yet.
#[derive(Debug, Deserialize, Clone)]
pub struct SuperuserConfig {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// A signing secret shorter than 32 bytes is a fatal misconfiguration.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.auth.secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "auth.secret must be at least {} bytes for HS256",
                MIN_SECRET_LENGTH
            )));
        }
        if self.auth.access_token_expire_minutes <= 0 || self.auth.refresh_token_expire_days <= 0 {
            return Err(ConfigError::Message(
                "token lifetimes must be positive".to_string(),
            ));
        }

        Ok(self)
    }
}
