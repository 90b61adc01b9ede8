use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use account_service::domain::auth::gate::AuthGate;
use account_service::domain::user::models::User;
use account_service::domain::user::models::UserId;
use account_service::domain::user::models::Username;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::user::errors::UserError;
use account_service::user::ports::UserRepository;
use async_trait::async_trait;
use chrono::Duration;
use serde_json::json;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing-at-least-32-bytes";

/// In-memory account directory mirroring the Postgres repository contract,
/// including uniqueness enforcement with email checked first.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.email.as_str() == user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        if users
            .values()
            .any(|u| u.username.as_str() == user.username.as_str())
        {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_username_or_email(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username.as_str() == identifier || u.email.as_str() == identifier)
            .cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64), UserError> {
        let users = self.users.lock().unwrap();
        let total = users.len() as i64;

        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let page = all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();

        Ok((page, total))
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.id != user.id && u.email.as_str() == user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.username.as_str() == user.username.as_str())
        {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if !users.contains_key(&user.id.0) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        users
            .remove(&id.0)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

impl InMemoryUserRepository {
    /// Flip a stored account's active flag directly, bypassing the API.
    pub fn set_active(&self, username: &str, is_active: bool) {
        let mut users = self.users.lock().unwrap();
        let user = users
            .values_mut()
            .find(|u| u.username.as_str() == username)
            .expect("user not found");
        user.is_active = is_active;
    }

    /// Grant a stored account superuser privilege directly.
    pub fn promote_to_superuser(&self, username: &str) {
        let mut users = self.users.lock().unwrap();
        let user = users
            .values_mut()
            .find(|u| u.username.as_str() == username)
            .expect("user not found");
        user.is_superuser = true;
    }
}

/// Test application that spawns a real server on a random port.
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let repository = Arc::new(InMemoryUserRepository::default());

        let user_service = Arc::new(UserService::new(Arc::clone(&repository)));
        let auth_gate = Arc::new(AuthGate::new(
            Arc::clone(&repository),
            TEST_SECRET,
            Duration::minutes(30),
            Duration::days(7),
        ));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(user_service, auth_gate, None);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register an account through the API.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/v1/auth/register")
            .json(&json!({
                "email": email,
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute register request")
    }

    /// Log in through the API and return the access/refresh token pair.
    pub async fn login(&self, identifier: &str, password: &str) -> (String, String) {
        let response = self
            .post("/api/v1/auth/login")
            .form(&[("username", identifier), ("password", password)])
            .send()
            .await
            .expect("Failed to execute login request");
        assert!(response.status().is_success(), "login failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        (
            body["data"]["access_token"].as_str().unwrap().to_string(),
            body["data"]["refresh_token"].as_str().unwrap().to_string(),
        )
    }
}
