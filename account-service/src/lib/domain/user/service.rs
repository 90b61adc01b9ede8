use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Password hashing is CPU-bound and runs outside any repository call, so
/// no connection is held while a digest is computed.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<R> UserServicePort for UserService<R>
where
    R: UserRepository,
{
    async fn register_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Friendly pre-checks, email first; the storage constraint is the
        // race-safe backstop for concurrent registrations
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            username: command.username,
            password_hash,
            full_name: command.full_name,
            is_active: true,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, username = %created_user.username, "User registered");

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64), UserError> {
        self.repository.list(offset, limit).await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_username) = command.username {
            user.username = new_username;
        }

        if let Some(new_full_name) = command.full_name {
            user.full_name = Some(new_full_name);
        }

        if let Some(new_password) = command.password {
            user.password_hash = self
                .password_hasher
                .hash(new_password.as_str())
                .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;
        }

        user.updated_at = Utc::now();

        let updated_user = self.repository.update(user).await?;

        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::FullName;
    use crate::domain::user::models::Password;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn find_by_username_or_email(&self, identifier: &str) -> Result<Option<User>, UserError>;
            async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64), UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn test_user(username: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            username: Username::new(username.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            full_name: None,
            is_active: true,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn create_command(username: &str, email: &str) -> CreateUserCommand {
        CreateUserCommand {
            email: EmailAddress::new(email.to_string()).unwrap(),
            username: Username::new(username.to_string()).unwrap(),
            password: Password::new("password123".to_string()).unwrap(),
            full_name: Some(FullName::new("Test User".to_string()).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_register_user_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "testuser"
                    && user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.is_active
                    && !user.is_superuser
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register_user(create_command("testuser", "test@example.com"))
            .await;
        assert!(result.is_ok());

        let user = result.unwrap();
        assert_eq!(user.username.as_str(), "testuser");
        // Plaintext never stored
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_user_duplicate_email_checked_first() {
        let mut repository = MockTestUserRepository::new();

        let existing = test_user("someoneelse", "test@example.com");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        // Username check is skipped when the email is already taken
        repository.expect_find_by_username().times(0);
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register_user(create_command("testuser", "test@example.com"))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_register_user_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        let existing = test_user("testuser", "other@example.com");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register_user(create_command("testuser", "test@example.com"))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_register_user_constraint_race_surfaces_conflict() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        // Concurrent registration won the insert race; the unique
        // constraint rejects this one
        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register_user(create_command("testuser", "test@example.com"))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repository = MockTestUserRepository::new();

        let expected_user = test_user("testuser", "test@example.com");
        let user_id = expected_user.id;

        let returned_user = expected_user.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(returned_user.clone())));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&user_id).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, user_id);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_users_passes_through_page() {
        let mut repository = MockTestUserRepository::new();

        let users = vec![
            test_user("user1", "user1@example.com"),
            test_user("user2", "user2@example.com"),
        ];
        let returned_users = users.clone();
        repository
            .expect_list()
            .with(eq(20i64), eq(20i64))
            .times(1)
            .returning(move |_, _| Ok((returned_users.clone(), 42)));

        let service = UserService::new(Arc::new(repository));

        let (items, total) = service.list_users(20, 20).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(total, 42);
    }

    #[tokio::test]
    async fn test_update_user_success() {
        let mut repository = MockTestUserRepository::new();

        let existing_user = test_user("olduser", "old@example.com");
        let user_id = existing_user.id;
        let old_updated_at = existing_user.updated_at;

        let returned_user = existing_user.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(returned_user.clone())));

        repository
            .expect_update()
            .withf(move |user| {
                user.username.as_str() == "newuser"
                    && user.email.as_str() == "new@example.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.updated_at >= old_updated_at
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = UpdateUserCommand {
            email: Some(EmailAddress::new("new@example.com".to_string()).unwrap()),
            username: Some(Username::new("newuser".to_string()).unwrap()),
            password: Some(Password::new("newpassword".to_string()).unwrap()),
            full_name: None,
        };

        let result = service.update_user(&user_id, command).await;
        assert!(result.is_ok());

        let updated_user = result.unwrap();
        assert_eq!(updated_user.username.as_str(), "newuser");
        assert_eq!(updated_user.email.as_str(), "new@example.com");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .update_user(&UserId::new(), UpdateUserCommand::default())
            .await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        repository
            .expect_delete()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));

        assert!(service.delete_user(&user_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        repository
            .expect_delete()
            .times(1)
            .returning(move |_| Err(UserError::NotFound(user_id.to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.delete_user(&user_id).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
