//! Authentication primitives library
//!
//! Provides the cryptographic building blocks for the account service:
//! - Password hashing and verification (Argon2id, PHC string digests)
//! - Signed bearer token issuance and verification with typed claims
//!
//! The service crate owns the authorization rules (account lookup, active and
//! superuser checks); this crate stays free of I/O so every operation here is
//! pure computation and safe to run fully in parallel.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &digest).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{TokenCodec, TokenType};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec
//!     .issue("user123", TokenType::Access, Duration::minutes(30))
//!     .unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.token_type, TokenType::Access);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenClaims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenType;
