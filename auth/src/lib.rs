//! Authentication utilities library
//!
//! - Password hashing and fail-closed verification (Argon2id)
//! - Signed, time-limited access tokens (JWT, HS256)
//! - An `Authenticator` tying both to one signing secret
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("my_password", "not-a-hash"));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new().with_subject("a@b.com").with_extra("estudiante_id", 7);
//! let token = handler.issue(claims, Duration::minutes(30)).unwrap();
//! let decoded = handler.validate(&token).unwrap();
//! assert_eq!(decoded.extra_i64("estudiante_id"), Some(7));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
