use thiserror::Error;

use crate::domain::student::models::StudentId;

/// Top-level error for all student-related operations
#[derive(Debug, Clone, Error)]
pub enum StudentError {
    // Domain-level errors
    /// Unknown email or wrong password. Both causes share one variant so callers
    /// cannot tell them apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Student not found: {0}")]
    NotFound(StudentId),

    #[error("Invalid access token: {0}")]
    InvalidToken(#[from] auth::JwtError),

    // Infrastructure errors
    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for StudentError {
    fn from(err: sqlx::Error) -> Self {
        StudentError::DatabaseError(err.to_string())
    }
}
