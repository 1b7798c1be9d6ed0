use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::domain::student::models::AuthenticatedStudent;

pub const ACCESS_GRANTED: &str = "Acceso concedido";

/// Echoes the identity carried by the caller's bearer token.
pub async fn protected(
    Extension(student): Extension<AuthenticatedStudent>,
) -> Json<ProtectedResponseData> {
    Json(student.into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedResponseData {
    pub message: String,
    pub user_email: String,
    pub estudiante_id: i32,
    pub nombre: Option<String>,
}

impl From<AuthenticatedStudent> for ProtectedResponseData {
    fn from(student: AuthenticatedStudent) -> Self {
        Self {
            message: ACCESS_GRANTED.to_string(),
            user_email: student.email,
            estudiante_id: student.student_id.0,
            nombre: student.name,
        }
    }
}
