use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::student::errors::StudentError;

pub mod get_student;
pub mod login;
pub mod protected;

/// Single 401 message for unknown email and wrong password alike.
pub const INVALID_CREDENTIALS: &str = "Email o contraseña incorrectos";
pub const INVALID_TOKEN: &str = "No se pudieron validar las credenciales";
pub const STUDENT_NOT_FOUND: &str = "Estudiante no encontrado";
pub const INTERNAL_ERROR: &str = "Error interno del servidor";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => {
                let mut response =
                    (StatusCode::UNAUTHORIZED, Json(ApiErrorBody { detail: msg })).into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                return response;
            }
        };

        (status, Json(ApiErrorBody { detail })).into_response()
    }
}

impl From<StudentError> for ApiError {
    fn from(err: StudentError) -> Self {
        match err {
            StudentError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            StudentError::InvalidToken(_) => ApiError::Unauthorized(INVALID_TOKEN.to_string()),
            StudentError::NotFound(_) => ApiError::NotFound(STUDENT_NOT_FOUND.to_string()),
            StudentError::TokenIssuance(_) | StudentError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use auth::JwtError;

    use super::*;
    use crate::student::models::StudentId;

    #[test]
    fn test_student_error_mapping() {
        assert_eq!(
            ApiError::from(StudentError::InvalidCredentials),
            ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
        );
        assert_eq!(
            ApiError::from(StudentError::InvalidToken(JwtError::TokenExpired)),
            ApiError::Unauthorized(INVALID_TOKEN.to_string())
        );
        assert_eq!(
            ApiError::from(StudentError::NotFound(StudentId(1))),
            ApiError::NotFound(STUDENT_NOT_FOUND.to_string())
        );
        assert!(matches!(
            ApiError::from(StudentError::DatabaseError("pool timed out".to_string())),
            ApiError::InternalServerError(_)
        ));
    }

    #[test]
    fn test_unauthorized_carries_bearer_challenge() {
        let response = ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response =
            ApiError::InternalServerError("password authentication failed".to_string())
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}
