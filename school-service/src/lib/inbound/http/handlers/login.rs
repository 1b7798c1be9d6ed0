use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::student::models::AccessToken;
use crate::domain::student::models::LoginCommand;
use crate::domain::student::ports::StudentServicePort;
use crate::inbound::http::router::AppState;

pub async fn login<S: StudentServicePort>(
    State(state): State<AppState<S>>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<Json<LoginResponseData>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;

    state
        .student_service
        .login(body.into())
        .await
        .map_err(ApiError::from)
        .map(|token| Json(token.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    clave: String,
}

impl From<LoginRequestBody> for LoginCommand {
    fn from(body: LoginRequestBody) -> Self {
        LoginCommand::new(body.email, body.clave)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl From<AccessToken> for LoginResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type.to_string(),
        }
    }
}
