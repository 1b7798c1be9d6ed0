use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::student::ports::StudentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::INVALID_TOKEN;
use crate::inbound::http::router::AppState;

const NOT_AUTHENTICATED: &str = "No autenticado";

/// Middleware that validates bearer tokens and adds the student identity to
/// request extensions.
pub async fn authenticate<S: StudentServicePort>(
    State(state): State<AppState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let student = state
        .student_service
        .authenticate_token(token)
        .map_err(|e| {
            tracing::warn!(error = %e, "JWT validation failed");
            ApiError::from(e)
        })?;

    req.extensions_mut().insert(student);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized(NOT_AUTHENTICATED.to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized(INVALID_TOKEN.to_string()))?;

    match auth_str.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(token.trim())
        }
        _ => Err(ApiError::Unauthorized(NOT_AUTHENTICATED.to_string())),
    }
}
