use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_student::get_student;
use super::handlers::login::login;
use super::handlers::protected::protected;
use super::middleware::authenticate as auth_middleware;
use crate::domain::student::ports::StudentServicePort;

pub struct AppState<S: StudentServicePort> {
    pub student_service: Arc<S>,
    pub public_url: Arc<str>,
}

impl<S: StudentServicePort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            student_service: Arc::clone(&self.student_service),
            public_url: Arc::clone(&self.public_url),
        }
    }
}

pub fn create_router<S: StudentServicePort>(student_service: Arc<S>, public_url: &str) -> Router {
    let state = AppState {
        student_service,
        public_url: Arc::from(public_url),
    };

    let public_routes = Router::new()
        .route("/login", post(login::<S>))
        .route("/estudiante/:id", get(get_student::<S>));

    let protected_routes = Router::new()
        .route("/protegido", get(protected))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<S>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
