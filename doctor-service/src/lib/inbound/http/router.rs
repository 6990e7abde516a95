use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
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

use super::handlers::get_current_doctor::get_current_doctor;
use super::handlers::list_doctors::list_doctors;
use super::handlers::login::login;
use super::handlers::register_doctor::register_doctor;
use super::middleware::authenticate as auth_middleware;
use crate::domain::doctor::ports::DoctorServicePort;

#[derive(Clone)]
pub struct AppState {
    pub doctor_service: Arc<dyn DoctorServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    doctor_service: Arc<dyn DoctorServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        doctor_service,
        authenticator,
    };

    // Registration and login are the entry points that produce tokens, so
    // they stay unguarded
    let public_routes = Router::new()
        .route("/add/doctor", post(register_doctor))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/doctors", get(list_doctors))
        .route("/user", get(get_current_doctor))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
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
