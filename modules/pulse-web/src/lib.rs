use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::set_header::SetResponseHeaderLayer;

use pulse_common::Config;
use pulse_store::Pulse;

pub mod components;
pub mod pages;
pub mod rest;
pub mod templates;

/// Shared server state. The web process serves a single session, so one
/// `Pulse` sits behind the lock and every request runs to completion in turn.
pub struct AppState {
    pub pulse: Mutex<Pulse>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            pulse: Mutex::new(Pulse::default()),
            config,
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/events", get(rest::api_events))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        );

    Router::new()
        .route("/", get(pages::home_page))
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/register", get(pages::register_page).post(pages::register_submit))
        .route("/logout", post(pages::logout))
        .route("/events", post(pages::create_event_submit))
        .route("/events/new", get(pages::add_event_page))
        .route("/events/{id}", get(pages::event_details_page))
        .route("/events/{id}/register", post(pages::register_for_event_submit))
        .route("/my-events", get(pages::my_events_page))
        .route("/registered-events", get(pages::registered_events_page))
        .route("/health", get(rest::health))
        .nest("/api", api)
        .fallback(pages::fallback)
        .with_state(state)
        // Session pages change on every action; never cache them
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
