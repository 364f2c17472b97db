use axum::{
    http::{HeaderValue, Method, StatusCode},
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::Config, core::GameError, state::AppState};

pub mod health;
pub mod players;
pub mod roles;
pub mod sessions;

/// Error type returned by every handler
pub type ApiError = (StatusCode, String);

/// Map an engine error to its HTTP response
pub fn game_error(err: GameError) -> ApiError {
    tracing::warn!("Request rejected: {}", err);
    (err.status_code(), err.to_string())
}

pub(crate) fn session_not_found() -> ApiError {
    (StatusCode::NOT_FOUND, "Session not found".to_string())
}

/// Build the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Catalog
        .route("/api/roles", get(roles::list_roles))
        .route("/api/roles/:role_id", get(roles::get_role))
        .route(
            "/api/distribution/:player_count",
            get(roles::preview_distribution),
        )
        // Sessions
        .route("/api/sessions", post(sessions::create_session))
        .route(
            "/api/sessions/:session_id",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/api/sessions/:session_id/reset", post(sessions::reset_session))
        .route("/api/sessions/:session_id/assign", post(sessions::assign_roles))
        // Roster
        .route("/api/sessions/:session_id/players", post(players::add_player))
        .route(
            "/api/sessions/:session_id/players/:player_id",
            delete(players::remove_player),
        )
        .route(
            "/api/sessions/:session_id/players/:player_id/lock",
            put(players::lock_role).delete(players::unlock_role),
        )
        .with_state(state)
}

/// Router with tracing and CORS layers, as served by the binary
pub fn app(state: AppState, config: &Config) -> Router {
    let cors = if config.is_development() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) if origin != "*" => Some(value),
                _ => {
                    tracing::warn!("Ignoring invalid CORS origin: {:?}", origin);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    };

    router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}
