use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{game_error, session_not_found, ApiError};
use crate::{
    models::{AssignmentResponse, SessionResponse},
    state::AppState,
};

/// Open a new, empty session
///
/// # Returns
///
/// 201 with the new session
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let mut manager = state.game_manager.write().await;
    let session_id = manager.create_session();

    let session = manager
        .get_session(&session_id)
        .ok_or_else(session_not_found)?;

    Ok((StatusCode::CREATED, Json(SessionResponse::from_session(session))))
}

/// Show the roster, the pins and the last deal
pub async fn get_session(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut manager = state.game_manager.write().await;
    let session = manager
        .get_session_mut(&session_id)
        .ok_or_else(session_not_found)?;
    session.touch();

    Ok(Json(SessionResponse::from_session(session)))
}

/// Discard a session entirely
pub async fn delete_session(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut manager = state.game_manager.write().await;
    if !manager.remove_session(&session_id) {
        return Err(session_not_found());
    }

    tracing::info!("Deleted session {}", session_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Clear the roster, pins and last deal
pub async fn reset_session(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut manager = state.game_manager.write().await;
    let session = manager
        .get_session_mut(&session_id)
        .ok_or_else(session_not_found)?;

    session.reset();
    tracing::info!("Reset session {}", session_id);

    Ok(Json(SessionResponse::from_session(session)))
}

/// Deal roles to the current roster
///
/// # Returns
///
/// The reveal list; `complete` is false if the bag ran short
pub async fn assign_roles(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AssignmentResponse>, ApiError> {
    let mut manager = state.game_manager.write().await;
    let session = manager
        .get_session_mut(&session_id)
        .ok_or_else(session_not_found)?;

    session.assign_roles().map_err(game_error)?;

    let deal = session.last_deal().ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Deal was not recorded".to_string(),
        )
    })?;
    let response = AssignmentResponse::from_deal(deal);

    if !response.complete {
        tracing::warn!(
            "Session {}: {} player(s) left without a role",
            session_id,
            response.unassigned.len()
        );
    }

    Ok(Json(response))
}
