use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{game_error, session_not_found, ApiError};
use crate::{
    core::PlayerId,
    models::{AddPlayerRequest, LockRoleRequest, PlayerResponse, SessionResponse},
    state::AppState,
};

/// Add a player to the roster
///
/// # Returns
///
/// 201 with the new player
pub async fn add_player(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<AddPlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let mut manager = state.game_manager.write().await;
    let session = manager
        .get_session_mut(&session_id)
        .ok_or_else(session_not_found)?;

    let player = session.add_player(&request.name).map_err(game_error)?;

    Ok((
        StatusCode::CREATED,
        Json(PlayerResponse::from_player(&player, None)),
    ))
}

/// Remove a player (and their pin) from the roster
///
/// Removing an unknown player succeeds.
pub async fn remove_player(
    Path((session_id, player_id)): Path<(String, PlayerId)>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut manager = state.game_manager.write().await;
    let session = manager
        .get_session_mut(&session_id)
        .ok_or_else(session_not_found)?;

    session.remove_player(&player_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Pin a role for a player before the deal
pub async fn lock_role(
    Path((session_id, player_id)): Path<(String, PlayerId)>,
    State(state): State<AppState>,
    Json(request): Json<LockRoleRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let role = request.role().map_err(game_error)?;

    let mut manager = state.game_manager.write().await;
    let session = manager
        .get_session_mut(&session_id)
        .ok_or_else(session_not_found)?;

    if !session.lock_role(&player_id, role) {
        return Err((StatusCode::NOT_FOUND, "Player not found".to_string()));
    }

    tracing::debug!("Session {}: pinned {} for {}", session_id, role, player_id);
    Ok(Json(SessionResponse::from_session(session)))
}

/// Remove a player's pin
pub async fn unlock_role(
    Path((session_id, player_id)): Path<(String, PlayerId)>,
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut manager = state.game_manager.write().await;
    let session = manager
        .get_session_mut(&session_id)
        .ok_or_else(session_not_found)?;

    session.unlock_role(&player_id);
    Ok(Json(SessionResponse::from_session(session)))
}
