use axum::http::StatusCode;
use thiserror::Error;

use super::{MAX_PLAYERS, MIN_PLAYERS};

/// Everything that can go wrong while building a roster or dealing roles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Distribution requested for a head count outside the supported range
    #[error("Player count must be between {} and {} (got {0})", MIN_PLAYERS, MAX_PLAYERS)]
    InvalidPlayerCount(usize),

    /// Roster is too small to start dealing
    #[error("At least {} players are needed to start a game (have {0})", MIN_PLAYERS)]
    TooFewPlayers(usize),

    /// Another player already uses this name (case-insensitive)
    #[error("Player name '{0}' is already taken")]
    DuplicateName(String),

    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Roster is full ({} players maximum)", MAX_PLAYERS)]
    RosterFull,

    /// Role id is not part of the catalog
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Computed distribution failed the balance re-check
    #[error("Role distribution is not balanced")]
    Unbalanced,

    /// The special-role priority list ran out before every slot was filled
    #[error("Cannot build a distribution for {player_count} players: {unfilled} slot(s) left unfilled")]
    DistributionIncomplete { player_count: usize, unfilled: usize },
}

impl GameError {
    /// HTTP status the API answers with for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GameError::DuplicateName(_) => StatusCode::CONFLICT,
            GameError::UnknownRole(_) => StatusCode::NOT_FOUND,
            GameError::Unbalanced | GameError::DistributionIncomplete { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            GameError::InvalidPlayerCount(_)
            | GameError::TooFewPlayers(_)
            | GameError::EmptyName
            | GameError::RosterFull => StatusCode::BAD_REQUEST,
        }
    }
}
