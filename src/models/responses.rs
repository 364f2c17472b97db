use serde::{Deserialize, Serialize};

use crate::core::{
    Deal, GameSession, Player, PlayerId, Role, RoleDistribution, MAX_PLAYERS, MIN_PLAYERS,
};

/// Player information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub id: PlayerId,
    pub name: String,
    /// Role pinned by the operator, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_role: Option<Role>,
}

impl PlayerResponse {
    pub fn from_player(player: &Player, locked_role: Option<Role>) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            locked_role,
        }
    }
}

/// One line of the reveal list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealtRoleResponse {
    pub player_id: PlayerId,
    pub player_name: String,
    pub role: Role,
    /// Display name of the role
    pub role_name: String,
    pub description: String,
    /// Whether the role came from a pin rather than a draw
    pub locked: bool,
}

/// Result of a deal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResponse {
    /// False when some players were left without a role
    pub complete: bool,
    /// Dealt roles, in roster order
    pub assignments: Vec<DealtRoleResponse>,
    /// Names of players left without a role
    pub unassigned: Vec<String>,
}

impl AssignmentResponse {
    /// Build the reveal list from the roster and pins the deal was made with
    pub fn from_deal(deal: &Deal) -> Self {
        let roster = deal.players();
        let result = deal.result();

        let assignments = roster
            .iter()
            .filter_map(|player| {
                let role = result.get(&player.id)?;
                let def = role.definition();
                Some(DealtRoleResponse {
                    player_id: player.id,
                    player_name: player.name.clone(),
                    role,
                    role_name: def.name.to_string(),
                    description: def.description.to_string(),
                    locked: deal.is_locked(&player.id),
                })
            })
            .collect();

        Self {
            complete: result.is_complete(roster),
            assignments,
            unassigned: result
                .unassigned(roster)
                .into_iter()
                .map(|p| p.name.clone())
                .collect(),
        }
    }
}

/// Full view of a session's roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub players: Vec<PlayerResponse>,
    pub player_count: usize,
    pub min_players: usize,
    pub max_players: usize,
    /// Whether the roster is large enough to deal
    pub can_start: bool,
    /// Most recent deal, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<AssignmentResponse>,
}

impl SessionResponse {
    pub fn from_session(session: &GameSession) -> Self {
        let players = session
            .players()
            .iter()
            .map(|p| PlayerResponse::from_player(p, session.locked_roles().get(&p.id).copied()))
            .collect();

        Self {
            session_id: session.session_id.clone(),
            players,
            player_count: session.players().len(),
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            can_start: session.can_start(),
            assignment: session.last_deal().map(AssignmentResponse::from_deal),
        }
    }
}

/// Distribution preview for a head count
#[derive(Debug, Clone, Serialize)]
pub struct DistributionResponse {
    pub player_count: usize,
    pub roles: RoleDistribution,
    pub balanced: bool,
}
