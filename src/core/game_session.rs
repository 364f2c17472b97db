use rand::{thread_rng, Rng};
use time::OffsetDateTime;

use super::{
    assign_with_rng, compute_distribution, is_balanced, AssignmentResult, GameError,
    LockedRoles, Player, PlayerId, Role, MAX_PLAYERS, MIN_PLAYERS,
};

/// A finished deal together with the roster and pins it was dealt from
///
/// Later roster edits do not touch the snapshot, so the reveal list stays
/// what the table was actually dealt.
#[derive(Debug, Clone)]
pub struct Deal {
    players: Vec<Player>,
    locked_roles: LockedRoles,
    result: AssignmentResult,
}

impl Deal {
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn locked_roles(&self) -> &LockedRoles {
        &self.locked_roles
    }

    pub fn result(&self) -> &AssignmentResult {
        &self.result
    }

    pub fn is_locked(&self, player_id: &PlayerId) -> bool {
        self.locked_roles.contains_key(player_id)
    }
}

/// One operator's table: the roster, the pinned roles and the last deal
#[derive(Debug)]
pub struct GameSession {
    /// Unique identifier for this session
    pub session_id: String,
    /// Players in the order they were added
    players: Vec<Player>,
    /// Roles pinned by the operator
    locked_roles: LockedRoles,
    /// Most recent successful deal
    last_deal: Option<Deal>,
    /// When the session was created
    pub created_at: OffsetDateTime,
    /// Last time the session was read or changed
    pub last_activity: OffsetDateTime,
}

impl GameSession {
    /// Create an empty session
    ///
    /// # Arguments
    ///
    /// * `session_id` - Unique identifier for this session
    pub fn new(session_id: String) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            session_id,
            players: Vec::new(),
            locked_roles: LockedRoles::new(),
            last_deal: None,
            created_at: now,
            last_activity: now,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *player_id)
    }

    pub fn locked_roles(&self) -> &LockedRoles {
        &self.locked_roles
    }

    pub fn last_deal(&self) -> Option<&Deal> {
        self.last_deal.as_ref()
    }

    /// Mark the session as used just now
    pub fn touch(&mut self) {
        self.last_activity = OffsetDateTime::now_utc();
    }

    /// Add a new player to the roster
    ///
    /// The name is trimmed before it is checked and stored.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`GameError::EmptyName`] if nothing is left after trimming
    /// - [`GameError::DuplicateName`] if the name is taken, ignoring case
    /// - [`GameError::RosterFull`] once 20 players are in
    pub fn add_player(&mut self, name: &str) -> Result<Player, GameError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(GameError::EmptyName);
        }

        if self.players.iter().any(|p| p.has_name(name)) {
            return Err(GameError::DuplicateName(name.to_string()));
        }

        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::RosterFull);
        }

        let player = Player::new(name.to_string());
        tracing::debug!(
            "Session {}: added player {} ({})",
            self.session_id,
            player.name,
            player.id
        );
        self.players.push(player.clone());
        self.touch();
        Ok(player)
    }

    /// Remove a player and any role pinned for them
    ///
    /// Unknown IDs are ignored.
    pub fn remove_player(&mut self, player_id: &PlayerId) {
        self.players.retain(|p| p.id != *player_id);
        self.locked_roles.remove(player_id);
        self.touch();
    }

    /// Pin a role for a player before dealing
    ///
    /// Does nothing if the player is not on the roster.
    ///
    /// # Returns
    ///
    /// Whether the pin was recorded
    pub fn lock_role(&mut self, player_id: &PlayerId, role: Role) -> bool {
        self.touch();
        if self.player(player_id).is_none() {
            return false;
        }

        self.locked_roles.insert(*player_id, role);
        true
    }

    /// Drop a player's pinned role, if any
    pub fn unlock_role(&mut self, player_id: &PlayerId) {
        self.locked_roles.remove(player_id);
        self.touch();
    }

    /// True if the minimum roster size is met
    pub fn can_start(&self) -> bool {
        self.players.len() >= MIN_PLAYERS
    }

    /// Compute, validate and deal roles for the current roster
    ///
    /// # Errors
    ///
    /// - [`GameError::TooFewPlayers`] below 8 players
    /// - [`GameError::DistributionIncomplete`] if the table cannot be filled
    /// - [`GameError::Unbalanced`] if the distribution fails the balance check
    pub fn assign_roles(&mut self) -> Result<&AssignmentResult, GameError> {
        self.assign_roles_with_rng(&mut thread_rng())
    }

    /// Same as [`assign_roles`](Self::assign_roles) with a caller-supplied RNG
    pub fn assign_roles_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&AssignmentResult, GameError> {
        self.touch();

        if !self.can_start() {
            return Err(GameError::TooFewPlayers(self.players.len()));
        }

        let distribution = compute_distribution(self.players.len())?;
        if !is_balanced(&distribution) {
            tracing::warn!(
                "Session {}: distribution for {} players is unbalanced",
                self.session_id,
                self.players.len()
            );
            return Err(GameError::Unbalanced);
        }

        let result = assign_with_rng(&self.players, &self.locked_roles, &distribution, rng)?;
        tracing::info!(
            "Session {}: dealt {} role(s) to {} player(s) ({} pinned)",
            self.session_id,
            result.len(),
            self.players.len(),
            self.locked_roles.len()
        );

        let deal = self.last_deal.insert(Deal {
            players: self.players.clone(),
            locked_roles: self.locked_roles.clone(),
            result,
        });
        Ok(&deal.result)
    }

    /// Clear the roster, the pins and the last deal
    pub fn reset(&mut self) {
        self.players.clear();
        self.locked_roles.clear();
        self.last_deal = None;
        self.touch();
    }
}
