use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{catalog, GameError};

/// Roles a player can be dealt
///
/// Declaration order matches the catalog table and is the iteration order
/// of every [`RoleDistribution`](super::RoleDistribution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Werewolf,
    Villager,
    Seer,
    Witch,
    Hunter,
    Cupid,
    LittleGirl,
    Thief,
    Elder,
    Raven,
    Savior,
    DevotedServant,
}

impl Role {
    /// Get the string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Werewolf => "WEREWOLF",
            Role::Villager => "VILLAGER",
            Role::Seer => "SEER",
            Role::Witch => "WITCH",
            Role::Hunter => "HUNTER",
            Role::Cupid => "CUPID",
            Role::LittleGirl => "LITTLE_GIRL",
            Role::Thief => "THIEF",
            Role::Elder => "ELDER",
            Role::Raven => "RAVEN",
            Role::Savior => "SAVIOR",
            Role::DevotedServant => "DEVOTED_SERVANT",
        }
    }

    /// Catalog entry for this role
    pub fn definition(self) -> &'static RoleDefinition {
        catalog::definition(self)
    }

    /// Team the role plays for
    pub fn team(self) -> Team {
        self.definition().team
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = GameError;

    /// Parse a role id, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase();
        catalog::all()
            .iter()
            .map(|def| def.role)
            .find(|role| role.as_str() == key)
            .ok_or_else(|| GameError::UnknownRole(s.trim().to_string()))
    }
}

/// Coarse alignment, only consulted by the balance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Werewolves,
    Villagers,
    Neutral,
}

/// Static description of a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleDefinition {
    pub role: Role,
    /// Display name
    pub name: &'static str,
    pub team: Team,
    pub description: &'static str,
    /// Smallest table at which the role may appear at all
    pub min_players: usize,
    /// Ascending `(threshold, instances)` breakpoints
    pub scaling: &'static [(usize, usize)],
}

impl RoleDefinition {
    /// Number of copies the scaling table asks for at `player_count`
    ///
    /// Uses the breakpoint with the greatest threshold not exceeding
    /// `player_count`. Returns 0 below `min_players` or below every threshold.
    ///
    /// The dealer does not consume this; it is kept as catalog data.
    pub fn instances_for(&self, player_count: usize) -> usize {
        if player_count < self.min_players {
            return 0;
        }

        self.scaling
            .iter()
            .take_while(|(threshold, _)| *threshold <= player_count)
            .last()
            .map(|(_, instances)| *instances)
            .unwrap_or(0)
    }
}
