use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Session-scoped player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Represents a player on the roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier
    pub id: PlayerId,
    /// Player's display name, already trimmed
    pub name: String,
    /// Timestamp when player joined
    pub joined_at: OffsetDateTime,
}

impl Player {
    /// Create a new player with a fresh random ID
    ///
    /// Names are taken as-is; the roster validates and trims them first.
    pub fn new(name: String) -> Self {
        Self {
            id: PlayerId::new(),
            name,
            joined_at: OffsetDateTime::now_utc(),
        }
    }

    /// Case-insensitive name comparison used for duplicate detection
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new("TestPlayer".to_string());

        assert_eq!(player.name, "TestPlayer");
        assert_ne!(player.id.to_string(), Uuid::nil().to_string());
    }

    #[test]
    fn test_player_id_parses_from_path_segment() {
        let id = PlayerId::new();

        assert_eq!(id.to_string().parse::<PlayerId>().unwrap(), id);
        assert!("not-a-uuid".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_ids_unique_for_rapid_additions() {
        let ids: std::collections::HashSet<PlayerId> =
            (0..1000).map(|i| Player::new(format!("P{}", i)).id).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_has_name_ignores_case() {
        let player = Player::new("Alice".to_string());
        assert!(player.has_name("alice"));
        assert!(player.has_name("ALICE"));
        assert!(!player.has_name("Alicia"));
    }

    #[test]
    fn test_player_id_round_trips_through_string() {
        let id = PlayerId::new();
        let parsed: PlayerId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_player_id_serializes_as_plain_string() {
        let id = PlayerId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
