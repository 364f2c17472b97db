use serde::Serialize;
use std::collections::BTreeMap;

use super::{GameError, Role, Team, MAX_PLAYERS, MIN_PLAYERS};

/// Special roles used to fill the table once the mandatory roles are in,
/// in the order they are tried.
pub const SPECIAL_ROLE_PRIORITY: [Role; 5] = [
    Role::Hunter,
    Role::Cupid,
    Role::LittleGirl,
    Role::Elder,
    Role::Raven,
];

/// Required number of copies of each role for one game
///
/// Only roles with a positive count are stored. Iteration follows catalog
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleDistribution {
    counts: BTreeMap<Role, usize>,
}

impl RoleDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for `role`, dropping the entry when `count` is zero
    pub fn set(&mut self, role: Role, count: usize) {
        if count == 0 {
            self.counts.remove(&role);
        } else {
            self.counts.insert(role, count);
        }
    }

    pub fn count(&self, role: Role) -> usize {
        self.counts.get(&role).copied().unwrap_or(0)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.counts.contains_key(&role)
    }

    /// Sum of all instance counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, usize)> + '_ {
        self.counts.iter().map(|(role, count)| (*role, *count))
    }

    /// Expand into one entry per role instance
    pub fn to_bag(&self) -> Vec<Role> {
        self.iter()
            .flat_map(|(role, count)| std::iter::repeat(role).take(count))
            .collect()
    }
}

impl FromIterator<(Role, usize)> for RoleDistribution {
    fn from_iter<I: IntoIterator<Item = (Role, usize)>>(iter: I) -> Self {
        let mut distribution = RoleDistribution::new();
        for (role, count) in iter {
            distribution.set(role, count);
        }
        distribution
    }
}

/// Werewolves expected at a table of `player_count`
///
/// - 8-11 players: 2
/// - 12-15 players: 3
/// - 16+ players: 4
pub fn werewolf_tier(player_count: usize) -> usize {
    match player_count {
        0..=11 => 2,
        12..=15 => 3,
        _ => 4,
    }
}

/// Calculate role distribution based on player count
///
/// One villager, the werewolf tier, one seer and one witch are always
/// present. Remaining seats are filled from [`SPECIAL_ROLE_PRIORITY`], one
/// copy per role, in a single pass over the list.
///
/// # Errors
///
/// - [`GameError::InvalidPlayerCount`] outside 8-20 players
/// - [`GameError::DistributionIncomplete`] when the priority list runs out
///   before every seat has a role
pub fn compute_distribution(player_count: usize) -> Result<RoleDistribution, GameError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(GameError::InvalidPlayerCount(player_count));
    }

    let werewolves = werewolf_tier(player_count);

    let mut distribution = RoleDistribution::new();
    distribution.set(Role::Villager, 1);
    distribution.set(Role::Werewolf, werewolves);
    distribution.set(Role::Seer, 1);
    distribution.set(Role::Witch, 1);

    let mut remaining_slots = player_count - (1 + werewolves + 2);

    for role in SPECIAL_ROLE_PRIORITY {
        if remaining_slots == 0 {
            break;
        }
        if !distribution.contains(role) {
            distribution.set(role, 1);
            remaining_slots -= 1;
        }
    }

    if remaining_slots > 0 {
        tracing::debug!(
            "Priority list exhausted for {} players with {} slot(s) left",
            player_count,
            remaining_slots
        );
        return Err(GameError::DistributionIncomplete {
            player_count,
            unfilled: remaining_slots,
        });
    }

    tracing::debug!(
        "Role distribution for {} players: {:?}",
        player_count,
        distribution
    );

    Ok(distribution)
}

/// Re-check a distribution against the table rules
///
/// Fails when there are fewer than 8 roles, when the werewolf count does not
/// match the tier for the total, or when the village team does not outnumber
/// the werewolves.
pub fn is_balanced(distribution: &RoleDistribution) -> bool {
    let total_players = distribution.total();
    let werewolf_count = distribution.count(Role::Werewolf);
    let villager_team_count: usize = distribution
        .iter()
        .filter(|(role, _)| role.team() == Team::Villagers)
        .map(|(_, count)| count)
        .sum();

    if total_players < MIN_PLAYERS {
        return false;
    }

    if werewolf_count != werewolf_tier(total_players) {
        return false;
    }

    villager_team_count > werewolf_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_werewolf_tier() {
        assert_eq!(werewolf_tier(8), 2);
        assert_eq!(werewolf_tier(11), 2);
        assert_eq!(werewolf_tier(12), 3);
        assert_eq!(werewolf_tier(15), 3);
        assert_eq!(werewolf_tier(16), 4);
        assert_eq!(werewolf_tier(20), 4);
    }

    #[test]
    fn test_role_distribution_8_players() {
        let dist = compute_distribution(8).unwrap();
        assert_eq!(dist.count(Role::Villager), 1);
        assert_eq!(dist.count(Role::Werewolf), 2);
        assert_eq!(dist.count(Role::Seer), 1);
        assert_eq!(dist.count(Role::Witch), 1);
        assert_eq!(dist.count(Role::Hunter), 1);
        assert_eq!(dist.count(Role::Cupid), 1);
        assert_eq!(dist.count(Role::LittleGirl), 1);
        assert!(!dist.contains(Role::Elder));
        assert_eq!(dist.total(), 8);
    }

    #[test]
    fn test_role_distribution_9_players() {
        let dist = compute_distribution(9).unwrap();
        assert_eq!(dist.count(Role::Werewolf), 2);
        assert_eq!(dist.count(Role::Elder), 1);
        assert!(!dist.contains(Role::Raven));
        assert_eq!(dist.total(), 9);
    }

    #[test]
    fn test_role_distribution_10_players() {
        let dist = compute_distribution(10).unwrap();
        for role in SPECIAL_ROLE_PRIORITY {
            assert_eq!(dist.count(role), 1, "{} missing", role);
        }
        assert_eq!(dist.total(), 10);
    }

    #[test]
    fn test_filled_distributions_match_rules() {
        for player_count in 8..=10 {
            let dist = compute_distribution(player_count).unwrap();
            assert_eq!(dist.total(), player_count);
            assert_eq!(dist.count(Role::Villager), 1);
            assert_eq!(dist.count(Role::Seer), 1);
            assert_eq!(dist.count(Role::Witch), 1);
            assert_eq!(dist.count(Role::Werewolf), werewolf_tier(player_count));
            assert!(is_balanced(&dist), "{} players unbalanced", player_count);
        }
    }

    #[test]
    fn test_priority_list_exhausted_above_10_players() {
        for player_count in 11..=20 {
            let expected_unfilled = player_count - 1 - werewolf_tier(player_count) - 2 - 5;
            assert_eq!(
                compute_distribution(player_count),
                Err(GameError::DistributionIncomplete {
                    player_count,
                    unfilled: expected_unfilled,
                })
            );
        }
    }

    #[test]
    fn test_role_distribution_too_few_players() {
        assert_eq!(
            compute_distribution(7),
            Err(GameError::InvalidPlayerCount(7))
        );
        assert_eq!(
            compute_distribution(0),
            Err(GameError::InvalidPlayerCount(0))
        );
    }

    #[test]
    fn test_role_distribution_too_many_players() {
        assert_eq!(
            compute_distribution(21),
            Err(GameError::InvalidPlayerCount(21))
        );
    }

    #[test]
    fn test_compute_distribution_is_idempotent() {
        assert_eq!(compute_distribution(9), compute_distribution(9));
        assert_eq!(compute_distribution(12), compute_distribution(12));
    }

    #[test]
    fn test_to_bag_expands_counts() {
        let dist = compute_distribution(8).unwrap();
        let bag = dist.to_bag();
        assert_eq!(bag.len(), 8);
        assert_eq!(bag.iter().filter(|r| **r == Role::Werewolf).count(), 2);
        assert_eq!(bag[0], Role::Werewolf);
    }

    #[test]
    fn test_set_zero_removes_role() {
        let mut dist = RoleDistribution::new();
        dist.set(Role::Hunter, 1);
        dist.set(Role::Hunter, 0);
        assert!(!dist.contains(Role::Hunter));
        assert_eq!(dist.total(), 0);
    }

    #[test]
    fn test_is_balanced_larger_tables() {
        let twelve: RoleDistribution = [
            (Role::Werewolf, 3),
            (Role::Villager, 1),
            (Role::Seer, 1),
            (Role::Witch, 1),
            (Role::Hunter, 1),
            (Role::Cupid, 1),
            (Role::LittleGirl, 1),
            (Role::Elder, 1),
            (Role::Raven, 1),
            (Role::Thief, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(twelve.total(), 12);
        assert!(is_balanced(&twelve));

        let sixteen: RoleDistribution = [
            (Role::Werewolf, 4),
            (Role::Villager, 6),
            (Role::Seer, 2),
            (Role::Witch, 2),
            (Role::Hunter, 1),
            (Role::Savior, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(sixteen.total(), 16);
        assert!(is_balanced(&sixteen));
    }

    #[test]
    fn test_is_balanced_rejects_small_tables() {
        let dist: RoleDistribution = [(Role::Werewolf, 2), (Role::Villager, 5)]
            .into_iter()
            .collect();
        assert!(!is_balanced(&dist));
    }

    #[test]
    fn test_is_balanced_rejects_wrong_werewolf_tier() {
        let dist: RoleDistribution = [(Role::Werewolf, 3), (Role::Villager, 6)]
            .into_iter()
            .collect();
        assert_eq!(dist.total(), 9);
        assert!(!is_balanced(&dist));
    }

    #[test]
    fn test_is_balanced_requires_village_majority() {
        // Neutral roles pad the table without helping the village
        let dist: RoleDistribution = [
            (Role::Werewolf, 2),
            (Role::Villager, 2),
            (Role::Thief, 4),
        ]
        .into_iter()
        .collect();
        assert_eq!(dist.total(), 8);
        assert!(!is_balanced(&dist));

        let dist: RoleDistribution = [
            (Role::Werewolf, 2),
            (Role::Villager, 3),
            (Role::Thief, 3),
        ]
        .into_iter()
        .collect();
        assert!(is_balanced(&dist));
    }
}
