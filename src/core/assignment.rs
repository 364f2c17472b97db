use rand::{thread_rng, Rng};
use std::collections::HashMap;

use super::{GameError, Player, PlayerId, Role, RoleDistribution, MIN_PLAYERS};

/// Roles pinned by the operator before dealing
pub type LockedRoles = HashMap<PlayerId, Role>;

/// Outcome of one deal: which role each player received
///
/// Players missing from the map got nothing because the bag ran out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    roles: HashMap<PlayerId, Role>,
}

impl AssignmentResult {
    pub fn get(&self, player_id: &PlayerId) -> Option<Role> {
        self.roles.get(player_id).copied()
    }

    /// Number of players that received a role
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Role)> + '_ {
        self.roles.iter().map(|(id, role)| (*id, *role))
    }

    /// How many players were dealt `role`
    pub fn count(&self, role: Role) -> usize {
        self.roles.values().filter(|r| **r == role).count()
    }

    /// True when every roster player has a role
    pub fn is_complete(&self, roster: &[Player]) -> bool {
        roster.iter().all(|p| self.roles.contains_key(&p.id))
    }

    /// Roster players left without a role, in roster order
    pub fn unassigned<'a>(&self, roster: &'a [Player]) -> Vec<&'a Player> {
        roster
            .iter()
            .filter(|p| !self.roles.contains_key(&p.id))
            .collect()
    }
}

/// Deal roles to the roster using the thread-local RNG
///
/// See [`assign_with_rng`].
pub fn assign(
    roster: &[Player],
    locked: &LockedRoles,
    distribution: &RoleDistribution,
) -> Result<AssignmentResult, GameError> {
    assign_with_rng(roster, locked, distribution, &mut thread_rng())
}

/// Deal roles to the roster
///
/// Locked players get their pinned role first, and one matching copy is
/// taken out of the bag if there is one left. A pin whose role is no longer
/// in the bag is still honored but takes nothing out, so the remaining
/// players may see more copies than the distribution intended.
/// Pins for players not on the roster are ignored.
///
/// Every other player, in roster order, then draws uniformly from what is
/// left. When the bag is empty the remaining players get no role; check
/// [`AssignmentResult::is_complete`].
///
/// # Errors
///
/// Returns [`GameError::TooFewPlayers`] if the roster has fewer than 8 players
pub fn assign_with_rng<R: Rng + ?Sized>(
    roster: &[Player],
    locked: &LockedRoles,
    distribution: &RoleDistribution,
    rng: &mut R,
) -> Result<AssignmentResult, GameError> {
    if roster.len() < MIN_PLAYERS {
        return Err(GameError::TooFewPlayers(roster.len()));
    }

    let mut bag = distribution.to_bag();
    let mut result = AssignmentResult::default();

    for player in roster {
        let Some(role) = locked.get(&player.id).copied() else {
            continue;
        };

        result.roles.insert(player.id, role);
        match bag.iter().position(|r| *r == role) {
            Some(index) => {
                bag.swap_remove(index);
            }
            None => tracing::debug!(
                "Pinned role {} for player {} is not in the bag",
                role,
                player.name
            ),
        }
    }

    for player in roster.iter().filter(|p| !locked.contains_key(&p.id)) {
        if bag.is_empty() {
            tracing::debug!("Bag empty before player {} could draw", player.name);
            break;
        }

        let index = rng.gen_range(0..bag.len());
        let role = bag.swap_remove(index);
        result.roles.insert(player.id, role);
    }

    Ok(result)
}
