pub mod assignment;
pub mod catalog;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod game_manager;
pub mod game_session;
pub mod player;
pub mod roles;

pub use assignment::{assign, assign_with_rng, AssignmentResult, LockedRoles};
pub use constants::*;
pub use distribution::{
    compute_distribution, is_balanced, werewolf_tier, RoleDistribution, SPECIAL_ROLE_PRIORITY,
};
pub use error::GameError;
pub use game_manager::{GameManager, SessionStats};
pub use game_session::{Deal, GameSession};
pub use player::{Player, PlayerId};
pub use roles::{Role, RoleDefinition, Team};
