use serde::{Deserialize, Serialize};

use crate::core::{catalog, GameError, Role};

/// Request to add a player to the roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlayerRequest {
    /// Display name; trimmed and checked by the session
    pub name: String,
}

/// Request to pin a role for a player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockRoleRequest {
    /// Role id, e.g. `"WEREWOLF"` (case-insensitive)
    pub role: String,
}

impl LockRoleRequest {
    /// Resolve the requested role against the catalog
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownRole`] if the id is not in the catalog
    pub fn role(&self) -> Result<Role, GameError> {
        catalog::get(&self.role).map(|def| def.role)
    }
}
