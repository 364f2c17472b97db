//! Static role catalog.
//!
//! Entries appear in declaration order of [`Role`], so `ROLE_CATALOG[role as usize]`
//! is the entry for `role`.

use super::{GameError, Role, RoleDefinition, Team};

static ROLE_CATALOG: [RoleDefinition; 12] = [
    RoleDefinition {
        role: Role::Werewolf,
        name: "Loup-Garou",
        team: Team::Werewolves,
        description: "Se réveille la nuit pour éliminer un villageois",
        min_players: 8,
        scaling: &[(8, 2), (12, 3), (16, 4)],
    },
    RoleDefinition {
        role: Role::Villager,
        name: "Villageois",
        team: Team::Villagers,
        description: "Doit découvrir qui sont les Loups-Garous",
        min_players: 0,
        scaling: &[(0, 1)],
    },
    RoleDefinition {
        role: Role::Seer,
        name: "Voyante",
        team: Team::Villagers,
        description: "Peut découvrir le rôle d'un joueur chaque nuit",
        min_players: 8,
        scaling: &[(8, 1), (12, 2)],
    },
    RoleDefinition {
        role: Role::Witch,
        name: "Sorcière",
        team: Team::Villagers,
        description: "Possède deux potions: une pour sauver, une pour tuer",
        min_players: 8,
        scaling: &[(8, 1), (14, 2)],
    },
    RoleDefinition {
        role: Role::Hunter,
        name: "Chasseur",
        team: Team::Villagers,
        description: "Peut éliminer un joueur en mourant",
        min_players: 8,
        scaling: &[(8, 1)],
    },
    RoleDefinition {
        role: Role::Cupid,
        name: "Cupidon",
        team: Team::Villagers,
        description: "Désigne deux amoureux au début du jeu",
        min_players: 10,
        scaling: &[(10, 1)],
    },
    RoleDefinition {
        role: Role::LittleGirl,
        name: "Petite Fille",
        team: Team::Villagers,
        description: "Peut espionner les Loups-Garous",
        min_players: 10,
        scaling: &[(10, 1)],
    },
    RoleDefinition {
        role: Role::Thief,
        name: "Voleur",
        team: Team::Neutral,
        description: "Choisit son rôle parmi deux cartes au début",
        min_players: 12,
        scaling: &[(12, 1)],
    },
    RoleDefinition {
        role: Role::Elder,
        name: "L'Ancien",
        team: Team::Villagers,
        description: "Peut survivre à une première attaque des Loups-Garous",
        min_players: 12,
        scaling: &[(12, 1)],
    },
    RoleDefinition {
        role: Role::Raven,
        name: "Corbeau",
        team: Team::Villagers,
        description: "Désigne un joueur suspect chaque nuit",
        min_players: 12,
        scaling: &[(12, 1)],
    },
    RoleDefinition {
        role: Role::Savior,
        name: "Salvateur",
        team: Team::Villagers,
        description: "Protège un joueur chaque nuit",
        min_players: 14,
        scaling: &[(14, 1)],
    },
    RoleDefinition {
        role: Role::DevotedServant,
        name: "Servante Dévouée",
        team: Team::Villagers,
        description: "Connaît l'identité d'un joueur au début",
        min_players: 14,
        scaling: &[(14, 1)],
    },
];

/// Look up a role by its id (`"WEREWOLF"`, `"little_girl"`, ...)
///
/// # Errors
///
/// Returns [`GameError::UnknownRole`] if the id is not in the catalog
pub fn get(role_id: &str) -> Result<&'static RoleDefinition, GameError> {
    role_id.parse::<Role>().map(definition)
}

/// Every role definition, in declaration order
pub fn all() -> &'static [RoleDefinition] {
    &ROLE_CATALOG
}

pub(crate) fn definition(role: Role) -> &'static RoleDefinition {
    &ROLE_CATALOG[role as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_indexed_by_role() {
        for (index, def) in all().iter().enumerate() {
            assert_eq!(def.role as usize, index, "{} out of place", def.role);
            assert_eq!(definition(def.role), def);
        }
    }

    #[test]
    fn test_get_known_role() {
        let def = get("WITCH").unwrap();
        assert_eq!(def.role, Role::Witch);
        assert_eq!(def.name, "Sorcière");
        assert_eq!(def.team, Team::Villagers);
    }

    #[test]
    fn test_get_unknown_role() {
        assert_eq!(
            get("VAMPIRE").unwrap_err(),
            GameError::UnknownRole("VAMPIRE".to_string())
        );
        assert!(get("").is_err());
    }

    #[test]
    fn test_all_is_declaration_order() {
        let ids: Vec<&str> = all().iter().map(|def| def.role.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "WEREWOLF",
                "VILLAGER",
                "SEER",
                "WITCH",
                "HUNTER",
                "CUPID",
                "LITTLE_GIRL",
                "THIEF",
                "ELDER",
                "RAVEN",
                "SAVIOR",
                "DEVOTED_SERVANT",
            ]
        );
    }

    #[test]
    fn test_scaling_thresholds_ascending() {
        for def in all() {
            assert!(
                def.scaling.windows(2).all(|w| w[0].0 <= w[1].0),
                "{} scaling out of order",
                def.role
            );
            assert!(!def.scaling.is_empty());
        }
    }

    #[test]
    fn test_only_thief_is_neutral() {
        let neutral: Vec<Role> = all()
            .iter()
            .filter(|def| def.team == Team::Neutral)
            .map(|def| def.role)
            .collect();
        assert_eq!(neutral, vec![Role::Thief]);
    }
}
