use axum::{extract::Path, Json};

use super::{game_error, ApiError};
use crate::{
    core::{catalog, compute_distribution, is_balanced, RoleDefinition},
    models::DistributionResponse,
};

/// List every role in the catalog, in declaration order
pub async fn list_roles() -> Json<&'static [RoleDefinition]> {
    Json(catalog::all())
}

/// Look up a single role by id
pub async fn get_role(
    Path(role_id): Path<String>,
) -> Result<Json<&'static RoleDefinition>, ApiError> {
    catalog::get(&role_id).map(Json).map_err(game_error)
}

/// Preview the roles dealt at a given table size
///
/// # Returns
///
/// The distribution and whether it passes the balance check
pub async fn preview_distribution(
    Path(player_count): Path<usize>,
) -> Result<Json<DistributionResponse>, ApiError> {
    let roles = compute_distribution(player_count).map_err(game_error)?;
    let balanced = is_balanced(&roles);

    Ok(Json(DistributionResponse {
        player_count,
        roles,
        balanced,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_roles() {
        let Json(roles) = list_roles().await;
        assert_eq!(roles.len(), 12);
    }

    #[tokio::test]
    async fn test_get_role_unknown() {
        let err = get_role(Path("MAYOR".to_string())).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preview_distribution() {
        let Json(preview) = preview_distribution(Path(8)).await.unwrap();
        assert_eq!(preview.player_count, 8);
        assert_eq!(preview.roles.total(), 8);
        assert!(preview.balanced);

        let err = preview_distribution(Path(21)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }
}
