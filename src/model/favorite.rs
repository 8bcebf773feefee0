use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    /// ID of the favorited planet summary
    pub planet_id: Option<i32>,
    /// ID of the favorited people summary
    pub people_id: Option<i32>,
}

/// Body of the favorite create & delete routes, the favorited entity comes from the path
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteRequestDto {
    pub user_id: i32,
}
