use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Summary entry of the planets catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetsDto {
    pub id: i32,
    pub name: String,
    pub url: String,
    /// ID of the detailed planet record this summary mirrors
    pub planet_id: Option<i32>,
}

/// Detailed planet record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub climate: String,
    pub created_at: NaiveDateTime,
    pub edited_at: NaiveDateTime,
    pub diameter: String,
    pub films: Vec<String>,
    pub gravity: String,
    pub name: String,
    pub orbital_period: String,
    pub population: String,
    pub residents: Vec<String>,
    pub rotation_period: String,
    pub surface_water: String,
    pub terrain: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    pub climate: String,
    pub diameter: String,
    #[serde(default)]
    pub films: Vec<String>,
    pub gravity: String,
    pub name: String,
    pub orbital_period: String,
    pub population: String,
    #[serde(default)]
    pub residents: Vec<String>,
    pub rotation_period: String,
    pub surface_water: String,
    pub terrain: String,
    pub url: String,
}

/// Fields of a planet that may be changed, omitted fields are left untouched
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePlanetDto {
    pub climate: Option<String>,
    pub diameter: Option<String>,
    pub films: Option<Vec<String>>,
    pub gravity: Option<String>,
    pub name: Option<String>,
    pub orbital_period: Option<String>,
    pub population: Option<String>,
    pub residents: Option<Vec<String>>,
    pub rotation_period: Option<String>,
    pub surface_water: Option<String>,
    pub terrain: Option<String>,
    pub url: Option<String>,
}
