use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Summary entry of the people catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PeopleDto {
    pub id: i32,
    pub name: String,
    pub url: String,
    /// ID of the detailed person record this summary mirrors
    pub person_id: Option<i32>,
}

/// Detailed person record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub birth_year: String,
    pub eye_color: String,
    pub films: Vec<String>,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub homeworld: String,
    pub mass: String,
    pub name: String,
    pub skin_color: String,
    pub created_at: NaiveDateTime,
    pub edited_at: NaiveDateTime,
    pub species: Vec<String>,
    pub starships: Vec<String>,
    pub url: String,
    pub vehicles: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePersonDto {
    pub birth_year: String,
    pub eye_color: String,
    #[serde(default)]
    pub films: Vec<String>,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub homeworld: String,
    pub mass: String,
    pub name: String,
    pub skin_color: String,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub vehicles: Vec<String>,
}

/// Fields of a person that may be changed, omitted fields are left untouched
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePersonDto {
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub films: Option<Vec<String>>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub homeworld: Option<String>,
    pub mass: Option<String>,
    pub name: Option<String>,
    pub skin_color: Option<String>,
    pub species: Option<Vec<String>>,
    pub starships: Option<Vec<String>>,
    pub url: Option<String>,
    pub vehicles: Option<Vec<String>>,
}
