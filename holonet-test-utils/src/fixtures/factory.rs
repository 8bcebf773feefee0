//! Factories for mock active models.
//!
//! Each factory fills every required column so tests only spell out the values they assert on.

use chrono::Utc;
use entity::StringList;
use sea_orm::ActiveValue;

use crate::constant::{TEST_CATALOG_URL, TEST_PASSWORD};

/// Builds the url of a mock catalog entry, e.g. `https://swapi.dev/api/people/luke-skywalker/`
pub fn catalog_url(resource: &str, name: &str) -> String {
    format!(
        "{}/{}/{}/",
        TEST_CATALOG_URL,
        resource,
        name.to_lowercase().replace(' ', "-")
    )
}

pub fn mock_user(email: &str) -> entity::user::ActiveModel {
    entity::user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        password: ActiveValue::Set(TEST_PASSWORD.to_string()),
        is_active: ActiveValue::Set(true),
        ..Default::default()
    }
}

pub fn mock_person(name: &str) -> entity::person::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::person::ActiveModel {
        birth_year: ActiveValue::Set("19BBY".to_string()),
        eye_color: ActiveValue::Set("blue".to_string()),
        films: ActiveValue::Set(StringList(vec![catalog_url("films", "a new hope")])),
        gender: ActiveValue::Set("male".to_string()),
        hair_color: ActiveValue::Set("blond".to_string()),
        height: ActiveValue::Set("172".to_string()),
        homeworld: ActiveValue::Set(catalog_url("planets", "tatooine")),
        mass: ActiveValue::Set("77".to_string()),
        name: ActiveValue::Set(name.to_string()),
        skin_color: ActiveValue::Set("fair".to_string()),
        created_at: ActiveValue::Set(now),
        edited_at: ActiveValue::Set(now),
        species: ActiveValue::Set(StringList::default()),
        starships: ActiveValue::Set(StringList(vec![catalog_url("starships", "x-wing")])),
        url: ActiveValue::Set(catalog_url("people", name)),
        vehicles: ActiveValue::Set(StringList::default()),
        ..Default::default()
    }
}

pub fn mock_planet(name: &str) -> entity::planet::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::planet::ActiveModel {
        climate: ActiveValue::Set("arid".to_string()),
        created_at: ActiveValue::Set(now),
        edited_at: ActiveValue::Set(now),
        diameter: ActiveValue::Set("10465".to_string()),
        films: ActiveValue::Set(StringList(vec![catalog_url("films", "a new hope")])),
        gravity: ActiveValue::Set("1 standard".to_string()),
        name: ActiveValue::Set(name.to_string()),
        orbital_period: ActiveValue::Set("304".to_string()),
        population: ActiveValue::Set("200000".to_string()),
        residents: ActiveValue::Set(StringList(vec![catalog_url("people", "luke skywalker")])),
        rotation_period: ActiveValue::Set("23".to_string()),
        surface_water: ActiveValue::Set("1".to_string()),
        terrain: ActiveValue::Set("desert".to_string()),
        url: ActiveValue::Set(catalog_url("planets", name)),
        ..Default::default()
    }
}
