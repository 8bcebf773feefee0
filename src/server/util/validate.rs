//! Request payload validation.
//!
//! Every function returns `Error::ValidationError` naming the offending field, which the API
//! returns as a 400 Bad Request.

use crate::{
    model::{
        people::{CreatePersonDto, UpdatePersonDto},
        planet::{CreatePlanetDto, UpdatePlanetDto},
        user::{CreateUserDto, UpdateUserDto},
    },
    server::error::Error,
};

/// Column lengths declared by the migrations
pub static MAX_EMAIL_LEN: usize = 120;
pub static MAX_PASSWORD_LEN: usize = 80;
pub static MAX_CATALOG_FIELD_LEN: usize = 150;

/// Ensures a required string field contains something other than whitespace.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Value provided by the request
///
/// # Returns
/// - `Ok(())` - Value is not blank
/// - `Err(Error::ValidationError)` - Value is empty or only whitespace
pub fn require_non_blank(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::ValidationError(format!("{} must not be blank", field)));
    }

    Ok(())
}

/// Ensures a string field fits in its column, counted in characters.
pub fn require_max_len(field: &str, value: &str, max: usize) -> Result<(), Error> {
    if value.chars().count() > max {
        return Err(Error::ValidationError(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(())
}

/// Ensures an email is not blank, fits its column and contains an `@`.
pub fn validate_email(email: &str) -> Result<(), Error> {
    require_non_blank("email", email)?;
    require_max_len("email", email, MAX_EMAIL_LEN)?;

    if !email.contains('@') {
        return Err(Error::ValidationError(format!(
            "email {:?} is not a valid address",
            email
        )));
    }

    Ok(())
}

fn validate_password(password: &str) -> Result<(), Error> {
    require_non_blank("password", password)?;
    require_max_len("password", password, MAX_PASSWORD_LEN)
}

pub fn validate_new_user(user: &CreateUserDto) -> Result<(), Error> {
    validate_email(&user.email)?;
    validate_password(&user.password)
}

/// Validates the fields present in a user update, omitted fields are skipped.
pub fn validate_user_changes(changes: &UpdateUserDto) -> Result<(), Error> {
    if let Some(email) = &changes.email {
        validate_email(email)?;
    }
    if let Some(password) = &changes.password {
        validate_password(password)?;
    }

    Ok(())
}

/// Validates the name & url mirrored into a catalog summary.
///
/// Either value may be `None` for partial updates leaving the field untouched.
pub fn validate_catalog_entry(name: Option<&str>, url: Option<&str>) -> Result<(), Error> {
    if let Some(name) = name {
        require_non_blank("name", name)?;
        require_max_len("name", name, MAX_CATALOG_FIELD_LEN)?;
    }
    if let Some(url) = url {
        require_non_blank("url", url)?;
        require_max_len("url", url, MAX_CATALOG_FIELD_LEN)?;
    }

    Ok(())
}

fn validate_catalog_fields<'a>(
    fields: impl IntoIterator<Item = (&'static str, Option<&'a str>)>,
) -> Result<(), Error> {
    for (field, value) in fields {
        if let Some(value) = value {
            require_max_len(field, value, MAX_CATALOG_FIELD_LEN)?;
        }
    }

    Ok(())
}

pub fn validate_new_person(person: &CreatePersonDto) -> Result<(), Error> {
    validate_catalog_entry(Some(&person.name), Some(&person.url))?;
    validate_catalog_fields([
        ("birth_year", Some(person.birth_year.as_str())),
        ("eye_color", Some(person.eye_color.as_str())),
        ("gender", Some(person.gender.as_str())),
        ("hair_color", Some(person.hair_color.as_str())),
        ("height", Some(person.height.as_str())),
        ("homeworld", Some(person.homeworld.as_str())),
        ("mass", Some(person.mass.as_str())),
        ("skin_color", Some(person.skin_color.as_str())),
    ])
}

/// Validates the fields present in a person update, omitted fields are skipped.
pub fn validate_person_changes(changes: &UpdatePersonDto) -> Result<(), Error> {
    validate_catalog_entry(changes.name.as_deref(), changes.url.as_deref())?;
    validate_catalog_fields([
        ("birth_year", changes.birth_year.as_deref()),
        ("eye_color", changes.eye_color.as_deref()),
        ("gender", changes.gender.as_deref()),
        ("hair_color", changes.hair_color.as_deref()),
        ("height", changes.height.as_deref()),
        ("homeworld", changes.homeworld.as_deref()),
        ("mass", changes.mass.as_deref()),
        ("skin_color", changes.skin_color.as_deref()),
    ])
}

pub fn validate_new_planet(planet: &CreatePlanetDto) -> Result<(), Error> {
    validate_catalog_entry(Some(&planet.name), Some(&planet.url))?;
    validate_catalog_fields([
        ("climate", Some(planet.climate.as_str())),
        ("diameter", Some(planet.diameter.as_str())),
        ("gravity", Some(planet.gravity.as_str())),
        ("orbital_period", Some(planet.orbital_period.as_str())),
        ("population", Some(planet.population.as_str())),
        ("rotation_period", Some(planet.rotation_period.as_str())),
        ("surface_water", Some(planet.surface_water.as_str())),
        ("terrain", Some(planet.terrain.as_str())),
    ])
}

/// Validates the fields present in a planet update, omitted fields are skipped.
pub fn validate_planet_changes(changes: &UpdatePlanetDto) -> Result<(), Error> {
    validate_catalog_entry(changes.name.as_deref(), changes.url.as_deref())?;
    validate_catalog_fields([
        ("climate", changes.climate.as_deref()),
        ("diameter", changes.diameter.as_deref()),
        ("gravity", changes.gravity.as_deref()),
        ("orbital_period", changes.orbital_period.as_deref()),
        ("population", changes.population.as_deref()),
        ("rotation_period", changes.rotation_period.as_deref()),
        ("surface_water", changes.surface_water.as_deref()),
        ("terrain", changes.terrain.as_deref()),
    ])
}
