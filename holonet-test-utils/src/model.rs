//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holonet crate.

pub type UserModel = entity::user::Model;
pub type PersonModel = entity::person::Model;
pub type PeopleModel = entity::people::Model;
pub type PlanetModel = entity::planet::Model;
pub type PlanetsModel = entity::planets::Model;
pub type FavoriteModel = entity::favorite::Model;
