//! SeaORM entities for the holonet catalog.
//!
//! Detailed records (`person`, `planet`) carry the full set of attributes, while summary
//! records (`people`, `planets`) hold only a name, a url and a back-reference to their
//! detailed record. Favorites always point at summary records.

pub mod prelude;

pub mod favorite;
pub mod people;
pub mod person;
pub mod planet;
pub mod planets;
pub mod string_list;
pub mod user;

pub use string_list::StringList;
