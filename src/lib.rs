//! holonet, a REST API for a Star Wars catalog of people, planets, users and their favorites.

pub mod model;
pub mod server;
