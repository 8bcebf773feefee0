//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, giving a single point of reference for database model types
//! without importing from the `entity` crate directly.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Unique email address
/// - `password` - Password as provided at registration
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for the detailed person database model.
///
/// Holds every descriptive attribute of a character along with `created_at` & `edited_at`
/// timestamps. Mirrored by at most one [`PeopleModel`].
pub type PersonModel = entity::person::Model;

/// Type alias for the people summary database model.
///
/// # Fields (from `entity::people::Model`)
/// - `id` - Primary key, the ID favorites reference
/// - `name` - Unique name, mirrors the detailed person's name
/// - `url` - Unique url, mirrors the detailed person's url
/// - `person_id` - Foreign key to the detailed person (nullable, unique)
pub type PeopleModel = entity::people::Model;

/// Type alias for the detailed planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the planets summary database model.
///
/// Symmetric to [`PeopleModel`] with `planet_id` referencing the detailed planet.
pub type PlanetsModel = entity::planets::Model;

/// Type alias for the favorite database model.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `planet_id` - Foreign key to a planets summary (nullable)
/// - `people_id` - Foreign key to a people summary (nullable)
pub type FavoriteModel = entity::favorite::Model;
