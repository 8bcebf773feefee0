//! Declarative test builder.
//!
//! `TestBuilder` queues tables and fixtures through chained method calls, all of which are
//! executed in order by the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixtures are inserted in the order users, people, planets, favorites, so IDs are
/// predictable: the first queued user gets ID 1, the first queued person & its summary get
/// ID 1, and so on.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_catalog_tables: bool,
    include_favorite_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    people: Vec<String>,
    planets: Vec<String>,
    planet_favorites: Vec<(i32, i32)>, // (user_id, planets summary id)
    people_favorites: Vec<(i32, i32)>, // (user_id, people summary id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_catalog_tables: false,
            include_favorite_tables: false,
            users: Vec::new(),
            people: Vec::new(),
            planets: Vec::new(),
            planet_favorites: Vec::new(),
            people_favorites: Vec::new(),
        }
    }

    /// Add the `users` table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the `person`, `people`, `planet` & `planets` tables to the test database.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add the `favorites` table along with the user & catalog tables it references.
    pub fn with_favorite_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_catalog_tables = true;
        self.include_favorite_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Person)
    ///     .with_table(People)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an active user with the provided email.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a detailed person along with its matching people summary.
    pub fn with_person(mut self, name: impl Into<String>) -> Self {
        self.people.push(name.into());
        self
    }

    /// Insert a detailed planet along with its matching planets summary.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a favorite linking a user to a planets summary.
    pub fn with_planet_favorite(mut self, user_id: i32, planet_id: i32) -> Self {
        self.planet_favorites.push((user_id, planet_id));
        self
    }

    /// Insert a favorite linking a user to a people summary.
    pub fn with_people_favorite(mut self, user_id: i32, people_id: i32) -> Self {
        self.people_favorites.push((user_id, people_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables, referenced tables first
        let schema = Schema::new(DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::User));
        }

        if self.include_catalog_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::People),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Planets),
            ]);
        }

        if self.include_favorite_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Favorite));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for name in self.people {
            setup.catalog().insert_person_with_summary(&name).await?;
        }

        for name in self.planets {
            setup.catalog().insert_planet_with_summary(&name).await?;
        }

        for (user_id, planet_id) in self.planet_favorites {
            setup
                .favorite()
                .insert_planet_favorite(user_id, planet_id)
                .await?;
        }

        for (user_id, people_id) in self.people_favorites {
            setup
                .favorite()
                .insert_people_favorite(user_id, people_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
