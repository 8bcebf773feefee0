pub use sea_orm_migration::prelude::*;

mod m20241002_000001_users;
mod m20241002_000002_person;
mod m20241002_000003_people;
mod m20241002_000004_planet;
mod m20241002_000005_planets;
mod m20241002_000006_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241002_000001_users::Migration),
            Box::new(m20241002_000002_person::Migration),
            Box::new(m20241002_000003_people::Migration),
            Box::new(m20241002_000004_planet::Migration),
            Box::new(m20241002_000005_planets::Migration),
            Box::new(m20241002_000006_favorites::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use sea_orm_migration::sea_orm::Database;

    use super::*;

    static TABLES: [&str; 6] = ["users", "person", "people", "planet", "planets", "favorites"];

    /// Expect every table to exist after applying all migrations
    #[tokio::test]
    async fn applies_all_migrations() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in TABLES {
            assert!(manager.has_table(table).await?, "missing table {}", table);
        }

        Ok(())
    }

    /// Expect all tables to be dropped when rolling every migration back
    #[tokio::test]
    async fn rolls_back_all_migrations() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;
        Migrator::down(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in TABLES {
            assert!(!manager.has_table(table).await?, "table {} still exists", table);
        }

        Ok(())
    }
}
