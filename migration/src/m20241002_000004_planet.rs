use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Climate, 150))
                    .col(timestamp(Planet::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Planet::EditedAt).default(Expr::current_timestamp()))
                    .col(string_len(Planet::Diameter, 150))
                    .col(json(Planet::Films))
                    .col(string_len(Planet::Gravity, 150))
                    .col(string_len(Planet::Name, 150))
                    .col(string_len(Planet::OrbitalPeriod, 150))
                    .col(string_len(Planet::Population, 150))
                    .col(json(Planet::Residents))
                    .col(string_len(Planet::RotationPeriod, 150))
                    .col(string_len(Planet::SurfaceWater, 150))
                    .col(string_len(Planet::Terrain, 150))
                    .col(string_len(Planet::Url, 150))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Climate,
    CreatedAt,
    EditedAt,
    Diameter,
    Films,
    Gravity,
    Name,
    OrbitalPeriod,
    Population,
    Residents,
    RotationPeriod,
    SurfaceWater,
    Terrain,
    Url,
}
