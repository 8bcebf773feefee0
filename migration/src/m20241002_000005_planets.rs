use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241002_000004_planet::Planet;

static IDX_PLANETS_PLANET_ID: &str = "idx_planets_planet_id";
static FK_PLANETS_PLANET_ID: &str = "fk_planets_planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_len_uniq(Planets::Name, 150))
                    .col(string_len_uniq(Planets::Url, 450))
                    .col(integer_null(Planets::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLANETS_PLANET_ID)
                            .from(Planets::Table, Planets::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One summary row per detailed planet
        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANETS_PLANET_ID)
                    .table(Planets::Table)
                    .col(Planets::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLANETS_PLANET_ID)
                    .table(Planets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Name,
    Url,
    PlanetId,
}
