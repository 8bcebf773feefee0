use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20241002_000001_users::Users, m20241002_000003_people::People,
    m20241002_000005_planets::Planets,
};

static IDX_FAVORITES_USER_PLANET: &str = "idx_favorites_user_id_planet_id";
static IDX_FAVORITES_USER_PEOPLE: &str = "idx_favorites_user_id_people_id";
static FK_FAVORITES_USER_ID: &str = "fk_favorites_user_id";
static FK_FAVORITES_PLANET_ID: &str = "fk_favorites_planet_id";
static FK_FAVORITES_PEOPLE_ID: &str = "fk_favorites_people_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::PlanetId))
                    .col(integer_null(Favorites::PeopleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PLANET_ID)
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PEOPLE_ID)
                            .from(Favorites::Table, Favorites::PeopleId)
                            .to(People::Table, People::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // NULL summary references never collide, so a planet favorite and a people favorite
        // for the same user can coexist under both indexes.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_PLANET)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_PEOPLE)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::PeopleId)
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
                    .name(IDX_FAVORITES_USER_PEOPLE)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_PLANET)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PlanetId,
    PeopleId,
}
