use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241002_000002_person::Person;

static IDX_PEOPLE_PERSON_ID: &str = "idx_people_person_id";
static FK_PEOPLE_PERSON_ID: &str = "fk_people_person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_len_uniq(People::Name, 150))
                    .col(string_len_uniq(People::Url, 450))
                    .col(integer_null(People::PersonId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_PERSON_ID)
                            .from(People::Table, People::PersonId)
                            .to(Person::Table, Person::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One summary row per detailed person
        manager
            .create_index(
                Index::create()
                    .name(IDX_PEOPLE_PERSON_ID)
                    .table(People::Table)
                    .col(People::PersonId)
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
                    .name(IDX_PEOPLE_PERSON_ID)
                    .table(People::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Name,
    Url,
    PersonId,
}
