use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_len(Person::BirthYear, 150))
                    .col(string_len(Person::EyeColor, 150))
                    .col(json(Person::Films))
                    .col(string_len(Person::Gender, 150))
                    .col(string_len(Person::HairColor, 150))
                    .col(string_len(Person::Height, 150))
                    .col(string_len(Person::Homeworld, 150))
                    .col(string_len(Person::Mass, 150))
                    .col(string_len(Person::Name, 150))
                    .col(string_len(Person::SkinColor, 150))
                    .col(timestamp(Person::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Person::EditedAt).default(Expr::current_timestamp()))
                    .col(json(Person::Species))
                    .col(json(Person::Starships))
                    .col(string_len(Person::Url, 150))
                    .col(json(Person::Vehicles))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    BirthYear,
    EyeColor,
    Films,
    Gender,
    HairColor,
    Height,
    Homeworld,
    Mass,
    Name,
    SkinColor,
    CreatedAt,
    EditedAt,
    Species,
    Starships,
    Url,
    Vehicles,
}
