use sea_orm::entity::prelude::*;

use crate::StringList;

/// Detailed record for a Star Wars character.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub birth_year: String,
    pub eye_color: String,
    #[sea_orm(column_type = "Json")]
    pub films: StringList,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub homeworld: String,
    pub mass: String,
    pub name: String,
    pub skin_color: String,
    pub created_at: DateTime,
    pub edited_at: DateTime,
    #[sea_orm(column_type = "Json")]
    pub species: StringList,
    #[sea_orm(column_type = "Json")]
    pub starships: StringList,
    pub url: String,
    #[sea_orm(column_type = "Json")]
    pub vehicles: StringList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::people::Entity")]
    People,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
