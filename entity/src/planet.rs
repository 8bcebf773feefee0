use sea_orm::entity::prelude::*;

use crate::StringList;

/// Detailed record for a Star Wars planet.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub climate: String,
    pub created_at: DateTime,
    pub edited_at: DateTime,
    pub diameter: String,
    #[sea_orm(column_type = "Json")]
    pub films: StringList,
    pub gravity: String,
    pub name: String,
    pub orbital_period: String,
    pub population: String,
    #[sea_orm(column_type = "Json")]
    pub residents: StringList,
    pub rotation_period: String,
    pub surface_water: String,
    pub terrain: String,
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::planets::Entity")]
    Planets,
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
