use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::data::{catalog::SummaryRepository, favorite::FavoriteRepository};

pub struct PlanetsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetsRepository<'a, C> {
    /// Creates a new instance of [`PlanetsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all planets summaries ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::planets::Model>, DbErr> {
        entity::prelude::Planets::find()
            .order_by_asc(entity::planets::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        planets_id: i32,
    ) -> Result<Option<entity::planets::Model>, DbErr> {
        entity::prelude::Planets::find_by_id(planets_id)
            .one(self.db)
            .await
    }

    /// Gets a planets summary along with the detailed planet it mirrors
    ///
    /// # Returns
    /// - `Some((summary, Some(planet)))`: Summary linked to an existing planet
    /// - `Some((summary, None))`: Summary without a detailed planet
    /// - `None`: No summary exists with the provided ID
    pub async fn get_with_planet(
        &self,
        planets_id: i32,
    ) -> Result<Option<(entity::planets::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::Planets::find_by_id(planets_id)
            .find_also_related(entity::prelude::Planet)
            .one(self.db)
            .await
    }
}

impl<C: ConnectionTrait> SummaryRepository for PlanetsRepository<'_, C> {
    type Model = entity::planets::Model;

    async fn find_by_detail_id(
        &self,
        planet_id: i32,
    ) -> Result<Option<entity::planets::Model>, DbErr> {
        entity::prelude::Planets::find()
            .filter(entity::planets::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await
    }

    async fn find_conflicting(
        &self,
        name: &str,
        url: &str,
        planet_id: i32,
    ) -> Result<Option<entity::planets::Model>, DbErr> {
        entity::prelude::Planets::find()
            .filter(
                Condition::any()
                    .add(entity::planets::Column::Name.eq(name))
                    .add(entity::planets::Column::Url.eq(url)),
            )
            .filter(
                Condition::any()
                    .add(entity::planets::Column::PlanetId.is_null())
                    .add(entity::planets::Column::PlanetId.ne(planet_id)),
            )
            .one(self.db)
            .await
    }

    async fn create(
        &self,
        name: String,
        url: String,
        planet_id: i32,
    ) -> Result<entity::planets::Model, DbErr> {
        let planets = entity::planets::ActiveModel {
            name: ActiveValue::Set(name),
            url: ActiveValue::Set(url),
            planet_id: ActiveValue::Set(Some(planet_id)),
            ..Default::default()
        };

        planets.insert(self.db).await
    }

    async fn update_name_and_url(
        &self,
        planets: entity::planets::Model,
        name: String,
        url: String,
    ) -> Result<entity::planets::Model, DbErr> {
        if planets.name == name && planets.url == url {
            return Ok(planets);
        }

        let mut planets_am = planets.into_active_model();
        planets_am.name = ActiveValue::Set(name);
        planets_am.url = ActiveValue::Set(url);

        planets_am.update(self.db).await
    }

    async fn delete(&self, planets: entity::planets::Model) -> Result<(), DbErr> {
        FavoriteRepository::new(self.db)
            .delete_by_planet_id(planets.id)
            .await?;

        entity::prelude::Planets::delete_by_id(planets.id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
