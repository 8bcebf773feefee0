use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::model::planet::{CreatePlanetDto, UpdatePlanetDto};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a detailed planet record, `created_at` & `edited_at` are set to now
    pub async fn create(&self, planet: CreatePlanetDto) -> Result<entity::planet::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let planet = entity::planet::ActiveModel {
            climate: ActiveValue::Set(planet.climate),
            created_at: ActiveValue::Set(now),
            edited_at: ActiveValue::Set(now),
            diameter: ActiveValue::Set(planet.diameter),
            films: ActiveValue::Set(planet.films.into()),
            gravity: ActiveValue::Set(planet.gravity),
            name: ActiveValue::Set(planet.name),
            orbital_period: ActiveValue::Set(planet.orbital_period),
            population: ActiveValue::Set(planet.population),
            residents: ActiveValue::Set(planet.residents.into()),
            rotation_period: ActiveValue::Set(planet.rotation_period),
            surface_water: ActiveValue::Set(planet.surface_water),
            terrain: ActiveValue::Set(planet.terrain),
            url: ActiveValue::Set(planet.url),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Applies the provided changes to a planet and bumps `edited_at`
    ///
    /// # Returns
    /// - `Some(`[`entity::planet::Model`]`)`: The updated planet
    /// - `None`: No planet exists with the provided ID
    pub async fn update(
        &self,
        planet_id: i32,
        changes: UpdatePlanetDto,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        if let Some(climate) = changes.climate {
            planet_am.climate = ActiveValue::Set(climate);
        }
        if let Some(diameter) = changes.diameter {
            planet_am.diameter = ActiveValue::Set(diameter);
        }
        if let Some(films) = changes.films {
            planet_am.films = ActiveValue::Set(films.into());
        }
        if let Some(gravity) = changes.gravity {
            planet_am.gravity = ActiveValue::Set(gravity);
        }
        if let Some(name) = changes.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(orbital_period) = changes.orbital_period {
            planet_am.orbital_period = ActiveValue::Set(orbital_period);
        }
        if let Some(population) = changes.population {
            planet_am.population = ActiveValue::Set(population);
        }
        if let Some(residents) = changes.residents {
            planet_am.residents = ActiveValue::Set(residents.into());
        }
        if let Some(rotation_period) = changes.rotation_period {
            planet_am.rotation_period = ActiveValue::Set(rotation_period);
        }
        if let Some(surface_water) = changes.surface_water {
            planet_am.surface_water = ActiveValue::Set(surface_water);
        }
        if let Some(terrain) = changes.terrain {
            planet_am.terrain = ActiveValue::Set(terrain);
        }
        if let Some(url) = changes.url {
            planet_am.url = ActiveValue::Set(url);
        }
        planet_am.edited_at = ActiveValue::Set(Utc::now().naive_utc());

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
