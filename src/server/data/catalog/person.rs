use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::model::people::{CreatePersonDto, UpdatePersonDto};

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a detailed person record, `created_at` & `edited_at` are set to now
    pub async fn create(&self, person: CreatePersonDto) -> Result<entity::person::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let person = entity::person::ActiveModel {
            birth_year: ActiveValue::Set(person.birth_year),
            eye_color: ActiveValue::Set(person.eye_color),
            films: ActiveValue::Set(person.films.into()),
            gender: ActiveValue::Set(person.gender),
            hair_color: ActiveValue::Set(person.hair_color),
            height: ActiveValue::Set(person.height),
            homeworld: ActiveValue::Set(person.homeworld),
            mass: ActiveValue::Set(person.mass),
            name: ActiveValue::Set(person.name),
            skin_color: ActiveValue::Set(person.skin_color),
            created_at: ActiveValue::Set(now),
            edited_at: ActiveValue::Set(now),
            species: ActiveValue::Set(person.species.into()),
            starships: ActiveValue::Set(person.starships.into()),
            url: ActiveValue::Set(person.url),
            vehicles: ActiveValue::Set(person.vehicles.into()),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    /// Applies the provided changes to a person and bumps `edited_at`
    ///
    /// # Returns
    /// - `Some(`[`entity::person::Model`]`)`: The updated person
    /// - `None`: No person exists with the provided ID
    pub async fn update(
        &self,
        person_id: i32,
        changes: UpdatePersonDto,
    ) -> Result<Option<entity::person::Model>, DbErr> {
        let person = match entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await?
        {
            Some(person) => person,
            None => return Ok(None),
        };

        let mut person_am = person.into_active_model();
        if let Some(birth_year) = changes.birth_year {
            person_am.birth_year = ActiveValue::Set(birth_year);
        }
        if let Some(eye_color) = changes.eye_color {
            person_am.eye_color = ActiveValue::Set(eye_color);
        }
        if let Some(films) = changes.films {
            person_am.films = ActiveValue::Set(films.into());
        }
        if let Some(gender) = changes.gender {
            person_am.gender = ActiveValue::Set(gender);
        }
        if let Some(hair_color) = changes.hair_color {
            person_am.hair_color = ActiveValue::Set(hair_color);
        }
        if let Some(height) = changes.height {
            person_am.height = ActiveValue::Set(height);
        }
        if let Some(homeworld) = changes.homeworld {
            person_am.homeworld = ActiveValue::Set(homeworld);
        }
        if let Some(mass) = changes.mass {
            person_am.mass = ActiveValue::Set(mass);
        }
        if let Some(name) = changes.name {
            person_am.name = ActiveValue::Set(name);
        }
        if let Some(skin_color) = changes.skin_color {
            person_am.skin_color = ActiveValue::Set(skin_color);
        }
        if let Some(species) = changes.species {
            person_am.species = ActiveValue::Set(species.into());
        }
        if let Some(starships) = changes.starships {
            person_am.starships = ActiveValue::Set(starships.into());
        }
        if let Some(url) = changes.url {
            person_am.url = ActiveValue::Set(url);
        }
        if let Some(vehicles) = changes.vehicles {
            person_am.vehicles = ActiveValue::Set(vehicles.into());
        }
        person_am.edited_at = ActiveValue::Set(Utc::now().naive_utc());

        let person = person_am.update(self.db).await?;

        Ok(Some(person))
    }

    pub async fn delete(&self, person_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Person::delete_by_id(person_id)
            .exec(self.db)
            .await
    }
}
