use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{PeopleModel, PersonModel, PlanetModel, PlanetsModel},
    TestContext,
};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl CatalogFixtures<'_> {
    /// Inserts a detailed person without a summary
    pub async fn insert_person(&self, name: &str) -> Result<PersonModel, TestError> {
        Ok(factory::mock_person(name).insert(&self.setup.db).await?)
    }

    /// Inserts a people summary, optionally linked to a detailed person
    pub async fn insert_people(
        &self,
        name: &str,
        url: &str,
        person_id: Option<i32>,
    ) -> Result<PeopleModel, TestError> {
        let people = entity::people::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            url: ActiveValue::Set(url.to_string()),
            person_id: ActiveValue::Set(person_id),
            ..Default::default()
        };

        Ok(people.insert(&self.setup.db).await?)
    }

    /// Inserts a detailed person along with its matching summary
    pub async fn insert_person_with_summary(
        &self,
        name: &str,
    ) -> Result<(PersonModel, PeopleModel), TestError> {
        let person = self.insert_person(name).await?;
        let people = self
            .insert_people(&person.name, &person.url, Some(person.id))
            .await?;

        Ok((person, people))
    }

    /// Inserts a detailed planet without a summary
    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(factory::mock_planet(name).insert(&self.setup.db).await?)
    }

    /// Inserts a planets summary, optionally linked to a detailed planet
    pub async fn insert_planets(
        &self,
        name: &str,
        url: &str,
        planet_id: Option<i32>,
    ) -> Result<PlanetsModel, TestError> {
        let planets = entity::planets::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            url: ActiveValue::Set(url.to_string()),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        Ok(planets.insert(&self.setup.db).await?)
    }

    /// Inserts a detailed planet along with its matching summary
    pub async fn insert_planet_with_summary(
        &self,
        name: &str,
    ) -> Result<(PlanetModel, PlanetsModel), TestError> {
        let planet = self.insert_planet(name).await?;
        let planets = self
            .insert_planets(&planet.name, &planet.url, Some(planet.id))
            .await?;

        Ok((planet, planets))
    }
}
