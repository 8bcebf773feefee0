use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::FavoriteModel, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl FavoriteFixtures<'_> {
    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(Some(planet_id)),
            people_id: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(favorite.insert(&self.setup.db).await?)
    }

    pub async fn insert_people_favorite(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(None),
            people_id: ActiveValue::Set(Some(people_id)),
            ..Default::default()
        };

        Ok(favorite.insert(&self.setup.db).await?)
    }
}
