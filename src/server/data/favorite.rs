use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite linking a user to a planets summary
    pub async fn create_for_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(Some(planet_id)),
            people_id: ActiveValue::Set(None),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Creates a favorite linking a user to a people summary
    pub async fn create_for_people(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(None),
            people_id: ActiveValue::Set(Some(people_id)),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets all favorites ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all favorites of the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the favorite of a user for a planets summary
    pub async fn get_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await
    }

    /// Gets the favorite of a user for a people summary
    pub async fn get_people_favorite(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::PeopleId.eq(people_id))
            .one(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every favorite of the provided user ID
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Deletes every favorite referencing the provided planets summary ID
    pub async fn delete_by_planet_id(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::PlanetId.eq(planet_id))
            .exec(self.db)
            .await
    }

    /// Deletes every favorite referencing the provided people summary ID
    pub async fn delete_by_people_id(&self, people_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::PeopleId.eq(people_id))
            .exec(self.db)
            .await
    }
}
