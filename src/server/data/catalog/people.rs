use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::data::{catalog::SummaryRepository, favorite::FavoriteRepository};

pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all people summaries ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::people::Model>, DbErr> {
        entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, people_id: i32) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find_by_id(people_id)
            .one(self.db)
            .await
    }

    /// Gets a people summary along with the detailed person it mirrors
    ///
    /// # Returns
    /// - `Some((summary, Some(person)))`: Summary linked to an existing person
    /// - `Some((summary, None))`: Summary without a detailed person
    /// - `None`: No summary exists with the provided ID
    pub async fn get_with_person(
        &self,
        people_id: i32,
    ) -> Result<Option<(entity::people::Model, Option<entity::person::Model>)>, DbErr> {
        entity::prelude::People::find_by_id(people_id)
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await
    }
}

impl<C: ConnectionTrait> SummaryRepository for PeopleRepository<'_, C> {
    type Model = entity::people::Model;

    async fn find_by_detail_id(
        &self,
        person_id: i32,
    ) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find()
            .filter(entity::people::Column::PersonId.eq(person_id))
            .one(self.db)
            .await
    }

    async fn find_conflicting(
        &self,
        name: &str,
        url: &str,
        person_id: i32,
    ) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find()
            .filter(
                Condition::any()
                    .add(entity::people::Column::Name.eq(name))
                    .add(entity::people::Column::Url.eq(url)),
            )
            .filter(
                Condition::any()
                    .add(entity::people::Column::PersonId.is_null())
                    .add(entity::people::Column::PersonId.ne(person_id)),
            )
            .one(self.db)
            .await
    }

    async fn create(
        &self,
        name: String,
        url: String,
        person_id: i32,
    ) -> Result<entity::people::Model, DbErr> {
        let people = entity::people::ActiveModel {
            name: ActiveValue::Set(name),
            url: ActiveValue::Set(url),
            person_id: ActiveValue::Set(Some(person_id)),
            ..Default::default()
        };

        people.insert(self.db).await
    }

    async fn update_name_and_url(
        &self,
        people: entity::people::Model,
        name: String,
        url: String,
    ) -> Result<entity::people::Model, DbErr> {
        if people.name == name && people.url == url {
            return Ok(people);
        }

        let mut people_am = people.into_active_model();
        people_am.name = ActiveValue::Set(name);
        people_am.url = ActiveValue::Set(url);

        people_am.update(self.db).await
    }

    async fn delete(&self, people: entity::people::Model) -> Result<(), DbErr> {
        FavoriteRepository::new(self.db)
            .delete_by_people_id(people.id)
            .await?;

        entity::prelude::People::delete_by_id(people.id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
