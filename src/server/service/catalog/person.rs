use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::people::{CreatePersonDto, PeopleDto, PersonDto, UpdatePersonDto},
    server::{
        data::catalog::{people::PeopleRepository, person::PersonRepository},
        error::{catalog::CatalogError, Error},
        service::{catalog::sync::SummarySync, retry::RetryContext},
        util::validate::{validate_new_person, validate_person_changes},
    },
};

/// Service for the people catalog: detailed persons and their people summaries.
pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    /// Creates a new instance of PersonService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every people summary ordered by ID.
    pub async fn list_people(&self) -> Result<Vec<PeopleDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("listing of all people", || {
            let db = db.clone();

            Box::pin(async move {
                let people = PeopleRepository::new(&db).get_all().await?;

                Ok(people.into_iter().map(PeopleDto::from).collect())
            })
        })
        .await
    }

    /// Retrieves the detailed person mirrored by a people summary.
    ///
    /// # Arguments
    /// - `people_id` - ID of the people *summary*
    ///
    /// # Returns
    /// - `Ok(PersonDto)` - Detailed person of the summary
    /// - `Err(Error::CatalogError(PeopleNotFound))` - No summary exists with the provided ID
    /// - `Err(Error::CatalogError(DetailedPersonNotFound))` - The summary has no detailed person
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_person(&self, people_id: i32) -> Result<PersonDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("lookup of people ID {}", people_id), || {
            let db = db.clone();

            Box::pin(async move {
                let (_, maybe_person) = PeopleRepository::new(&db)
                    .get_with_person(people_id)
                    .await?
                    .ok_or(CatalogError::PeopleNotFound(people_id))?;

                let person = maybe_person.ok_or(CatalogError::DetailedPersonNotFound(people_id))?;

                Ok(person.into())
            })
        })
        .await
    }

    /// Creates a detailed person along with its people summary.
    ///
    /// # Returns
    /// - `Ok(PersonDto)` - Person & summary created
    /// - `Err(Error::ValidationError)` - Name or url is blank, or a field exceeds its column
    /// - `Err(Error::CatalogError(SummaryTaken))` - Another summary uses the name or url,
    ///   nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_person(&self, person: CreatePersonDto) -> Result<PersonDto, Error> {
        validate_new_person(&person)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("creation of person {}", person.name), || {
            let db = db.clone();
            let person = person.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                let person = PersonRepository::new(&txn).create(person).await?;
                let people = SummarySync::new(PeopleRepository::new(&txn))
                    .sync(person.name.clone(), person.url.clone(), person.id)
                    .await?;

                txn.commit().await?;

                tracing::info!(
                    person_id = %person.id,
                    people_id = %people.id,
                    "Created person"
                );

                Ok(person.into())
            })
        })
        .await
    }

    /// Applies the provided changes to a detailed person and refreshes its summary.
    ///
    /// # Arguments
    /// - `person_id` - ID of the *detailed* person
    /// - `changes` - Fields to change, omitted fields are left untouched
    ///
    /// # Returns
    /// - `Ok(PersonDto)` - Person after the update
    /// - `Err(Error::ValidationError)` - Provided name or url is blank, or a field exceeds its
    ///   column
    /// - `Err(Error::CatalogError(PersonNotFound))` - No person exists with the provided ID
    /// - `Err(Error::CatalogError(SummaryTaken))` - Another summary uses the name or url,
    ///   nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn update_person(
        &self,
        person_id: i32,
        changes: UpdatePersonDto,
    ) -> Result<PersonDto, Error> {
        validate_person_changes(&changes)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update of person ID {}", person_id), || {
            let db = db.clone();
            let changes = changes.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                let person = PersonRepository::new(&txn)
                    .update(person_id, changes)
                    .await?
                    .ok_or(CatalogError::PersonNotFound(person_id))?;
                SummarySync::new(PeopleRepository::new(&txn))
                    .refresh(person.name.clone(), person.url.clone(), person.id)
                    .await?;

                txn.commit().await?;

                Ok(person.into())
            })
        })
        .await
    }

    /// Deletes a detailed person, its summary and the favorites on that summary.
    ///
    /// # Returns
    /// - `Ok(())` - Person deleted
    /// - `Err(Error::CatalogError(PersonNotFound))` - No person exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete_person(&self, person_id: i32) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("deletion of person ID {}", person_id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let person_repo = PersonRepository::new(&txn);

                if person_repo.get_by_id(person_id).await?.is_none() {
                    return Err(CatalogError::PersonNotFound(person_id).into());
                }

                let had_summary = SummarySync::new(PeopleRepository::new(&txn))
                    .remove(person_id)
                    .await?;
                person_repo.delete(person_id).await?;

                txn.commit().await?;

                tracing::info!(
                    person_id = %person_id,
                    had_summary = %had_summary,
                    "Deleted person"
                );

                Ok(())
            })
        })
        .await
    }
}
