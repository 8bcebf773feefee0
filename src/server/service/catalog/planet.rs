use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto, PlanetsDto, UpdatePlanetDto},
    server::{
        data::catalog::{planet::PlanetRepository, planets::PlanetsRepository},
        error::{catalog::CatalogError, Error},
        service::{catalog::sync::SummarySync, retry::RetryContext},
        util::validate::{validate_new_planet, validate_planet_changes},
    },
};

/// Service for the planets catalog: detailed planets and their planets summaries.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every planets summary ordered by ID.
    pub async fn list_planets(&self) -> Result<Vec<PlanetsDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("listing of all planets", || {
            let db = db.clone();

            Box::pin(async move {
                let planets = PlanetsRepository::new(&db).get_all().await?;

                Ok(planets.into_iter().map(PlanetsDto::from).collect())
            })
        })
        .await
    }

    /// Retrieves the detailed planet mirrored by a planets summary.
    ///
    /// # Arguments
    /// - `planets_id` - ID of the planets *summary*
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Detailed planet of the summary
    /// - `Err(Error::CatalogError(PlanetsNotFound))` - No summary exists with the provided ID
    /// - `Err(Error::CatalogError(DetailedPlanetNotFound))` - The summary has no detailed planet
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_planet(&self, planets_id: i32) -> Result<PlanetDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("lookup of planets ID {}", planets_id), || {
            let db = db.clone();

            Box::pin(async move {
                let (_, maybe_planet) = PlanetsRepository::new(&db)
                    .get_with_planet(planets_id)
                    .await?
                    .ok_or(CatalogError::PlanetsNotFound(planets_id))?;

                let planet = maybe_planet.ok_or(CatalogError::DetailedPlanetNotFound(planets_id))?;

                Ok(planet.into())
            })
        })
        .await
    }

    /// Creates a detailed planet along with its planets summary.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet & summary created
    /// - `Err(Error::ValidationError)` - Name or url is blank, or a field exceeds its column
    /// - `Err(Error::CatalogError(SummaryTaken))` - Another summary uses the name or url,
    ///   nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        validate_new_planet(&planet)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("creation of planet {}", planet.name), || {
            let db = db.clone();
            let planet = planet.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                let planet = PlanetRepository::new(&txn).create(planet).await?;
                let planets = SummarySync::new(PlanetsRepository::new(&txn))
                    .sync(planet.name.clone(), planet.url.clone(), planet.id)
                    .await?;

                txn.commit().await?;

                tracing::info!(
                    planet_id = %planet.id,
                    planets_id = %planets.id,
                    "Created planet"
                );

                Ok(planet.into())
            })
        })
        .await
    }

    /// Applies the provided changes to a detailed planet and refreshes its summary.
    ///
    /// # Arguments
    /// - `planet_id` - ID of the *detailed* planet
    /// - `changes` - Fields to change, omitted fields are left untouched
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet after the update
    /// - `Err(Error::ValidationError)` - Provided name or url is blank, or a field exceeds its
    ///   column
    /// - `Err(Error::CatalogError(PlanetNotFound))` - No planet exists with the provided ID
    /// - `Err(Error::CatalogError(SummaryTaken))` - Another summary uses the name or url,
    ///   nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn update_planet(
        &self,
        planet_id: i32,
        changes: UpdatePlanetDto,
    ) -> Result<PlanetDto, Error> {
        validate_planet_changes(&changes)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update of planet ID {}", planet_id), || {
            let db = db.clone();
            let changes = changes.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                let planet = PlanetRepository::new(&txn)
                    .update(planet_id, changes)
                    .await?
                    .ok_or(CatalogError::PlanetNotFound(planet_id))?;
                SummarySync::new(PlanetsRepository::new(&txn))
                    .refresh(planet.name.clone(), planet.url.clone(), planet.id)
                    .await?;

                txn.commit().await?;

                Ok(planet.into())
            })
        })
        .await
    }

    /// Deletes a detailed planet, its summary and the favorites on that summary.
    ///
    /// # Returns
    /// - `Ok(())` - Planet deleted
    /// - `Err(Error::CatalogError(PlanetNotFound))` - No planet exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete_planet(&self, planet_id: i32) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("deletion of planet ID {}", planet_id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let planet_repo = PlanetRepository::new(&txn);

                if planet_repo.get_by_id(planet_id).await?.is_none() {
                    return Err(CatalogError::PlanetNotFound(planet_id).into());
                }

                let had_summary = SummarySync::new(PlanetsRepository::new(&txn))
                    .remove(planet_id)
                    .await?;
                planet_repo.delete(planet_id).await?;

                txn.commit().await?;

                tracing::info!(
                    planet_id = %planet_id,
                    had_summary = %had_summary,
                    "Deleted planet"
                );

                Ok(())
            })
        })
        .await
    }
}
