//! Favorites service layer.
//!
//! Users favorite summary records (people & planets). Existence checks, the duplicate check and
//! the write of each operation share one transaction.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            catalog::{people::PeopleRepository, planets::PlanetsRepository},
            favorite::FavoriteRepository,
            user::UserRepository,
        },
        error::{catalog::CatalogError, favorite::FavoriteError, user::UserError, Error},
        service::retry::RetryContext,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every favorite of every user ordered by ID.
    pub async fn get_all_favorites(&self) -> Result<Vec<FavoriteDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("listing of all favorites", || {
            let db = db.clone();

            Box::pin(async move {
                let favorites = FavoriteRepository::new(&db).get_all().await?;

                Ok(favorites.into_iter().map(FavoriteDto::from).collect())
            })
        })
        .await
    }

    /// Retrieves the favorites of a single user.
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - Favorites of the user, empty if they have none
    /// - `Err(Error::UserError(UserNotFound))` - No user exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("listing of favorites for user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                if UserRepository::new(&db).get_by_id(user_id).await?.is_none() {
                    return Err(UserError::UserNotFound(user_id).into());
                }

                let favorites = FavoriteRepository::new(&db)
                    .get_many_by_user_id(user_id)
                    .await?;

                Ok(favorites.into_iter().map(FavoriteDto::from).collect())
            })
        })
        .await
    }

    /// Favorites a planets summary for a user.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - Favorite created
    /// - `Err(Error::UserError(UserNotFound))` - No user exists with the provided ID
    /// - `Err(Error::CatalogError(PlanetsNotFound))` - No planets summary exists with the provided ID
    /// - `Err(Error::FavoriteError(PlanetAlreadyFavorited))` - The user already favorited the planet
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!(
                "creation of favorite for user ID {} & planet ID {}",
                user_id, planet_id
            ),
            || {
                let db = db.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;

                    if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
                        return Err(UserError::UserNotFound(user_id).into());
                    }
                    if PlanetsRepository::new(&txn)
                        .get_by_id(planet_id)
                        .await?
                        .is_none()
                    {
                        return Err(CatalogError::PlanetsNotFound(planet_id).into());
                    }

                    let favorite_repo = FavoriteRepository::new(&txn);
                    if favorite_repo
                        .get_planet_favorite(user_id, planet_id)
                        .await?
                        .is_some()
                    {
                        return Err(FavoriteError::PlanetAlreadyFavorited {
                            user_id,
                            planet_id,
                        }
                        .into());
                    }

                    let favorite = favorite_repo.create_for_planet(user_id, planet_id).await?;
                    txn.commit().await?;

                    tracing::info!(
                        user_id = %user_id,
                        planet_id = %planet_id,
                        "Created planet favorite"
                    );

                    Ok(favorite.into())
                })
            },
        )
        .await
    }

    /// Favorites a people summary for a user.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - Favorite created
    /// - `Err(Error::UserError(UserNotFound))` - No user exists with the provided ID
    /// - `Err(Error::CatalogError(PeopleNotFound))` - No people summary exists with the provided ID
    /// - `Err(Error::FavoriteError(PeopleAlreadyFavorited))` - The user already favorited the person
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_people_favorite(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<FavoriteDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!(
                "creation of favorite for user ID {} & people ID {}",
                user_id, people_id
            ),
            || {
                let db = db.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;

                    if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
                        return Err(UserError::UserNotFound(user_id).into());
                    }
                    if PeopleRepository::new(&txn)
                        .get_by_id(people_id)
                        .await?
                        .is_none()
                    {
                        return Err(CatalogError::PeopleNotFound(people_id).into());
                    }

                    let favorite_repo = FavoriteRepository::new(&txn);
                    if favorite_repo
                        .get_people_favorite(user_id, people_id)
                        .await?
                        .is_some()
                    {
                        return Err(FavoriteError::PeopleAlreadyFavorited {
                            user_id,
                            people_id,
                        }
                        .into());
                    }

                    let favorite = favorite_repo.create_for_people(user_id, people_id).await?;
                    txn.commit().await?;

                    tracing::info!(
                        user_id = %user_id,
                        people_id = %people_id,
                        "Created people favorite"
                    );

                    Ok(favorite.into())
                })
            },
        )
        .await
    }

    /// Removes the favorite a user holds on a planets summary.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted
    /// - `Err(Error::FavoriteError(PlanetFavoriteNotFound))` - No matching favorite exists
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete_planet_favorite(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!(
                "deletion of favorite for user ID {} & planet ID {}",
                user_id, planet_id
            ),
            || {
                let db = db.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let favorite_repo = FavoriteRepository::new(&txn);

                    let favorite = favorite_repo
                        .get_planet_favorite(user_id, planet_id)
                        .await?
                        .ok_or(FavoriteError::PlanetFavoriteNotFound { user_id, planet_id })?;

                    favorite_repo.delete(favorite.id).await?;
                    txn.commit().await?;

                    Ok(())
                })
            },
        )
        .await
    }

    /// Removes the favorite a user holds on a people summary.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted
    /// - `Err(Error::FavoriteError(PeopleFavoriteNotFound))` - No matching favorite exists
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete_people_favorite(&self, user_id: i32, people_id: i32) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!(
                "deletion of favorite for user ID {} & people ID {}",
                user_id, people_id
            ),
            || {
                let db = db.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let favorite_repo = FavoriteRepository::new(&txn);

                    let favorite = favorite_repo
                        .get_people_favorite(user_id, people_id)
                        .await?
                        .ok_or(FavoriteError::PeopleFavoriteNotFound { user_id, people_id })?;

                    favorite_repo.delete(favorite.id).await?;
                    txn.commit().await?;

                    Ok(())
                })
            },
        )
        .await
    }
}
