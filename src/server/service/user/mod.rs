//! User service layer.
//!
//! This module contains the business logic for user account management. Writes touching more
//! than one row run inside a single transaction with retry logic for transient failures.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{user::UserError, Error},
        service::retry::RetryContext,
        util::validate::{validate_new_user, validate_user_changes},
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by ID.
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("listing of all users", || {
            let db = db.clone();

            Box::pin(async move {
                let users = UserRepository::new(&db).get_all().await?;

                Ok(users.into_iter().map(UserDto::from).collect())
            })
        })
        .await
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::UserError(UserNotFound))` - No user exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("lookup of user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let user = UserRepository::new(&db)
                    .get_by_id(user_id)
                    .await?
                    .ok_or(UserError::UserNotFound(user_id))?;

                Ok(user.into())
            })
        })
        .await
    }

    /// Creates a new active user.
    ///
    /// The email uniqueness check and the insert share one transaction.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User created
    /// - `Err(Error::ValidationError)` - Email or password rejected
    /// - `Err(Error::UserError(EmailTaken))` - Another user already uses the email
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        validate_new_user(&user)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("creation of user", || {
            let db = db.clone();
            let user = user.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let user_repo = UserRepository::new(&txn);

                if user_repo.get_by_email(&user.email).await?.is_some() {
                    return Err(UserError::EmailTaken(user.email).into());
                }

                let user = user_repo.create(user).await?;
                txn.commit().await?;

                tracing::info!(user_id = %user.id, "Created user");

                Ok(user.into())
            })
        })
        .await
    }

    /// Applies the provided changes to a user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User after the update
    /// - `Err(Error::ValidationError)` - A provided field was rejected
    /// - `Err(Error::UserError(UserNotFound))` - No user exists with the provided ID
    /// - `Err(Error::UserError(EmailTaken))` - The new email belongs to another user
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn update_user(
        &self,
        user_id: i32,
        changes: UpdateUserDto,
    ) -> Result<UserDto, Error> {
        validate_user_changes(&changes)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update of user ID {}", user_id), || {
            let db = db.clone();
            let changes = changes.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let user_repo = UserRepository::new(&txn);

                if user_repo.get_by_id(user_id).await?.is_none() {
                    return Err(UserError::UserNotFound(user_id).into());
                }

                if let Some(email) = &changes.email {
                    if let Some(owner) = user_repo.get_by_email(email).await? {
                        if owner.id != user_id {
                            return Err(UserError::EmailTaken(email.clone()).into());
                        }
                    }
                }

                let user = user_repo
                    .update(user_id, changes)
                    .await?
                    .ok_or(UserError::UserNotFound(user_id))?;
                txn.commit().await?;

                Ok(user.into())
            })
        })
        .await
    }

    /// Deletes a user along with all of their favorites.
    ///
    /// # Returns
    /// - `Ok(())` - User & favorites deleted
    /// - `Err(Error::UserError(UserNotFound))` - No user exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("deletion of user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let user_repo = UserRepository::new(&txn);

                if user_repo.get_by_id(user_id).await?.is_none() {
                    return Err(UserError::UserNotFound(user_id).into());
                }

                let favorites = FavoriteRepository::new(&txn)
                    .delete_by_user_id(user_id)
                    .await?;
                user_repo.delete(user_id).await?;
                txn.commit().await?;

                tracing::info!(
                    user_id = %user_id,
                    favorites_deleted = %favorites.rows_affected,
                    "Deleted user"
                );

                Ok(())
            })
        })
        .await
    }
}
