use sea_orm::ActiveModelTrait;

use crate::{error::TestError, fixtures::factory, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl UserFixtures<'_> {
    /// Inserts an active user with the fixture password
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        Ok(factory::mock_user(email).insert(&self.setup.db).await?)
    }
}
