use serde::{Deserialize, Serialize};

/// A user as returned by the API, the password is never serialized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
}

/// Fields of a user that may be changed, omitted fields are left untouched
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}
