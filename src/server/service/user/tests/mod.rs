
use holonet_test_utils::prelude::*;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
        service::user::UserService,
    },
};
