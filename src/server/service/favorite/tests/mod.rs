mod create_favorite;

use holonet_test_utils::prelude::*;

use crate::server::{
    data::favorite::FavoriteRepository,
    error::{catalog::CatalogError, favorite::FavoriteError, user::UserError, Error},
    service::favorite::FavoriteService,
};
