
use holonet_test_utils::prelude::*;

use crate::server::{
    data::catalog::{people::PeopleRepository, planets::PlanetsRepository},
    error::{catalog::CatalogError, Error},
    util::test::{mock_create_person_dto, mock_create_planet_dto},
};
