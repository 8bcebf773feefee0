//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying the status code mapped from
//! each service outcome.

mod favorite;
mod people;
mod planet;
mod user;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::server::controller::extract::{Json, Path};
use holonet_test_utils::prelude::*;

use crate::util::TestContextExt;
