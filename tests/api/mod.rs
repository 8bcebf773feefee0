//! End-to-end scenarios sent through the full router.
//!
//! Requests are dispatched with `oneshot`, covering path extraction, JSON bodies and the error
//! payload shape on top of the handlers.

mod catalog;
mod docs;
mod favorite;
mod user;

use axum::http::StatusCode;
use holonet_test_utils::prelude::*;
use serde_json::json;

use crate::util::{json_request, read_json, send, TestContextExt};
