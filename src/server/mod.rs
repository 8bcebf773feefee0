//! Server application core modules.
//!
//! This module contains all server-side functionality of holonet, including HTTP routing,
//! database repositories, the services keeping detailed and summary catalog records in sync,
//! favorites management, configuration and startup.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
