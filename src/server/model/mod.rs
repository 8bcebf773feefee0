//! Server application models and type definitions.
//!
//! This module contains the application state shared by the HTTP handlers, database model
//! type aliases, and conversions from database models into API DTOs.

pub mod app;
pub mod db;
pub mod dto;
