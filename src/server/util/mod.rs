//! Utility functions and helpers for server operations.
//!
//! This module provides reusable request validation used by the services before any write
//! reaches the database.

pub mod validate;
