//! Constant values shared by test fixtures.

/// Base url used when building catalog entry urls for fixtures.
pub static TEST_CATALOG_URL: &str = "https://swapi.dev/api";

/// Password assigned to every fixture user.
pub static TEST_PASSWORD: &str = "password";
