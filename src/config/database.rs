//! Database configuration.
//!
//! Resolves the connection URL from the environment with a local SQLite
//! fallback. The `mode=rwc` query parameter lets SQLx create the file on
//! first run.

/// Default SQLite database location when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/inkpress.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or
/// returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}
