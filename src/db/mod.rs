//! Database access layer.
//!
//! `connection` bootstraps a connection and ensures the schema; `schema`
//! owns the managed-table lifecycle; the remaining modules are per-entity
//! query helpers.

pub mod admin_log;
pub mod blog;
pub mod connection;
pub mod globals;
pub mod pages;
pub mod schema;
pub(crate) mod test_utils;
pub mod transcripts;
pub mod users;

pub use connection::init_db;
pub use schema::{
    ManagedTable, SCHEMA_VERSION_PREFIX, create_tables, drop_all_tables, stored_schema_version,
};
