//! Connection bootstrap.
//!
//! There is deliberately no module-level connection: `init_db` hands the
//! caller an owned [`DatabaseConnection`] after making sure the schema is
//! in place.

use crate::db::schema::create_tables;
use crate::errors::Result;
use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, info, instrument};

/// Opens the database and ensures all managed tables exist at their
/// current schema version.
#[instrument]
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Initializing database connection to: {}", database_url);
    let db = Database::connect(database_url).await?;

    info!("Database connection opened. Ensuring tables are created...");
    create_tables(&db).await?;

    Ok(db)
}
