//! Admin tool for the inkpress database: initialize the schema, inspect
//! stored schema versions, or wipe a development database.

use dotenvy::dotenv;
use inkpress::config;
use inkpress::db;
use inkpress::errors::{Error, Result};
use std::env;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: inkpress <init | status | reset [--yes-really]>";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str);

    let database_url = config::database::get_database_url();

    match command {
        Some("init") => {
            let db = db::init_db(&database_url)
                .await
                .inspect(|_| info!("Database initialized successfully."))
                .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

            // Seed default site settings when the file is present.
            if Path::new("settings.toml").exists() {
                let settings = config::settings::load_default_settings()?;
                db::globals::seed_site_settings(&db, &settings)
                    .await
                    .inspect_err(|e| error!("Failed to seed site settings: {}", e))?;
            } else {
                info!("No settings.toml found, skipping settings seed.");
            }
        }
        Some("status") => {
            let db = db::init_db(&database_url).await?;
            for table in db::ManagedTable::ALL {
                let version = db::stored_schema_version(&db, table).await?;
                println!(
                    "{:<12} schema version {}",
                    table.type_name(),
                    version.map_or_else(|| "-".to_string(), |v| v.to_string())
                );
            }
        }
        Some("reset") => {
            let confirmed = args.iter().any(|a| a == "--yes-really");
            if confirmed {
                warn!("Dropping all managed tables in {}", database_url);
            }
            let db = sea_orm::Database::connect(&database_url).await?;
            db::drop_all_tables(&db, confirmed)
                .await
                .inspect(|()| info!("All tables dropped."))
                .inspect_err(|e| error!("Reset refused: {}", e))?;
        }
        _ => {
            eprintln!("{USAGE}");
            return Err(Error::Config("unknown command".to_string()));
        }
    }

    Ok(())
}
