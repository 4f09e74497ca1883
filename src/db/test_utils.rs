#![allow(dead_code)]
use crate::db::schema::create_tables;
use crate::entities::{asset, page, series, user};
use crate::errors::Result;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer() // Crucial for `cargo test` output
        .try_init(); // Use try_init to avoid panic if already initialized
}

// Helper to create an in-memory database for testing, with the schema
// lifecycle already run.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

// Quick fixtures for tests that need a user / series / page to hang
// records off of.

pub(crate) async fn insert_test_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<user::Model> {
    let model = user::ActiveModel {
        username: Set(username.to_string()),
        display_name: Set(format!("{username} (display)")),
        homepage: Set(None),
        pwhash: Set("$2b$12$test-hash".to_string()),
        email: Set(format!("{username}@example.com")),
        is_admin: Set(false),
        reset_key: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

pub(crate) async fn insert_test_series(
    db: &DatabaseConnection,
    owner_id: i64,
    title: &str,
) -> Result<series::Model> {
    let model = series::ActiveModel {
        owner_id: Set(owner_id),
        title: Set(title.to_string()),
        theme_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

pub(crate) async fn insert_test_page(
    db: &DatabaseConnection,
    series_id: i64,
    title: &str,
) -> Result<page::Model> {
    let model = page::ActiveModel {
        series_id: Set(series_id),
        chapter_id: Set(None),
        title: Set(title.to_string()),
        publish_date: Set(Utc::now()),
        is_visible: Set(false),
        notes: Set(None),
        theme_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

pub(crate) async fn insert_test_asset(
    db: &DatabaseConnection,
    user_id: i64,
    file: &str,
) -> Result<asset::Model> {
    let model = asset::ActiveModel {
        user_id: Set(user_id),
        content_file: Set(Some(file.to_string())),
        content_text: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}
