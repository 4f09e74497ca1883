//! Key-value access to the `globals` table.
//!
//! This table backs persistent site-wide settings as well as the schema
//! versions written by the lifecycle in [`crate::db::schema`]. Values are
//! typed: a row carries an integer, a string, or both.

use crate::config::settings::SettingsConfig;
use crate::entities::global;
use crate::errors::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use tracing::{debug, info, instrument};

async fn find_by_key(db: &DatabaseConnection, key: &str) -> Result<Option<global::Model>> {
    let row = global::Entity::find()
        .filter(global::Column::Key.eq(key))
        .one(db)
        .await?;
    Ok(row)
}

/// Retrieves the integer value stored under `key`, if any.
#[instrument(skip(db))]
pub async fn get_int_value(db: &DatabaseConnection, key: &str) -> Result<Option<i32>> {
    let value = find_by_key(db, key).await?.and_then(|row| row.int_value);
    debug!("Global int for key '{}': {:?}", key, value);
    Ok(value)
}

/// Retrieves the string value stored under `key`, if any.
#[instrument(skip(db))]
pub async fn get_string_value(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let value = find_by_key(db, key).await?.and_then(|row| row.string_value);
    debug!("Global string for key '{}': {:?}", key, value);
    Ok(value)
}

/// Sets or updates the integer value stored under `key` (UPSERT behavior).
#[instrument(skip(db))]
pub async fn set_int_value(db: &DatabaseConnection, key: &str, value: i32) -> Result<()> {
    match find_by_key(db, key).await? {
        Some(row) => {
            let mut active: global::ActiveModel = row.into();
            active.int_value = Set(Some(value));
            active.update(db).await?;
        }
        None => {
            global::ActiveModel {
                key: Set(key.to_string()),
                int_value: Set(Some(value)),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }
    info!("Set global: {} = {}", key, value);
    Ok(())
}

/// Sets or updates the string value stored under `key` (UPSERT behavior).
#[instrument(skip(db))]
pub async fn set_string_value(db: &DatabaseConnection, key: &str, value: &str) -> Result<()> {
    match find_by_key(db, key).await? {
        Some(row) => {
            let mut active: global::ActiveModel = row.into();
            active.string_value = Set(Some(value.to_string()));
            active.update(db).await?;
        }
        None => {
            global::ActiveModel {
                key: Set(key.to_string()),
                string_value: Set(Some(value.to_string())),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }
    info!("Set global: {} = {}", key, value);
    Ok(())
}

/// Seeds settings from the TOML config that are not present yet.
///
/// Existing rows are never overwritten, so a site that changed a setting
/// keeps its value across re-runs.
#[instrument(skip(db, config))]
pub async fn seed_site_settings(db: &DatabaseConnection, config: &SettingsConfig) -> Result<()> {
    let mut seeded = 0usize;
    for setting in &config.settings {
        if find_by_key(db, &setting.key).await?.is_some() {
            debug!("Setting '{}' already present, skipping", setting.key);
            continue;
        }
        global::ActiveModel {
            key: Set(setting.key.clone()),
            int_value: Set(setting.int_value),
            string_value: Set(setting.string_value.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        seeded += 1;
    }
    info!("Seeded {} site setting(s).", seeded);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::SettingConfig;
    use crate::db::test_utils::{init_test_tracing, setup_test_db};

    #[tokio::test]
    async fn test_set_and_get_new_keys() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        set_string_value(&db, "site.title", "Inkpress Comics").await?;
        set_int_value(&db, "site.pages_per_feed", 10).await?;

        assert_eq!(
            get_string_value(&db, "site.title").await?,
            Some("Inkpress Comics".to_string())
        );
        assert_eq!(get_int_value(&db, "site.pages_per_feed").await?, Some(10));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_updates_existing_key() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        set_int_value(&db, "site.pages_per_feed", 10).await?;
        set_int_value(&db, "site.pages_per_feed", 25).await?;

        assert_eq!(get_int_value(&db, "site.pages_per_feed").await?, Some(25));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_key_returns_none() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        assert_eq!(get_string_value(&db, "no.such.key").await?, None);
        assert_eq!(get_int_value(&db, "no.such.key").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_never_overwrites() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        set_string_value(&db, "site.title", "Changed By Admin").await?;

        let config = SettingsConfig {
            settings: vec![
                SettingConfig {
                    key: "site.title".to_string(),
                    int_value: None,
                    string_value: Some("Default Title".to_string()),
                },
                SettingConfig {
                    key: "site.pages_per_feed".to_string(),
                    int_value: Some(10),
                    string_value: None,
                },
            ],
        };
        seed_site_settings(&db, &config).await?;
        // Run twice: seeding is idempotent.
        seed_site_settings(&db, &config).await?;

        assert_eq!(
            get_string_value(&db, "site.title").await?,
            Some("Changed By Admin".to_string()),
            "seeding must not overwrite an existing setting"
        );
        assert_eq!(get_int_value(&db, "site.pages_per_feed").await?, Some(10));
        Ok(())
    }
}
