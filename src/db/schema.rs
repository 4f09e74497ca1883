//! Schema lifecycle - managed-table registry, versioned table creation,
//! and the guarded destructive reset.
//!
//! Every managed table stores its current schema version as an integer in
//! the `globals` table under `schemaVersion.<TypeName>`. On `create_tables`
//! the stored version is handed to the table's migration hook, which runs
//! any outstanding migration steps and returns the version the table is now
//! at. The whole operation, table creation included, runs inside a single
//! transaction so a failed migration leaves the database untouched.

use crate::entities::{
    admin_log, asset, blog_entry, chapter, global, page, page_content, series, story, theme,
    transcript, user,
};
use crate::errors::{Error, Result};
use sea_orm::sea_query::{Index, IndexCreateStatement, Table, TableCreateStatement, TableRef};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityName, EntityTrait, QueryFilter, Schema, TransactionTrait,
};
use tracing::{debug, info, instrument, warn};

/// Key prefix under which per-table schema versions live in `globals`.
pub const SCHEMA_VERSION_PREFIX: &str = "schemaVersion.";

/// A table under lifecycle management: created, version-tracked, and
/// dropped by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagedTable {
    /// Key-value settings store (holds the schema versions themselves)
    Global,
    /// User accounts
    User,
    /// Administrative audit log
    AdminLog,
    /// Visual themes
    Theme,
    /// Comic series
    Series,
    /// Story arcs
    Story,
    /// Chapters
    Chapter,
    /// Comic pages
    Page,
    /// Uploaded assets
    Asset,
    /// Page/asset ordering join table
    PageContent,
    /// Reader transcripts
    Transcript,
    /// Blog entries
    BlogEntry,
}

impl ManagedTable {
    /// Every managed table, in creation order. `Global` MUST come first:
    /// the version bookkeeping below writes into it.
    pub const ALL: [Self; 12] = [
        Self::Global,
        Self::User,
        Self::AdminLog,
        Self::Theme,
        Self::Series,
        Self::Story,
        Self::Chapter,
        Self::Page,
        Self::Asset,
        Self::PageContent,
        Self::Transcript,
        Self::BlogEntry,
    ];

    /// Canonical type name used in the `schemaVersion.<TypeName>` key.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::User => "User",
            Self::AdminLog => "AdminLog",
            Self::Theme => "Theme",
            Self::Series => "Series",
            Self::Story => "Story",
            Self::Chapter => "Chapter",
            Self::Page => "Page",
            Self::Asset => "Asset",
            Self::PageContent => "PageContent",
            Self::Transcript => "Transcript",
            Self::BlogEntry => "BlogEntry",
        }
    }

    /// `globals` key holding this table's schema version.
    #[must_use]
    pub fn version_key(self) -> String {
        format!("{SCHEMA_VERSION_PREFIX}{}", self.type_name())
    }

    fn create_statement(self, schema: &Schema) -> TableCreateStatement {
        let mut stmt = match self {
            Self::Global => schema.create_table_from_entity(global::Entity),
            Self::User => schema.create_table_from_entity(user::Entity),
            Self::AdminLog => schema.create_table_from_entity(admin_log::Entity),
            Self::Theme => schema.create_table_from_entity(theme::Entity),
            Self::Series => schema.create_table_from_entity(series::Entity),
            Self::Story => schema.create_table_from_entity(story::Entity),
            Self::Chapter => schema.create_table_from_entity(chapter::Entity),
            Self::Page => schema.create_table_from_entity(page::Entity),
            Self::Asset => schema.create_table_from_entity(asset::Entity),
            Self::PageContent => schema.create_table_from_entity(page_content::Entity),
            Self::Transcript => schema.create_table_from_entity(transcript::Entity),
            Self::BlogEntry => schema.create_table_from_entity(blog_entry::Entity),
        };
        stmt.if_not_exists();
        stmt
    }

    fn index_statements(self, schema: &Schema) -> Vec<IndexCreateStatement> {
        let mut stmts = match self {
            Self::Global => schema.create_index_from_entity(global::Entity),
            Self::User => schema.create_index_from_entity(user::Entity),
            Self::AdminLog => schema.create_index_from_entity(admin_log::Entity),
            Self::Theme => schema.create_index_from_entity(theme::Entity),
            Self::Series => schema.create_index_from_entity(series::Entity),
            Self::Story => schema.create_index_from_entity(story::Entity),
            Self::Chapter => schema.create_index_from_entity(chapter::Entity),
            Self::Page => schema.create_index_from_entity(page::Entity),
            Self::Asset => schema.create_index_from_entity(asset::Entity),
            Self::PageContent => schema.create_index_from_entity(page_content::Entity),
            Self::Transcript => schema.create_index_from_entity(transcript::Entity),
            Self::BlogEntry => schema.create_index_from_entity(blog_entry::Entity),
        };
        // Composite index backing the per-user admin history listing
        if self == Self::AdminLog {
            stmts.push(
                Index::create()
                    .name("idx_admin_logs_user_id_timestamp")
                    .table(admin_log::Entity)
                    .col(admin_log::Column::UserId)
                    .col(admin_log::Column::Timestamp)
                    .to_owned(),
            );
        }
        for stmt in &mut stmts {
            stmt.if_not_exists();
        }
        stmts
    }

    fn table_ref(self) -> TableRef {
        match self {
            Self::Global => global::Entity.table_ref(),
            Self::User => user::Entity.table_ref(),
            Self::AdminLog => admin_log::Entity.table_ref(),
            Self::Theme => theme::Entity.table_ref(),
            Self::Series => series::Entity.table_ref(),
            Self::Story => story::Entity.table_ref(),
            Self::Chapter => chapter::Entity.table_ref(),
            Self::Page => page::Entity.table_ref(),
            Self::Asset => asset::Entity.table_ref(),
            Self::PageContent => page_content::Entity.table_ref(),
            Self::Transcript => transcript::Entity.table_ref(),
            Self::BlogEntry => blog_entry::Entity.table_ref(),
        }
    }

    /// Versioned migration hook.
    ///
    /// Gate migration steps on `from_version` thresholds, only when
    /// `check_update` is true (a freshly created table has nothing to
    /// migrate), and return the version the table is now at:
    ///
    /// ```ignore
    /// Self::Page => {
    ///     if check_update && from_version.unwrap_or(0) < 1 {
    ///         // add/rename columns via raw ALTER TABLE statements on txn
    ///     }
    ///     Ok(1)
    /// }
    /// ```
    ///
    /// Each step must be idempotent: a migration that already ran (version
    /// row says so) is never re-applied.
    #[allow(clippy::unused_async)]
    async fn update_schema(
        self,
        _txn: &DatabaseTransaction,
        _check_update: bool,
        _from_version: Option<i32>,
    ) -> Result<i32> {
        // No table has accumulated migrations yet; per-table arms slot in
        // above the catch-all as the schema evolves.
        Ok(0)
    }
}

/// Creates every managed table and runs its versioned migration hook.
///
/// Idempotent: tables are created `IF NOT EXISTS`, hooks only act on
/// version thresholds, and stored versions are simply rewritten with the
/// hook's return value. Everything runs in one transaction; any failure
/// rolls the whole operation back.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    let txn = db.begin().await?;

    for table in ManagedTable::ALL {
        debug!("Ensuring table for {}", table.type_name());
        txn.execute(builder.build(&table.create_statement(&schema)))
            .await?;
        for idx in table.index_statements(&schema) {
            txn.execute(builder.build(&idx)).await?;
        }
    }

    for table in ManagedTable::ALL {
        let key = table.version_key();
        let existing = global::Entity::find()
            .filter(global::Column::Key.eq(key.as_str()))
            .one(&txn)
            .await?;
        let (record, existed) = match existing {
            Some(model) => (model, true),
            None => {
                let inserted = global::ActiveModel {
                    key: Set(key.clone()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                (inserted, false)
            }
        };
        let from_version = record.int_value;
        let version = table.update_schema(&txn, existed, from_version).await?;
        debug!(
            "Schema version for {}: {:?} -> {}",
            table.type_name(),
            from_version,
            version
        );
        let mut record: global::ActiveModel = record.into();
        record.int_value = Set(Some(version));
        record.update(&txn).await?;
    }

    txn.commit().await?;
    info!("Database tables ensured and schema versions recorded.");
    Ok(())
}

/// Drops every managed table. Only for development purposes, hopefully.
///
/// Fails with [`Error::NotReallySure`] before touching storage unless
/// `i_am_really_sure` is true. When confirmed, drops run in reverse
/// creation order inside one transaction.
#[instrument(skip(db))]
pub async fn drop_all_tables(db: &DatabaseConnection, i_am_really_sure: bool) -> Result<()> {
    if !i_am_really_sure {
        return Err(Error::NotReallySure);
    }
    let builder = db.get_database_backend();
    let txn = db.begin().await?;
    for table in ManagedTable::ALL.iter().rev() {
        let stmt = Table::drop().table(table.table_ref()).if_exists().to_owned();
        txn.execute(builder.build(&stmt)).await?;
    }
    txn.commit().await?;
    warn!("All managed tables dropped.");
    Ok(())
}

/// Reads the stored schema version for one managed table, if the version
/// row exists yet.
pub async fn stored_schema_version(
    db: &DatabaseConnection,
    table: ManagedTable,
) -> Result<Option<i32>> {
    let row = global::Entity::find()
        .filter(global::Column::Key.eq(table.version_key().as_str()))
        .one(db)
        .await?;
    Ok(row.and_then(|r| r.int_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{init_test_tracing, setup_test_db};
    use crate::entities::{GlobalColumn, user};
    use sea_orm::{Database, PaginatorTrait};

    #[tokio::test]
    async fn test_create_tables_records_version_for_every_managed_table() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        for table in ManagedTable::ALL {
            let version = stored_schema_version(&db, table).await?;
            assert_eq!(
                version,
                Some(0),
                "{} should be at its hook's returned version",
                table.type_name()
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_twice_is_idempotent() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        let versions_before: Vec<_> = global::Entity::find()
            .filter(GlobalColumn::Key.starts_with(SCHEMA_VERSION_PREFIX))
            .all(&db)
            .await?;
        assert_eq!(versions_before.len(), ManagedTable::ALL.len());

        create_tables(&db).await?;

        let versions_after: Vec<_> = global::Entity::find()
            .filter(GlobalColumn::Key.starts_with(SCHEMA_VERSION_PREFIX))
            .all(&db)
            .await?;
        assert_eq!(
            versions_before, versions_after,
            "second create_tables call must not alter stored versions"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_drop_all_tables_refuses_without_confirmation() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        let result = drop_all_tables(&db, false).await;
        assert!(matches!(result, Err(Error::NotReallySure)));

        // Storage untouched: tables still queryable, versions still there.
        let count = global::Entity::find().count(&db).await?;
        assert_eq!(count, ManagedTable::ALL.len() as u64);
        Ok(())
    }

    #[tokio::test]
    async fn test_drop_all_tables_when_confirmed() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        drop_all_tables(&db, true).await?;

        // Tables are gone; querying one must now fail.
        let result = user::Entity::find().all(&db).await;
        assert!(result.is_err(), "users table should no longer exist");
        Ok(())
    }

    #[tokio::test]
    async fn test_drop_on_empty_database_requires_confirmation_only() -> Result<()> {
        init_test_tracing();
        let db = Database::connect("sqlite::memory:").await?;
        // IF EXISTS makes the confirmed drop succeed even with nothing there.
        drop_all_tables(&db, true).await?;
        Ok(())
    }
}
