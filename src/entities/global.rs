//! Global entity - Site-wide key-value settings store.
//!
//! Holds generic site configuration and the per-table schema versions
//! written by the lifecycle under keys of the form `schemaVersion.<TypeName>`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Global settings database model - one row per key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "globals")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Setting key (e.g., `"schemaVersion.User"` or `"site.title"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Integer payload, if this setting is numeric
    pub int_value: Option<i32>,
    /// String payload, if this setting is textual
    pub string_value: Option<String>,
}

/// `Global` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
