//! `AdminLog` entity - Append-only audit trail of administrative actions.
//!
//! Rows are never updated or deleted by the application; the composite
//! (`user_id`, `timestamp`) index backing the per-user history listing is
//! created by the schema lifecycle.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Administrative action log model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_logs")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// When the action happened
    pub timestamp: DateTimeUtc,
    /// ID of the user who performed the action
    pub user_id: i64,
    /// Client IP address the action came from
    pub ip: String,
    /// URL that was hit
    pub url: String,
    /// Free-text description of what was done
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Session identifier of the acting user
    pub session_id: String,
}

/// Defines relationships between `AdminLog` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each log entry belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
