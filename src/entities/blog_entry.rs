//! `BlogEntry` entity - Dated, titled text post by a user.
//!
//! Entries may stand alone or be attached to a specific page (author
//! commentary). `date_posted` is indexed for the front-page listing.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Blog entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_entries")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the authoring user
    pub user_id: i64,
    /// Optional page this entry is attached to
    pub page_id: Option<i64>,
    /// When the entry was posted
    #[sea_orm(indexed)]
    pub date_posted: DateTimeUtc,
    /// Entry title
    pub title: String,
    /// Entry body text
    #[sea_orm(column_type = "Text")]
    pub text: String,
    /// Whether the entry is visible to readers
    pub is_visible: bool,
}

/// Defines relationships between `BlogEntry` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each entry is written by one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Optional page the entry is attached to
    #[sea_orm(
        belongs_to = "super::page::Entity",
        from = "Column::PageId",
        to = "super::page::Column::Id"
    )]
    Page,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Page.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
