//! Series entity - Top-level comic owned by a user.
//!
//! A series is the parent of both stories and pages. Its theme, when set,
//! is the default for everything beneath it; stories, chapters and pages
//! may override it with their own.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Series database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "series")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns this series
    pub owner_id: i64,
    /// Series title
    pub title: String,
    /// Optional theme applied to the whole series
    pub theme_id: Option<i64>,
}

/// Defines relationships between Series and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each series is owned by one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    /// Optional theme for the series
    #[sea_orm(
        belongs_to = "super::theme::Entity",
        from = "Column::ThemeId",
        to = "super::theme::Column::Id"
    )]
    Theme,
    /// Stories within this series
    #[sea_orm(has_many = "super::story::Entity")]
    Stories,
    /// Pages within this series
    #[sea_orm(has_many = "super::page::Entity")]
    Pages,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Theme.def()
    }
}

impl Related<super::story::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stories.def()
    }
}

impl Related<super::page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
