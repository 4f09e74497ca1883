//! Theme entity - Visual styling owned by a user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Theme database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "themes")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns this theme
    pub owner_id: i64,
    /// Human-readable theme name
    pub name: String,
    /// Maximum comic image width in pixels
    pub max_image_width: i32,
    /// Stylesheet file reference
    pub css_file: String,
}

/// Defines relationships between Theme and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each theme is owned by one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    /// Series styled with this theme
    #[sea_orm(has_many = "super::series::Entity")]
    Series,
    /// Stories overriding their series theme with this one
    #[sea_orm(has_many = "super::story::Entity")]
    Stories,
    /// Chapters overriding their story theme with this one
    #[sea_orm(has_many = "super::chapter::Entity")]
    Chapters,
    /// Pages overriding their chapter theme with this one
    #[sea_orm(has_many = "super::page::Entity")]
    Pages,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
