//! Asset entity - Uploaded content owned by a user.
//!
//! An asset is either a file reference (`content_file`) or inline text
//! (`content_text`); which one is populated decides how it is rendered.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Asset database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who uploaded this asset
    pub user_id: i64,
    /// File reference, for uploaded files
    pub content_file: Option<String>,
    /// Inline text content, for text assets
    #[sea_orm(column_type = "Text", nullable)]
    pub content_text: Option<String>,
}

/// Defines relationships between Asset and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each asset is owned by one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Pages this asset appears on
    #[sea_orm(has_many = "super::page_content::Entity")]
    PageContents,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::page_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PageContents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
