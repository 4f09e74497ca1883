//! Chapter entity - A chapter within a story, with an optional recap.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Chapter database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chapters")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the story this chapter belongs to
    pub story_id: i64,
    /// Chapter title
    pub title: String,
    /// Optional "previously on" recap shown at the chapter start
    #[sea_orm(column_type = "Text", nullable)]
    pub recap_text: Option<String>,
    /// Optional theme overriding the story theme
    pub theme_id: Option<i64>,
}

/// Defines relationships between Chapter and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each chapter belongs to one story
    #[sea_orm(
        belongs_to = "super::story::Entity",
        from = "Column::StoryId",
        to = "super::story::Column::Id"
    )]
    Story,
    /// Optional theme override
    #[sea_orm(
        belongs_to = "super::theme::Entity",
        from = "Column::ThemeId",
        to = "super::theme::Column::Id"
    )]
    Theme,
    /// Pages within this chapter
    #[sea_orm(has_many = "super::page::Entity")]
    Pages,
}

impl Related<super::story::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Story.def()
    }
}

impl Related<super::theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Theme.def()
    }
}

impl Related<super::page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
