//! Page entity - A single published comic page.
//!
//! Pages always belong to a series and may additionally sit inside a
//! chapter. A page starts hidden (`is_visible = false`) and carries a
//! publish timestamp used for ordering archives and feeds. The actual
//! artwork is attached through `page_content` rows.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Page database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pages")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the series this page belongs to
    pub series_id: i64,
    /// Optional chapter containing this page
    pub chapter_id: Option<i64>,
    /// Page title
    pub title: String,
    /// When the page is (or was) published
    pub publish_date: DateTimeUtc,
    /// Whether the page is visible to readers
    pub is_visible: bool,
    /// Optional author notes shown below the page
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    /// Optional theme overriding the chapter/series theme
    pub theme_id: Option<i64>,
}

/// Defines relationships between Page and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each page belongs to one series
    #[sea_orm(
        belongs_to = "super::series::Entity",
        from = "Column::SeriesId",
        to = "super::series::Column::Id"
    )]
    Series,
    /// Optional containing chapter
    #[sea_orm(
        belongs_to = "super::chapter::Entity",
        from = "Column::ChapterId",
        to = "super::chapter::Column::Id"
    )]
    Chapter,
    /// Optional theme override
    #[sea_orm(
        belongs_to = "super::theme::Entity",
        from = "Column::ThemeId",
        to = "super::theme::Column::Id"
    )]
    Theme,
    /// Ordered asset attachments making up the page
    #[sea_orm(has_many = "super::page_content::Entity")]
    Contents,
    /// Transcripts submitted for this page
    #[sea_orm(has_many = "super::transcript::Entity")]
    Transcripts,
    /// Blog entries attached to this page
    #[sea_orm(has_many = "super::blog_entry::Entity")]
    BlogEntries,
}

impl Related<super::series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Series.def()
    }
}

impl Related<super::chapter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapter.def()
    }
}

impl Related<super::theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Theme.def()
    }
}

impl Related<super::page_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contents.def()
    }
}

impl Related<super::transcript::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transcripts.def()
    }
}

impl Related<super::blog_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
