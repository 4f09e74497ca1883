//! Transcript entity - Reader-submitted text transcription of a page.
//!
//! Submissions may be anonymous; the submitter fields are only set when
//! the contributor chose to leave contact details. A transcript is hidden
//! until a moderator flips `accepted`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transcript database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transcripts")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the page being transcribed
    pub page_id: i64,
    /// The transcription text
    #[sea_orm(column_type = "Text")]
    pub text: String,
    /// Whether a moderator has accepted this transcript
    pub accepted: bool,
    /// Optional submitter name
    pub submitter_name: Option<String>,
    /// Optional submitter email
    pub submitter_email: Option<String>,
    /// Optional submitter homepage
    pub submitter_homepage: Option<String>,
}

/// Defines relationships between Transcript and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transcript belongs to one page
    #[sea_orm(
        belongs_to = "super::page::Entity",
        from = "Column::PageId",
        to = "super::page::Column::Id"
    )]
    Page,
}

impl Related<super::page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Page.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
