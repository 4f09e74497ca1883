//! Transcript queries - submission, moderation, listing.

use crate::entities::transcript;
use crate::errors::{Error, Result};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use tracing::{info, instrument};

/// Optional contact details a transcript submitter may leave.
#[derive(Debug, Clone, Default)]
pub struct Submitter {
    /// Name, if given
    pub name: Option<String>,
    /// Email, if given
    pub email: Option<String>,
    /// Homepage, if given
    pub homepage: Option<String>,
}

/// Submits a transcript for a page. Anonymous when `submitter` is empty.
/// Transcripts start unaccepted.
#[instrument(skip(db, text, submitter))]
pub async fn submit_transcript(
    db: &DatabaseConnection,
    page_id: i64,
    text: &str,
    submitter: Submitter,
) -> Result<transcript::Model> {
    let model = transcript::ActiveModel {
        page_id: Set(page_id),
        text: Set(text.to_string()),
        accepted: Set(false),
        submitter_name: Set(submitter.name),
        submitter_email: Set(submitter.email),
        submitter_homepage: Set(submitter.homepage),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("Transcript {} submitted for page {}", model.id, page_id);
    Ok(model)
}

/// Marks a transcript as accepted by a moderator.
#[instrument(skip(db))]
pub async fn accept_transcript(db: &DatabaseConnection, transcript_id: i64) -> Result<()> {
    let row = transcript::Entity::find_by_id(transcript_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound(format!("transcript {transcript_id}")))?;
    let mut active: transcript::ActiveModel = row.into();
    active.accepted = Set(true);
    active.update(db).await?;
    info!("Accepted transcript {}", transcript_id);
    Ok(())
}

/// Lists the accepted transcripts of a page.
#[instrument(skip(db))]
pub async fn accepted_transcripts_for_page(
    db: &DatabaseConnection,
    page_id: i64,
) -> Result<Vec<transcript::Model>> {
    let rows = transcript::Entity::find()
        .filter(transcript::Column::PageId.eq(page_id))
        .filter(transcript::Column::Accepted.eq(true))
        .all(db)
        .await?;
    Ok(rows)
}
