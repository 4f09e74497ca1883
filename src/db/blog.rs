//! Blog entry queries.

use crate::entities::blog_entry;
use crate::errors::{Error, Result};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use tracing::{info, instrument};

/// Fields required to create a blog entry.
#[derive(Debug, Clone)]
pub struct NewBlogEntry {
    /// Authoring user
    pub user_id: i64,
    /// Optional page the entry is attached to
    pub page_id: Option<i64>,
    /// Entry title
    pub title: String,
    /// Entry body text
    pub text: String,
}

/// Creates a blog entry, dated now and hidden until published.
#[instrument(skip(db, entry), fields(user_id = entry.user_id, title = %entry.title))]
pub async fn create_blog_entry(
    db: &DatabaseConnection,
    entry: NewBlogEntry,
) -> Result<blog_entry::Model> {
    let model = blog_entry::ActiveModel {
        user_id: Set(entry.user_id),
        page_id: Set(entry.page_id),
        date_posted: Set(Utc::now()),
        title: Set(entry.title),
        text: Set(entry.text),
        is_visible: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("Created blog entry '{}' (id {})", model.title, model.id);
    Ok(model)
}

/// Makes a blog entry visible to readers.
#[instrument(skip(db))]
pub async fn publish_blog_entry(db: &DatabaseConnection, entry_id: i64) -> Result<()> {
    let row = blog_entry::Entity::find_by_id(entry_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound(format!("blog entry {entry_id}")))?;
    let mut active: blog_entry::ActiveModel = row.into();
    active.is_visible = Set(true);
    active.update(db).await?;
    info!("Published blog entry {}", entry_id);
    Ok(())
}

/// Lists visible blog entries, newest first.
#[instrument(skip(db))]
pub async fn visible_blog_entries(db: &DatabaseConnection) -> Result<Vec<blog_entry::Model>> {
    let rows = blog_entry::Entity::find()
        .filter(blog_entry::Column::IsVisible.eq(true))
        .order_by_desc(blog_entry::Column::DatePosted)
        .all(db)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{init_test_tracing, insert_test_user, setup_test_db};

    #[tokio::test]
    async fn test_entries_hidden_until_published() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let alice = insert_test_user(&db, "alice").await?;

        let first = create_blog_entry(
            &db,
            NewBlogEntry {
                user_id: alice.id,
                page_id: None,
                title: "Launch day".to_string(),
                text: "We're live!".to_string(),
            },
        )
        .await?;
        let second = create_blog_entry(
            &db,
            NewBlogEntry {
                user_id: alice.id,
                page_id: None,
                title: "Week one".to_string(),
                text: "Thanks for reading.".to_string(),
            },
        )
        .await?;

        assert!(visible_blog_entries(&db).await?.is_empty());

        publish_blog_entry(&db, first.id).await?;
        publish_blog_entry(&db, second.id).await?;

        let visible = visible_blog_entries(&db).await?;
        assert_eq!(visible.len(), 2);
        assert!(visible[0].date_posted >= visible[1].date_posted);
        Ok(())
    }

    #[tokio::test]
    async fn test_publish_unknown_entry_fails() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        let result = publish_blog_entry(&db, 777).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        Ok(())
    }
}
