//! Page queries - creation, publishing, and asset ordering.

use crate::entities::{page, page_content};
use crate::errors::{Error, Result};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use tracing::{info, instrument};

/// Fields required to create a page.
#[derive(Debug, Clone)]
pub struct NewPage {
    /// Series the page belongs to
    pub series_id: i64,
    /// Optional containing chapter
    pub chapter_id: Option<i64>,
    /// Page title
    pub title: String,
    /// Optional author notes
    pub notes: Option<String>,
    /// Optional theme override
    pub theme_id: Option<i64>,
}

/// Creates a page, publish-dated now and hidden until published.
#[instrument(skip(db, new_page), fields(series_id = new_page.series_id, title = %new_page.title))]
pub async fn create_page(db: &DatabaseConnection, new_page: NewPage) -> Result<page::Model> {
    let model = page::ActiveModel {
        series_id: Set(new_page.series_id),
        chapter_id: Set(new_page.chapter_id),
        title: Set(new_page.title),
        publish_date: Set(Utc::now()),
        is_visible: Set(false),
        notes: Set(new_page.notes),
        theme_id: Set(new_page.theme_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("Created page '{}' (id {})", model.title, model.id);
    Ok(model)
}

/// Makes a page visible to readers.
#[instrument(skip(db))]
pub async fn publish_page(db: &DatabaseConnection, page_id: i64) -> Result<()> {
    let row = page::Entity::find_by_id(page_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound(format!("page {page_id}")))?;
    let mut active: page::ActiveModel = row.into();
    active.is_visible = Set(true);
    active.update(db).await?;
    info!("Published page {}", page_id);
    Ok(())
}

/// Lists a series' visible pages in publish order.
#[instrument(skip(db))]
pub async fn visible_pages_for_series(
    db: &DatabaseConnection,
    series_id: i64,
) -> Result<Vec<page::Model>> {
    let rows = page::Entity::find()
        .filter(page::Column::SeriesId.eq(series_id))
        .filter(page::Column::IsVisible.eq(true))
        .order_by_asc(page::Column::PublishDate)
        .all(db)
        .await?;
    Ok(rows)
}

/// Attaches an asset to a page at the next free display order.
#[instrument(skip(db))]
pub async fn attach_asset(
    db: &DatabaseConnection,
    page_id: i64,
    asset_id: i64,
) -> Result<page_content::Model> {
    let last = page_content::Entity::find()
        .filter(page_content::Column::PageId.eq(page_id))
        .order_by_desc(page_content::Column::DisplayOrder)
        .one(db)
        .await?;
    let next_order = last.map_or(0, |row| row.display_order + 1);

    let model = page_content::ActiveModel {
        display_order: Set(next_order),
        page_id: Set(page_id),
        asset_id: Set(asset_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(
        "Attached asset {} to page {} at order {}",
        asset_id, page_id, next_order
    );
    Ok(model)
}

/// Lists a page's asset placements in display order.
#[instrument(skip(db))]
pub async fn page_assets(
    db: &DatabaseConnection,
    page_id: i64,
) -> Result<Vec<page_content::Model>> {
    let rows = page_content::Entity::find()
        .filter(page_content::Column::PageId.eq(page_id))
        .order_by_asc(page_content::Column::DisplayOrder)
        .all(db)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{
        init_test_tracing, insert_test_asset, insert_test_series, insert_test_user, setup_test_db,
    };

    #[tokio::test]
    async fn test_new_pages_start_hidden() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let alice = insert_test_user(&db, "alice").await?;
        let series = insert_test_series(&db, alice.id, "Saga of Ink").await?;

        let created = create_page(
            &db,
            NewPage {
                series_id: series.id,
                chapter_id: None,
                title: "Page 1".to_string(),
                notes: None,
                theme_id: None,
            },
        )
        .await?;
        assert!(!created.is_visible);
        assert!(visible_pages_for_series(&db, series.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_publish_makes_page_visible_in_order() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let alice = insert_test_user(&db, "alice").await?;
        let series = insert_test_series(&db, alice.id, "Saga of Ink").await?;

        let mut ids = Vec::new();
        for title in ["Page 1", "Page 2", "Page 3"] {
            let page = create_page(
                &db,
                NewPage {
                    series_id: series.id,
                    chapter_id: None,
                    title: title.to_string(),
                    notes: None,
                    theme_id: None,
                },
            )
            .await?;
            ids.push(page.id);
        }
        publish_page(&db, ids[0]).await?;
        publish_page(&db, ids[2]).await?;

        let visible = visible_pages_for_series(&db, series.id).await?;
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].title, "Page 1");
        assert_eq!(visible[1].title, "Page 3");
        assert!(visible[0].publish_date <= visible[1].publish_date);
        Ok(())
    }

    #[tokio::test]
    async fn test_publish_unknown_page_fails() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        let result = publish_page(&db, 9999).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_attach_assets_orders_sequentially() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let alice = insert_test_user(&db, "alice").await?;
        let series = insert_test_series(&db, alice.id, "Saga of Ink").await?;
        let page = create_page(
            &db,
            NewPage {
                series_id: series.id,
                chapter_id: None,
                title: "Page 1".to_string(),
                notes: None,
                theme_id: None,
            },
        )
        .await?;
        let a = insert_test_asset(&db, alice.id, "panel-a.png").await?;
        let b = insert_test_asset(&db, alice.id, "panel-b.png").await?;

        attach_asset(&db, page.id, a.id).await?;
        attach_asset(&db, page.id, b.id).await?;

        let placements = page_assets(&db, page.id).await?;
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].display_order, 0);
        assert_eq!(placements[0].asset_id, a.id);
        assert_eq!(placements[1].display_order, 1);
        assert_eq!(placements[1].asset_id, b.id);
        Ok(())
    }
}
