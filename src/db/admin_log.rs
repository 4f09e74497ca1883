//! Administrative audit log queries. Append and read only.

use crate::entities::admin_log;
use crate::errors::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::{info, instrument};

/// Details of an administrative action to record.
#[derive(Debug, Clone)]
pub struct AdminAction {
    /// Acting user
    pub user_id: i64,
    /// Client IP the action came from
    pub ip: String,
    /// URL that was hit
    pub url: String,
    /// Free-text description of what was done
    pub description: String,
    /// Session identifier of the acting user
    pub session_id: String,
}

/// Appends an audit record, timestamped now.
#[instrument(skip(db, action), fields(user_id = action.user_id, url = %action.url))]
pub async fn record_admin_action(
    db: &DatabaseConnection,
    action: AdminAction,
) -> Result<admin_log::Model> {
    let model = admin_log::ActiveModel {
        timestamp: Set(Utc::now()),
        user_id: Set(action.user_id),
        ip: Set(action.ip),
        url: Set(action.url),
        description: Set(action.description),
        session_id: Set(action.session_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("Recorded admin action {} for user {}", model.id, model.user_id);
    Ok(model)
}

/// Lists a user's most recent administrative actions, newest first.
#[instrument(skip(db))]
pub async fn recent_actions_for_user(
    db: &DatabaseConnection,
    user_id: i64,
    limit: u64,
) -> Result<Vec<admin_log::Model>> {
    let rows = admin_log::Entity::find()
        .filter(admin_log::Column::UserId.eq(user_id))
        .order_by_desc(admin_log::Column::Timestamp)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{init_test_tracing, insert_test_user, setup_test_db};

    fn action(user_id: i64, description: &str) -> AdminAction {
        AdminAction {
            user_id,
            ip: "198.51.100.7".to_string(),
            url: "/admin/pages".to_string(),
            description: description.to_string(),
            session_id: "sess-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_record_and_list_actions_newest_first() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let alice = insert_test_user(&db, "alice").await?;
        let bob = insert_test_user(&db, "bob").await?;

        record_admin_action(&db, action(alice.id, "first")).await?;
        record_admin_action(&db, action(alice.id, "second")).await?;
        record_admin_action(&db, action(bob.id, "unrelated")).await?;

        let rows = recent_actions_for_user(&db, alice.id, 10).await?;
        assert_eq!(rows.len(), 2, "only alice's actions should be listed");
        assert!(rows[0].timestamp >= rows[1].timestamp);
        Ok(())
    }

    #[tokio::test]
    async fn test_listing_respects_limit() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let alice = insert_test_user(&db, "alice").await?;

        for i in 0..5 {
            record_admin_action(&db, action(alice.id, &format!("action {i}"))).await?;
        }

        let rows = recent_actions_for_user(&db, alice.id, 3).await?;
        assert_eq!(rows.len(), 3);
        Ok(())
    }
}
