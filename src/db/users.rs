//! User account queries.
//!
//! Password hashing and the actual reset-email flow live outside this
//! crate; this module only persists the results (`pwhash`, `reset_key`).

use crate::entities::user;
use crate::errors::{Error, Result};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use tracing::{info, instrument};

/// Fields required to create an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login name, unique site-wide
    pub username: String,
    /// Public display name, unique site-wide
    pub display_name: String,
    /// Password hash (bcrypt)
    pub pwhash: String,
    /// Contact email
    pub email: String,
    /// Whether the account has admin privileges
    pub is_admin: bool,
}

/// Creates a new user account.
///
/// Fails with a database error if the username or display name collides
/// with an existing account (both carry unique constraints).
#[instrument(skip(db, new_user), fields(username = %new_user.username))]
pub async fn create_user(db: &DatabaseConnection, new_user: NewUser) -> Result<user::Model> {
    let model = user::ActiveModel {
        username: Set(new_user.username),
        display_name: Set(new_user.display_name),
        homepage: Set(None),
        pwhash: Set(new_user.pwhash),
        email: Set(new_user.email),
        is_admin: Set(new_user.is_admin),
        reset_key: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("Created user '{}' (id {})", model.username, model.id);
    Ok(model)
}

/// Looks a user up by login name.
#[instrument(skip(db))]
pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<user::Model>> {
    let row = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;
    Ok(row)
}

/// Stores a password-reset token on the account.
#[instrument(skip(db, reset_key))]
pub async fn begin_password_reset(
    db: &DatabaseConnection,
    username: &str,
    reset_key: &str,
) -> Result<()> {
    let row = get_user_by_username(db, username)
        .await?
        .ok_or_else(|| Error::NotFound(format!("user '{username}'")))?;
    let mut active: user::ActiveModel = row.into();
    active.reset_key = Set(Some(reset_key.to_string()));
    active.update(db).await?;
    info!("Password reset started for '{}'", username);
    Ok(())
}

/// Replaces the password hash and clears any outstanding reset token.
#[instrument(skip(db, new_pwhash))]
pub async fn complete_password_reset(
    db: &DatabaseConnection,
    username: &str,
    new_pwhash: &str,
) -> Result<()> {
    let row = get_user_by_username(db, username)
        .await?
        .ok_or_else(|| Error::NotFound(format!("user '{username}'")))?;
    let mut active: user::ActiveModel = row.into();
    active.pwhash = Set(new_pwhash.to_string());
    active.reset_key = Set(None);
    active.update(db).await?;
    info!("Password reset completed for '{}'", username);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{init_test_tracing, setup_test_db};

    fn new_user(username: &str, display_name: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            display_name: display_name.to_string(),
            pwhash: "$2b$12$test-hash".to_string(),
            email: format!("{username}@example.com"),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup_user() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        let created = create_user(&db, new_user("alice", "Alice")).await?;
        let found = get_user_by_username(&db, "alice").await?;

        assert_eq!(found, Some(created));
        assert_eq!(get_user_by_username(&db, "bob").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        create_user(&db, new_user("alice", "Alice")).await?;
        let result = create_user(&db, new_user("alice", "Someone Else")).await;

        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_display_name_rejected() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        create_user(&db, new_user("alice", "Alice")).await?;
        let result = create_user(&db, new_user("alice2", "Alice")).await;

        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_password_reset_round_trip() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        create_user(&db, new_user("alice", "Alice")).await?;
        begin_password_reset(&db, "alice", "reset-token-123").await?;

        let mid = get_user_by_username(&db, "alice")
            .await?
            .ok_or_else(|| Error::NotFound("alice".to_string()))?;
        assert_eq!(mid.reset_key.as_deref(), Some("reset-token-123"));

        complete_password_reset(&db, "alice", "$2b$12$new-hash").await?;
        let done = get_user_by_username(&db, "alice")
            .await?
            .ok_or_else(|| Error::NotFound("alice".to_string()))?;
        assert_eq!(done.pwhash, "$2b$12$new-hash");
        assert_eq!(done.reset_key, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_reset_for_unknown_user_fails() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;

        let result = begin_password_reset(&db, "nobody", "token").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        Ok(())
    }
}
