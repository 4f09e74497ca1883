//! User entity - Represents an account in the system.
//!
//! Both `username` (login name) and `display_name` (public byline) are
//! unique across the site. Passwords are stored as bcrypt hashes; hashing
//! itself happens outside this crate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name, unique site-wide
    #[sea_orm(unique)]
    pub username: String,
    /// Public display name, also unique site-wide
    #[sea_orm(unique)]
    pub display_name: String,
    /// Optional personal homepage URL
    pub homepage: Option<String>,
    /// Password hash (bcrypt)
    pub pwhash: String,
    /// Contact email address
    pub email: String,
    /// Whether this user has administrative privileges
    pub is_admin: bool,
    /// Outstanding password-reset token, if a reset is in progress
    pub reset_key: Option<String>,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Administrative actions performed by this user
    #[sea_orm(has_many = "super::admin_log::Entity")]
    AdminLogs,
    /// Themes owned by this user
    #[sea_orm(has_many = "super::theme::Entity")]
    Themes,
    /// Series owned by this user
    #[sea_orm(has_many = "super::series::Entity")]
    Series,
    /// Assets uploaded by this user
    #[sea_orm(has_many = "super::asset::Entity")]
    Assets,
    /// Blog entries written by this user
    #[sea_orm(has_many = "super::blog_entry::Entity")]
    BlogEntries,
}

impl Related<super::admin_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminLogs.def()
    }
}

impl Related<super::theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Themes.def()
    }
}

impl Related<super::series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Series.def()
    }
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assets.def()
    }
}

impl Related<super::blog_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
