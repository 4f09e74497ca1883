use thiserror::Error;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Returned by `drop_all_tables` when called without the confirmation
    /// flag. No storage is touched when this is produced.
    #[error("refusing to drop all tables: call with i_am_really_sure=true to proceed")]
    NotReallySure,

    #[error("Record not found: {0}")]
    NotFound(String),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
