use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid value in {column}: {message} {location}")]
    RowDecode {
        column: String,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// True when the failure is a UNIQUE constraint violation (e.g. duplicate email).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx {
                source: sqlx::Error::Database(db),
                ..
            } => db.is_unique_violation(),
            _ => false,
        }
    }

    /// True when the violated UNIQUE constraint covers `table.column`. SQLite names
    /// the columns in its message: `UNIQUE constraint failed: erm_users.email`.
    pub fn is_unique_violation_on(&self, column: &str) -> bool {
        match self {
            Self::Sqlx {
                source: sqlx::Error::Database(db),
                ..
            } if db.is_unique_violation() => db
                .message()
                .rsplit_once(": ")
                .is_some_and(|(_, columns)| columns.split(", ").any(|c| c == column)),
            _ => false,
        }
    }
}

pub const USER_EMAIL_COLUMN: &str = "erm_users.email";

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
