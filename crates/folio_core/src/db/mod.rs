//! SQLite persistence for imported detail records.
//!
//! # Responsibility
//! - Open connections for `SqliteDetailStore` with the detail schema in place.
//! - Refuse databases whose `detail_records` table cannot serve lookups.
//!
//! # Invariants
//! - `PRAGMA user_version` holds [`schema::DETAIL_SCHEMA_VERSION`] once opened.
//! - Every column in [`schema::DETAIL_COLUMNS`] exists on returned connections.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Detail database failure.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Written by a newer folio build; the row layout may differ.
    NewerSchema { found: u32, supported: u32 },
    /// `detail_records` is absent or lacks columns the store reads.
    DetailTableMismatch {
        missing_columns: Vec<&'static str>,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::NewerSchema { found, supported } => write!(
                f,
                "detail database schema version {found} is newer than supported {supported}"
            ),
            Self::DetailTableMismatch { missing_columns } => write!(
                f,
                "detail_records table is missing columns: {}",
                missing_columns.join(", ")
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::NewerSchema { .. } | Self::DetailTableMismatch { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
