//! SQLite-backed detail store.
//!
//! # Responsibility
//! - Persist detail records imported from the static bundle.
//! - Serve `load` lookups by id for the resolver.
//!
//! # Invariants
//! - The wrapped connection passed the detail schema check (`db::open_db*`).
//! - `images_json` / `links_json` always hold JSON arrays.

use crate::db::{open_db, open_db_in_memory};
use crate::detail::store::{DetailStore, StoreError, StoreResult};
use crate::model::detail::{DetailLink, DetailRecord};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Detail store over a `detail_records` table.
pub struct SqliteDetailStore {
    conn: Mutex<Connection>,
}

impl SqliteDetailStore {
    /// Opens (and migrates) a detail database file.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self::from_connection(open_db(path)?))
    }

    /// Opens an in-memory detail database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    /// Wraps a connection returned by `db::open_db*`.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Inserts or replaces one record.
    pub fn put(&self, record: &DetailRecord) -> StoreResult<()> {
        let images_json = encode_json(&record.id, &record.images)?;
        let links_json = encode_json(&record.id, &record.links)?;
        self.lock().execute(
            "INSERT INTO detail_records (id, title, body, images_json, links_json)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                body = excluded.body,
                images_json = excluded.images_json,
                links_json = excluded.links_json;",
            params![
                record.id.as_str(),
                record.title.as_deref(),
                record.body.as_str(),
                images_json,
                links_json,
            ],
        )?;
        Ok(())
    }

    /// Stored ids in ascending order.
    pub fn list_ids(&self) -> StoreResult<Vec<String>> {
        let conn = self.lock();
        let mut stmt = conn.prepare("SELECT id FROM detail_records ORDER BY id ASC;")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DetailStore for SqliteDetailStore {
    fn load(&self, id: &str) -> StoreResult<Option<DetailRecord>> {
        let conn = self.lock();
        let raw = conn
            .query_row(
                "SELECT id, title, body, images_json, links_json
                 FROM detail_records
                 WHERE id = ?1;",
                params![id],
                parse_raw_row,
            )
            .optional()?;

        raw.map(RawDetailRow::decode).transpose()
    }
}

struct RawDetailRow {
    id: String,
    title: Option<String>,
    body: String,
    images_json: String,
    links_json: String,
}

impl RawDetailRow {
    fn decode(self) -> StoreResult<DetailRecord> {
        let images = decode_json::<Vec<String>>(&self.id, &self.images_json)?;
        let links = decode_json::<Vec<DetailLink>>(&self.id, &self.links_json)?;
        Ok(DetailRecord {
            id: self.id,
            title: self.title,
            body: self.body,
            images,
            links,
        })
    }
}

fn parse_raw_row(row: &Row<'_>) -> rusqlite::Result<RawDetailRow> {
    Ok(RawDetailRow {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        images_json: row.get("images_json")?,
        links_json: row.get("links_json")?,
    })
}

fn encode_json<T: serde::Serialize>(id: &str, value: &T) -> StoreResult<String> {
    serde_json::to_string(value).map_err(|err| StoreError::Decode {
        id: id.to_string(),
        message: err.to_string(),
    })
}

fn decode_json<T: serde::de::DeserializeOwned>(id: &str, text: &str) -> StoreResult<T> {
    serde_json::from_str(text).map_err(|err| StoreError::Decode {
        id: id.to_string(),
        message: err.to_string(),
    })
}
