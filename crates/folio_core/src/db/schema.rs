//! The `detail_records` schema and its version stamp.
//!
//! A database at version 0 is treated as fresh and receives the table. A
//! database at the current version is trusted only after its columns check out.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;
use std::cmp::Ordering;

/// Schema version stamped into `PRAGMA user_version`.
pub const DETAIL_SCHEMA_VERSION: u32 = 1;

/// Columns `SqliteDetailStore` reads and writes.
pub const DETAIL_COLUMNS: [&str; 5] = ["id", "title", "body", "images_json", "links_json"];

const DETAIL_RECORDS_SQL: &str = include_str!("detail_records.sql");

/// Creates the detail table when missing, then verifies its columns.
///
/// # Errors
/// - `NewerSchema` when the stamp is ahead of [`DETAIL_SCHEMA_VERSION`].
/// - `DetailTableMismatch` when the stamped table lacks store columns.
pub fn ensure_detail_schema(conn: &mut Connection) -> DbResult<()> {
    let found = stored_version(conn)?;
    match found.cmp(&DETAIL_SCHEMA_VERSION) {
        Ordering::Greater => {
            return Err(DbError::NewerSchema {
                found,
                supported: DETAIL_SCHEMA_VERSION,
            })
        }
        Ordering::Less => {
            let tx = conn.transaction()?;
            tx.execute_batch(DETAIL_RECORDS_SQL)?;
            tx.pragma_update(None, "user_version", DETAIL_SCHEMA_VERSION)?;
            tx.commit()?;
        }
        Ordering::Equal => {}
    }

    let missing_columns = missing_detail_columns(conn)?;
    if missing_columns.is_empty() {
        Ok(())
    } else {
        Err(DbError::DetailTableMismatch { missing_columns })
    }
}

/// Reads the `PRAGMA user_version` stamp.
pub fn stored_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?)
}

/// Number of rows in `detail_records`.
pub fn detail_record_count(conn: &Connection) -> DbResult<u64> {
    let count = conn.query_row("SELECT COUNT(*) FROM detail_records;", [], |row| {
        row.get::<_, i64>(0)
    })?;
    Ok(u64::try_from(count).unwrap_or_default())
}

fn missing_detail_columns(conn: &Connection) -> DbResult<Vec<&'static str>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('detail_records');")?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DETAIL_COLUMNS
        .into_iter()
        .filter(|column| !present.iter().any(|name| name == column))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{ensure_detail_schema, stored_version, DETAIL_SCHEMA_VERSION};
    use rusqlite::Connection;

    #[test]
    fn fresh_database_is_stamped_once() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_detail_schema(&mut conn).unwrap();
        ensure_detail_schema(&mut conn).unwrap();
        assert_eq!(stored_version(&conn).unwrap(), DETAIL_SCHEMA_VERSION);
    }
}
