use folio_core::db::schema::{DETAIL_COLUMNS, DETAIL_SCHEMA_VERSION};
use folio_core::db::{open_db, open_db_in_memory, DbError};
use folio_core::{SqliteDetailStore, StoreError};
use rusqlite::Connection;

#[test]
fn fresh_database_gets_full_detail_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(DETAIL_SCHEMA_VERSION, 1);
    assert_eq!(schema_version(&conn), DETAIL_SCHEMA_VERSION);
    for column in DETAIL_COLUMNS {
        assert_column_exists(&conn, "detail_records", column);
    }
}

#[test]
fn reopening_detail_database_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("details.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO detail_records (id, body) VALUES ('kept', 'still here');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), DETAIL_SCHEMA_VERSION);
    let (body, images): (String, String) = second
        .query_row(
            "SELECT body, images_json FROM detail_records WHERE id = 'kept';",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(body, "still here");
    assert_eq!(images, "[]");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::NewerSchema { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, DETAIL_SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn stamped_database_without_detail_table_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dropped.sqlite3");

    let conn = open_db(&path).unwrap();
    conn.execute_batch("DROP TABLE detail_records;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::DetailTableMismatch { missing_columns } => {
            assert_eq!(missing_columns, DETAIL_COLUMNS.to_vec());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn stamped_table_missing_attachment_columns_is_rejected_by_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE detail_records (id TEXT PRIMARY KEY NOT NULL, title TEXT, body TEXT);
         PRAGMA user_version = 1;",
    )
    .unwrap();
    drop(conn);

    let err = match SqliteDetailStore::open(&path) {
        Ok(_) => panic!("store opened over a partial detail table"),
        Err(err) => err,
    };
    match err {
        StoreError::Db(DbError::DetailTableMismatch { missing_columns }) => {
            assert_eq!(missing_columns, vec!["images_json", "links_json"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_column_exists(conn: &Connection, table: &str, column: &str) {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table});"))
        .unwrap();
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert!(
        columns.iter().any(|name| name == column),
        "column {table}.{column} does not exist: {columns:?}"
    );
}
