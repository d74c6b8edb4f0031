//! Detail store contract plus in-memory and file-backed implementations.
//!
//! # Invariants
//! - `load` returns `Ok(None)` for absent records.
//! - `Err` is reserved for transport failures (I/O, SQLite, corrupt payloads).

use crate::db::DbError;
use crate::model::detail::DetailRecord;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Detail store failure. Resolvers treat every variant as "no data".
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: std::io::Error },
    Decode { id: String, message: String },
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read detail `{}`: {source}", path.display())
            }
            Self::Decode { id, message } => write!(f, "invalid detail record `{id}`: {message}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { .. } => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load-by-key contract for detail records.
pub trait DetailStore: Send + Sync {
    /// Loads the detail record for `id`; `Ok(None)` when none exists.
    fn load(&self, id: &str) -> StoreResult<Option<DetailRecord>>;
}

/// Map-backed store for tests and pre-loaded bundles.
#[derive(Debug, Clone, Default)]
pub struct MemoryDetailStore {
    records: BTreeMap<String, DetailRecord>,
}

impl MemoryDetailStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces one record, keyed by its own id.
    pub fn insert(&mut self, record: DetailRecord) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<DetailRecord> for MemoryDetailStore {
    fn from_iter<I: IntoIterator<Item = DetailRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

impl DetailStore for MemoryDetailStore {
    fn load(&self, id: &str) -> StoreResult<Option<DetailRecord>> {
        Ok(self.records.get(id).cloned())
    }
}

/// Directory of `<id>.json` or `<id>.md` files.
///
/// JSON files hold a full [`DetailRecord`]; markdown files become a record
/// whose body is the file content. JSON wins when both exist. The file name
/// is the key: any `id` written inside a JSON file is replaced by it.
#[derive(Debug, Clone)]
pub struct FileDetailStore {
    root: PathBuf,
}

impl FileDetailStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_json(&self, id: &str) -> StoreResult<Option<DetailRecord>> {
        let path = self.root.join(format!("{id}.json"));
        let Some(text) = read_optional(&path)? else {
            return Ok(None);
        };
        let mut record = serde_json::from_str::<DetailRecord>(&text).map_err(|err| {
            StoreError::Decode {
                id: id.to_string(),
                message: err.to_string(),
            }
        })?;
        record.id = id.to_string();
        Ok(Some(record))
    }

    fn load_markdown(&self, id: &str) -> StoreResult<Option<DetailRecord>> {
        let path = self.root.join(format!("{id}.md"));
        Ok(read_optional(&path)?.map(|body| DetailRecord::new(id, body)))
    }
}

impl DetailStore for FileDetailStore {
    fn load(&self, id: &str) -> StoreResult<Option<DetailRecord>> {
        if !is_safe_file_stem(id) {
            return Ok(None);
        }
        match self.load_json(id)? {
            Some(record) => Ok(Some(record)),
            None => self.load_markdown(id),
        }
    }
}

fn read_optional(path: &Path) -> StoreResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

/// Ids become file names; anything that could escape the root is rejected.
///
/// Dots are allowed anywhere except the first character, so `a..b` passes:
/// without a separator it still names a file directly under the root.
pub(crate) fn is_safe_file_stem(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
}
