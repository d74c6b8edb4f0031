//! Static bundle loading.
//!
//! # Responsibility
//! - Read the bundled JSON collections into typed records.
//! - Degrade malformed input to empty collections instead of failing.
//!
//! # Invariants
//! - A document that is not a JSON array yields an empty collection.
//! - Elements that fail to decode are skipped one by one; the rest survive.
//! - Only a content root that is not a directory is reported as an error.
//! - No transformation happens here; ordering is the aggregators' job.

use crate::model::date::is_year_month;
use crate::model::gallery::GalleryItem;
use crate::model::project::Project;
use crate::model::timeline::TimelineEntry;
use crate::model::writing::WritingItem;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const TIMELINE_FILE: &str = "timeline.json";
pub const GALLERY_FILE: &str = "gallery.json";
pub const WRITINGS_FILE: &str = "writings.json";
pub const PROJECTS_FILE: &str = "projects.json";

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug)]
pub enum LoadError {
    NotADirectory(PathBuf),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotADirectory(path) => {
                write!(f, "content root is not a directory: {}", path.display())
            }
        }
    }
}

impl Error for LoadError {}

/// Decoded collection plus the number of elements dropped on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for Decoded<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
        }
    }
}

/// Parses a JSON array of `T`, degrading to empty on malformed input.
pub fn load_collection<T: DeserializeOwned>(json: &str) -> Vec<T> {
    decode_collection(json).items
}

/// Same as [`load_collection`] but also reports skipped elements.
pub fn decode_collection<T: DeserializeOwned>(json: &str) -> Decoded<T> {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => decode_value(value),
        Err(_) => Decoded::default(),
    }
}

/// Decodes an already-parsed JSON value; non-arrays degrade to empty.
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Decoded<T> {
    let Value::Array(elements) = value else {
        return Decoded::default();
    };

    let mut decoded = Decoded {
        items: Vec::with_capacity(elements.len()),
        skipped: 0,
    };
    for element in elements {
        match serde_json::from_value::<T>(element) {
            Ok(item) => decoded.items.push(item),
            Err(_) => decoded.skipped += 1,
        }
    }
    decoded
}

/// Every static collection of the portfolio, loaded once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBundle {
    pub timeline: Vec<TimelineEntry>,
    pub gallery: Vec<GalleryItem>,
    pub writings: Vec<WritingItem>,
    pub projects: Vec<Project>,
}

impl ContentBundle {
    /// Loads all four collections from `dir`.
    ///
    /// Missing or unreadable files degrade to empty collections.
    ///
    /// # Errors
    /// - `LoadError::NotADirectory` when `dir` is not an existing directory.
    ///
    /// # Side effects
    /// - Emits one `content_load` event per collection plus a summary event.
    pub fn load_dir(dir: impl AsRef<Path>) -> LoadResult<Self> {
        let dir = dir.as_ref();
        let started_at = Instant::now();
        if !dir.is_dir() {
            warn!(
                "event=content_load module=loader status=error error_code=not_a_directory path={}",
                dir.display()
            );
            return Err(LoadError::NotADirectory(dir.to_path_buf()));
        }

        let timeline: Vec<TimelineEntry> = read_collection(dir, TIMELINE_FILE);
        let gallery: Vec<GalleryItem> = read_collection(dir, GALLERY_FILE);
        let writings: Vec<WritingItem> = read_collection(dir, WRITINGS_FILE);
        let projects: Vec<Project> = read_collection(dir, PROJECTS_FILE);

        report_nonconforming_dates(
            TIMELINE_FILE,
            timeline.iter().map(|entry| (entry.id.as_str(), entry.date.as_str())),
        );
        report_nonconforming_dates(
            GALLERY_FILE,
            gallery.iter().map(|item| (item.id.as_str(), item.date.as_str())),
        );
        report_nonconforming_dates(
            WRITINGS_FILE,
            writings.iter().map(|item| (item.id.as_str(), item.date.as_str())),
        );

        info!(
            "event=content_load module=loader status=ok timeline={} gallery={} writings={} projects={} duration_ms={}",
            timeline.len(),
            gallery.len(),
            writings.len(),
            projects.len(),
            started_at.elapsed().as_millis()
        );

        Ok(Self {
            timeline,
            gallery,
            writings,
            projects,
        })
    }

    /// Builds a bundle from in-memory JSON documents.
    pub fn from_json_parts(timeline: &str, gallery: &str, writings: &str, projects: &str) -> Self {
        Self {
            timeline: load_collection(timeline),
            gallery: load_collection(gallery),
            writings: load_collection(writings),
            projects: load_collection(projects),
        }
    }
}

fn read_collection<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Vec<T> {
    let path = dir.join(file_name);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                "event=content_load module=loader status=degraded file={} reason=unreadable error={}",
                file_name, err
            );
            return Vec::new();
        }
    };

    let value = match serde_json::from_str::<Value>(&text) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "event=content_load module=loader status=degraded file={} reason=invalid_json error={}",
                file_name, err
            );
            return Vec::new();
        }
    };
    if !value.is_array() {
        warn!(
            "event=content_load module=loader status=degraded file={} reason=not_an_array",
            file_name
        );
        return Vec::new();
    }

    let decoded = decode_value::<T>(value);
    if decoded.skipped > 0 {
        warn!(
            "event=content_load module=loader status=partial file={} loaded={} skipped={}",
            file_name,
            decoded.items.len(),
            decoded.skipped
        );
    }
    decoded.items
}

fn report_nonconforming_dates<'a>(
    file_name: &str,
    records: impl Iterator<Item = (&'a str, &'a str)>,
) {
    for (id, date) in records {
        if !is_year_month(date) {
            warn!(
                "event=content_load module=loader status=nonconforming_date file={} id={} date={:?}",
                file_name, id, date
            );
        }
    }
}
