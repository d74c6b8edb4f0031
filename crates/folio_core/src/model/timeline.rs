//! Timeline entry model.
//!
//! # Invariants
//! - `id` is the identity and also the key of the optional detail record.
//! - `has_detail` only advertises a detail record; the record itself may
//!   still be missing from the store.

use crate::model::category::Category;
use serde::{Deserialize, Serialize};

/// Whether a project was built alone or as part of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentType {
    Team,
    Individual,
}

/// One dated record in the reverse-chronological feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `YYYY-MM`; compared as a string.
    pub date: String,
    pub category: Category,
    #[serde(default)]
    pub has_detail: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development_type: Option<DevelopmentType>,
}

impl TimelineEntry {
    /// Creates a minimal entry; optional fields start empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            tags: Vec::new(),
            date: date.into(),
            category,
            has_detail: false,
            external_link: None,
            development_type: None,
        }
    }

    /// Returns whether `tag` is attached to this entry (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}
