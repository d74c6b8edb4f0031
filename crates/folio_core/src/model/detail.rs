//! Deep-dive detail record keyed by a timeline entry id.
//!
//! Detail coverage is sparse: only some entries have one, and absence is an
//! expected outcome rather than an error.

use serde::{Deserialize, Serialize};

/// Labelled outbound link shown on a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailLink {
    pub label: String,
    pub url: String,
}

/// Secondary payload for one timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Same id as the owning `TimelineEntry`.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub links: Vec<DetailLink>,
}

impl DetailRecord {
    /// Creates a record with a markdown body and no attachments.
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            body: body.into(),
            images: Vec::new(),
            links: Vec::new(),
        }
    }
}
