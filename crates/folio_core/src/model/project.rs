//! Project showcase model.
//!
//! # Invariants
//! - `id` is an integer unique across the project set (assumed).
//! - `technologies` is free text; matching is exact and case-sensitive.

use serde::{Deserialize, Serialize};

/// Stable project identifier.
pub type ProjectId = u32;

/// Project showcase record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub demo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audios: Option<Vec<String>>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub learned: Vec<String>,
}

impl Project {
    /// Returns whether `technology` is listed on this project.
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies.iter().any(|tech| tech == technology)
    }
}
