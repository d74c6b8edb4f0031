use crate::model::category::Category;
use serde::{Deserialize, Serialize};

/// Video showcase item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub comment: String,
    /// Video URL or bundle-relative path.
    pub video: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
    /// `YYYY-MM`.
    pub date: String,
}
