use serde::{Deserialize, Serialize};

/// Externally published article or post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingItem {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Publishing platform label, e.g. `Zenn` or `Qiita`.
    pub platform: String,
    /// `YYYY-MM`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
