//! Markdown excerpt for detail records.
//!
//! Used for degraded displays (list cards, metadata descriptions) where the
//! full markdown body is not rendered.

use crate::model::detail::DetailRecord;
use once_cell::sync::Lazy;
use regex::Regex;

const EXCERPT_MAX_CHARS: usize = 160;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!|]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Plain-text excerpt plus the first inline image of a markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailExcerpt {
    pub text: Option<String>,
    pub cover_image: Option<String>,
}

/// Derives an excerpt from `record`.
///
/// The cover falls back to the first entry of `record.images` when the body
/// has no inline image.
pub fn detail_excerpt(record: &DetailRecord) -> DetailExcerpt {
    let mut excerpt = markdown_excerpt(&record.body, EXCERPT_MAX_CHARS);
    if excerpt.cover_image.is_none() {
        excerpt.cover_image = record.images.first().cloned();
    }
    excerpt
}

/// Strips markdown syntax and keeps the first `max_chars` characters.
pub fn markdown_excerpt(body: &str, max_chars: usize) -> DetailExcerpt {
    let cover_image = MARKDOWN_IMAGE_RE
        .captures(body)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|value| !value.is_empty());

    let without_images = MARKDOWN_IMAGE_RE.replace_all(body, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    let text = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(max_chars).collect())
    };

    DetailExcerpt { text, cover_image }
}

#[cfg(test)]
mod tests {
    use super::{detail_excerpt, markdown_excerpt};
    use crate::model::detail::DetailRecord;

    #[test]
    fn excerpt_extracts_first_image_path() {
        let excerpt = markdown_excerpt("x ![a](one.png) y ![b](two.png)", 100);
        assert_eq!(excerpt.cover_image.as_deref(), Some("one.png"));
    }

    #[test]
    fn excerpt_strips_markdown_symbols_and_limits_length() {
        let body = "## Background\n\n- built with [Rust](https://rust-lang.org)\n**fast** `code`";
        let excerpt = markdown_excerpt(body, 20);
        let text = excerpt.text.expect("text should exist");
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
        assert!(text.starts_with("Background"));
        assert!(text.chars().count() <= 20);
    }

    #[test]
    fn cover_falls_back_to_record_images() {
        let mut record = DetailRecord::new("talk", "no inline images here");
        record.images = vec!["slides/cover.png".to_string()];
        let excerpt = detail_excerpt(&record);
        assert_eq!(excerpt.cover_image.as_deref(), Some("slides/cover.png"));
    }
}
