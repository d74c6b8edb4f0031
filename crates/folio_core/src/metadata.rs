//! Scoped page metadata.
//!
//! # Responsibility
//! - Hold the title/description/canonical data for the active page.
//! - Restore site defaults when the page scope ends.
//!
//! # Invariants
//! - At most one page scope is active; it borrows the service mutably.
//! - Dropping a [`PageScope`] always restores the defaults.

use log::debug;
use serde::{Deserialize, Serialize};

/// Metadata describing one page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Page title without the site suffix; empty for the site root.
    pub title: String,
    pub description: String,
    /// Path relative to the site origin, e.g. `/timeline/portfolio-site`.
    pub canonical_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Injectable owner of the current page metadata.
#[derive(Debug, Clone)]
pub struct PageMetadataService {
    site_name: String,
    defaults: PageMetadata,
    current: PageMetadata,
}

impl PageMetadataService {
    pub fn new(site_name: impl Into<String>, defaults: PageMetadata) -> Self {
        Self {
            site_name: site_name.into(),
            current: defaults.clone(),
            defaults,
        }
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn current(&self) -> &PageMetadata {
        &self.current
    }

    pub fn defaults(&self) -> &PageMetadata {
        &self.defaults
    }

    /// `"<title> | <site>"`, or the site name alone for untitled pages.
    pub fn document_title(&self) -> String {
        let title = self.current.title.trim();
        if title.is_empty() {
            self.site_name.clone()
        } else {
            format!("{title} | {}", self.site_name)
        }
    }

    /// Activates `page` until the returned scope is dropped.
    ///
    /// Blank `description` and missing `image` inherit the defaults.
    pub fn enter(&mut self, mut page: PageMetadata) -> PageScope<'_> {
        if page.description.trim().is_empty() {
            page.description = self.defaults.description.clone();
        }
        if page.image.is_none() {
            page.image = self.defaults.image.clone();
        }
        debug!(
            "event=page_enter module=metadata status=ok path={}",
            page.canonical_path
        );
        self.current = page;
        PageScope { service: self }
    }

    fn reset(&mut self) {
        debug!(
            "event=page_exit module=metadata status=ok path={}",
            self.current.canonical_path
        );
        self.current = self.defaults.clone();
    }
}

/// Active page lifetime; restores defaults on drop.
pub struct PageScope<'a> {
    service: &'a mut PageMetadataService,
}

impl PageScope<'_> {
    pub fn metadata(&self) -> &PageMetadata {
        self.service.current()
    }

    pub fn document_title(&self) -> String {
        self.service.document_title()
    }
}

impl Drop for PageScope<'_> {
    fn drop(&mut self) {
        self.service.reset();
    }
}
