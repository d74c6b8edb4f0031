//! Portfolio use-case service.
//!
//! # Responsibility
//! - Build every aggregator from one loaded bundle.
//! - Pick the detail store backend named by configuration.
//!
//! # Invariants
//! - Aggregators are built once; queries never reload the bundle.

use crate::aggregate::gallery::GalleryAggregator;
use crate::aggregate::projects::ProjectFilter;
use crate::aggregate::timeline::TimelineAggregator;
use crate::aggregate::writings::WritingsAggregator;
use crate::config::ContentConfig;
use crate::detail::sqlite_store::SqliteDetailStore;
use crate::detail::store::{DetailStore, FileDetailStore, StoreResult};
use crate::loader::{ContentBundle, LoadResult};
use crate::model::category::CategoryCounts;
use log::info;
use serde::Serialize;
use std::sync::Arc;

/// Collection sizes for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSummary {
    pub timeline: CategoryCounts,
    pub gallery: CategoryCounts,
    pub writings: usize,
    pub projects: usize,
    pub technologies: usize,
}

/// Read-only facade over the four aggregators.
#[derive(Debug, Clone, Default)]
pub struct PortfolioService {
    timeline: TimelineAggregator,
    gallery: GalleryAggregator,
    writings: WritingsAggregator,
    projects: ProjectFilter,
}

impl PortfolioService {
    /// Builds aggregators from an already-loaded bundle.
    pub fn new(bundle: ContentBundle, config: &ContentConfig) -> Self {
        let ContentBundle {
            timeline,
            gallery,
            writings,
            projects,
        } = bundle;
        Self {
            timeline: TimelineAggregator::new(timeline),
            gallery: GalleryAggregator::new(gallery),
            writings: WritingsAggregator::with_recent_limit(writings, config.recent_writings()),
            projects: ProjectFilter::new(projects),
        }
    }

    /// Loads the bundle from `config.content_dir()` and builds the service.
    pub fn load(config: &ContentConfig) -> LoadResult<Self> {
        let bundle = ContentBundle::load_dir(config.content_dir())?;
        let service = Self::new(bundle, config);
        let summary = service.summary();
        info!(
            "event=portfolio_ready module=service status=ok timeline={} gallery={} writings={} projects={} technologies={}",
            summary.timeline.all,
            summary.gallery.all,
            summary.writings,
            summary.projects,
            summary.technologies
        );
        Ok(service)
    }

    pub fn timeline(&self) -> &TimelineAggregator {
        &self.timeline
    }

    pub fn gallery(&self) -> &GalleryAggregator {
        &self.gallery
    }

    pub fn writings(&self) -> &WritingsAggregator {
        &self.writings
    }

    pub fn projects(&self) -> &ProjectFilter {
        &self.projects
    }

    pub fn summary(&self) -> ContentSummary {
        ContentSummary {
            timeline: self.timeline.counts(),
            gallery: self.gallery.counts(),
            writings: self.writings.len(),
            projects: self.projects.len(),
            technologies: self.projects.technologies().len(),
        }
    }
}

/// Opens the detail store selected by `config`.
///
/// A configured SQLite database wins over the detail directory.
pub fn open_detail_store(config: &ContentConfig) -> StoreResult<Arc<dyn DetailStore>> {
    match config.detail_db() {
        Some(path) => Ok(Arc::new(SqliteDetailStore::open(path)?)),
        None => Ok(Arc::new(FileDetailStore::new(config.detail_dir()))),
    }
}
