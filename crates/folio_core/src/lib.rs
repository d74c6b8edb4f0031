//! Content core for the folio portfolio site.
//! Loads the static bundle, answers sorted/filtered queries over it and
//! resolves optional detail records without letting stale lookups win.

pub mod aggregate;
pub mod config;
pub mod db;
pub mod detail;
pub mod loader;
pub mod logging;
pub mod metadata;
pub mod model;
pub mod service;

pub use aggregate::gallery::{GalleryAggregator, GalleryView};
pub use aggregate::projects::ProjectFilter;
pub use aggregate::timeline::{TimelineAggregator, TimelineView};
pub use aggregate::writings::{WritingsAggregator, RECENT_WRITINGS_DEFAULT};
pub use config::{ConfigError, ConfigResult, ContentConfig};
pub use detail::preview::{detail_excerpt, DetailExcerpt};
pub use detail::resolver::{DetailResolver, DetailState, DetailTicket};
pub use detail::shared::SharedDetailResolver;
pub use detail::sqlite_store::SqliteDetailStore;
pub use detail::store::{
    DetailStore, FileDetailStore, MemoryDetailStore, StoreError, StoreResult,
};
pub use loader::{load_collection, ContentBundle, LoadError, LoadResult};
pub use logging::{
    default_log_level, init_from_config, init_logging, logging_status, LoggingError,
};
pub use metadata::{PageMetadata, PageMetadataService, PageScope};
pub use model::category::{Category, CategoryCounts, CategoryFilter, UnknownCategory};
pub use model::detail::{DetailLink, DetailRecord};
pub use model::gallery::GalleryItem;
pub use model::project::{Project, ProjectId};
pub use model::timeline::{DevelopmentType, TimelineEntry};
pub use model::writing::WritingItem;
pub use service::portfolio_service::{open_detail_store, ContentSummary, PortfolioService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
