//! Timeline aggregation.
//!
//! # Responsibility
//! - Hold the timeline sorted newest first.
//! - Serve category-filtered views with stable per-category counts.
//! - Map entries to detail lookup keys.
//!
//! # Invariants
//! - `filter(CategoryFilter::All)` equals `sorted()`, element for element.
//! - `view(..).counts.all` equals the size of the loaded collection for
//!   every filter selection.

use crate::model::category::{CategoryCounts, CategoryFilter};
use crate::model::date::sort_newest_first;
use crate::model::timeline::TimelineEntry;
use serde::Serialize;

/// Filtered timeline slice plus counts from the unfiltered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineView<'a> {
    pub filter: CategoryFilter,
    pub entries: Vec<&'a TimelineEntry>,
    pub counts: CategoryCounts,
}

/// Sorted timeline snapshot.
#[derive(Debug, Clone, Default)]
pub struct TimelineAggregator {
    entries: Vec<TimelineEntry>,
    counts: CategoryCounts,
}

impl TimelineAggregator {
    /// Takes ownership of the loaded entries and sorts them newest first.
    pub fn new(mut entries: Vec<TimelineEntry>) -> Self {
        sort_newest_first(&mut entries, |entry| entry.date.as_str());
        let counts = CategoryCounts::tally(entries.iter().map(|entry| entry.category));
        Self { entries, counts }
    }

    /// Full collection, newest first.
    pub fn sorted(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries passing `filter`, newest first.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry.category))
            .collect()
    }

    /// Per-category counts over the unfiltered collection.
    pub fn counts(&self) -> CategoryCounts {
        self.counts
    }

    /// Filtered entries together with unfiltered counts.
    pub fn view(&self, filter: CategoryFilter) -> TimelineView<'_> {
        TimelineView {
            filter,
            entries: self.filter(filter),
            counts: self.counts,
        }
    }

    /// Entries carrying `tag`, newest first.
    pub fn with_tag(&self, tag: &str) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.has_tag(tag))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&TimelineEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns the detail lookup key for `id`.
    ///
    /// `None` when the entry is unknown or does not advertise a detail record,
    /// so callers can skip the lookup entirely.
    pub fn detail_key(&self, id: &str) -> Option<&str> {
        self.find(id)
            .filter(|entry| entry.has_detail)
            .map(|entry| entry.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::TimelineAggregator;
    use crate::model::category::{Category, CategoryFilter};
    use crate::model::timeline::TimelineEntry;

    #[test]
    fn empty_collection_yields_empty_view_and_zero_counts() {
        let aggregator = TimelineAggregator::new(Vec::new());
        let view = aggregator.view(CategoryFilter::Only(Category::Writing));
        assert!(view.entries.is_empty());
        assert_eq!(view.counts.all, 0);
        assert_eq!(view.counts.project, 0);
        assert_eq!(view.counts.activity, 0);
        assert_eq!(view.counts.writing, 0);
    }

    #[test]
    fn detail_key_requires_has_detail() {
        let mut with_detail = TimelineEntry::new("deep", "Deep", "2024-02", Category::Project);
        with_detail.has_detail = true;
        let plain = TimelineEntry::new("plain", "Plain", "2024-03", Category::Activity);
        let aggregator = TimelineAggregator::new(vec![with_detail, plain]);

        assert_eq!(aggregator.detail_key("deep"), Some("deep"));
        assert_eq!(aggregator.detail_key("plain"), None);
        assert_eq!(aggregator.detail_key("missing"), None);
    }
}
