//! Gallery aggregation: single-dimension category filter over videos.

use crate::model::category::{CategoryCounts, CategoryFilter};
use crate::model::date::sort_newest_first;
use crate::model::gallery::GalleryItem;
use serde::Serialize;

/// Filtered gallery slice plus counts from the unfiltered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView<'a> {
    pub filter: CategoryFilter,
    pub items: Vec<&'a GalleryItem>,
    pub counts: CategoryCounts,
}

/// Sorted gallery snapshot.
#[derive(Debug, Clone, Default)]
pub struct GalleryAggregator {
    items: Vec<GalleryItem>,
    counts: CategoryCounts,
}

impl GalleryAggregator {
    pub fn new(mut items: Vec<GalleryItem>) -> Self {
        sort_newest_first(&mut items, |item| item.date.as_str());
        let counts = CategoryCounts::tally(items.iter().map(|item| item.category));
        Self { items, counts }
    }

    pub fn sorted(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn filter(&self, filter: CategoryFilter) -> Vec<&GalleryItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }

    /// Filtered items with badge counts that ignore `filter`.
    pub fn view(&self, filter: CategoryFilter) -> GalleryView<'_> {
        GalleryView {
            filter,
            items: self.filter(filter),
            counts: self.counts,
        }
    }

    pub fn counts(&self) -> CategoryCounts {
        self.counts
    }

    pub fn find(&self, id: &str) -> Option<&GalleryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
