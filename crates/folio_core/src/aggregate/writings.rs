//! Writings aggregation.
//!
//! "Recent" is a fixed-size prefix of the newest-first order, never a
//! separate query.

use crate::model::date::sort_newest_first;
use crate::model::writing::WritingItem;

/// Default size of the recent-writings teaser.
pub const RECENT_WRITINGS_DEFAULT: usize = 3;

/// Sorted writings snapshot.
#[derive(Debug, Clone)]
pub struct WritingsAggregator {
    items: Vec<WritingItem>,
    recent_limit: usize,
}

impl Default for WritingsAggregator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl WritingsAggregator {
    pub fn new(items: Vec<WritingItem>) -> Self {
        Self::with_recent_limit(items, RECENT_WRITINGS_DEFAULT)
    }

    pub fn with_recent_limit(mut items: Vec<WritingItem>, recent_limit: usize) -> Self {
        sort_newest_first(&mut items, |item| item.date.as_str());
        Self {
            items,
            recent_limit,
        }
    }

    pub fn sorted(&self) -> &[WritingItem] {
        &self.items
    }

    /// First `n` writings, newest first; shorter when fewer exist.
    pub fn recent(&self, n: usize) -> &[WritingItem] {
        &self.items[..n.min(self.items.len())]
    }

    /// Recent writings using the configured limit.
    pub fn recent_default(&self) -> &[WritingItem] {
        self.recent(self.recent_limit)
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    pub fn find(&self, id: &str) -> Option<&WritingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
