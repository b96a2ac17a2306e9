//! Live filtered, ordered view over a media library.
//!
//! The computed order is a deterministic function of (backing set, filter,
//! sort spec). Library mutations are picked up lazily: every accessor checks
//! the library generation and rebuilds the cached order when it moved.
//! Nothing is pushed to cursors — they traverse the snapshot they were
//! created from.

use crate::models::item::{MediaItem, MediaLibrary};
use crate::models::sort::SortSpec;
use parking_lot::Mutex;
use std::sync::Arc;

/// Filter over items. Absent means accept all.
pub type FilterPredicate = Arc<dyn Fn(&MediaItem) -> bool + Send + Sync>;

#[derive(Default)]
struct OrderCache {
    generation: u64,
    revision: u64,
    keys: Vec<String>,
}

/// A sortable, filterable positional view over a `MediaLibrary`.
///
/// One logical owner mutates the view (`set_sort`, `set_filter`); accessors
/// recompute the order on demand. Recomputation is observable only through
/// `count`/`at`/`index_of`/`snapshot_order`.
pub struct FilteredOrderedView {
    library: MediaLibrary,
    filter: Option<FilterPredicate>,
    sort: SortSpec,
    /// Bumped on every sort/filter change; pairs with the library generation
    /// to decide cache staleness.
    revision: u64,
    cache: Mutex<OrderCache>,
}

impl FilteredOrderedView {
    /// Unfiltered, insertion-ordered view over the library.
    pub fn new(library: MediaLibrary) -> Self {
        Self {
            library,
            filter: None,
            sort: SortSpec::unsorted(),
            revision: 1,
            cache: Mutex::new(OrderCache::default()),
        }
    }

    pub fn library(&self) -> &MediaLibrary {
        &self.library
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Replace the sort spec. The order rebuilds on next access.
    pub fn set_sort(&mut self, spec: SortSpec) {
        self.sort = spec;
        self.revision += 1;
    }

    /// Replace the filter predicate. The result set may shrink or grow.
    pub fn set_filter(&mut self, predicate: impl Fn(&MediaItem) -> bool + Send + Sync + 'static) {
        self.filter = Some(Arc::new(predicate));
        self.revision += 1;
    }

    /// Drop the filter, accepting all items again.
    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.revision += 1;
    }

    pub fn count(&self) -> usize {
        self.with_fresh_order(|keys| keys.len())
    }

    /// Item at a view position, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<MediaItem> {
        let key = self.with_fresh_order(|keys| keys.get(index).cloned())?;
        self.library.get(&key)
    }

    /// Position of an item by identity key, or `None` when filtered out
    /// or unknown.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.with_fresh_order(|keys| keys.iter().position(|k| k == key))
    }

    /// Immutable point-in-time copy of the current order, by identity key.
    /// Later sort/filter/library changes leave the copy untouched.
    pub fn snapshot_order(&self) -> Vec<String> {
        self.with_fresh_order(|keys| keys.to_vec())
    }

    fn with_fresh_order<R>(&self, f: impl FnOnce(&[String]) -> R) -> R {
        let mut cache = self.cache.lock();
        let generation = self.library.generation();
        if cache.generation != generation || cache.revision != self.revision {
            cache.keys = self.compute_order();
            cache.generation = generation;
            cache.revision = self.revision;
            log::debug!(
                "view: recomputed order, {} items at generation {}",
                cache.keys.len(),
                generation
            );
        }
        f(&cache.keys)
    }

    fn compute_order(&self) -> Vec<String> {
        let mut items = self.library.items();
        if let Some(filter) = &self.filter {
            items.retain(|item| filter(item));
        }
        // Stable sort: all-equal comparisons keep insertion order.
        items.sort_by(|a, b| self.sort.compare(a, b));
        items.into_iter().map(|item| item.key().to_string()).collect()
    }
}
