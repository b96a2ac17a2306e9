//! Media items and the shared backing library.
//!
//! `PropertySource` is the seam between the sequencer and whatever layer
//! actually owns item metadata. `MediaItem` is the standard implementation:
//! a stable identity key plus a bag of named comparable values.

use crate::models::value::PropertyValue;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Anything that can resolve named properties for sorting.
///
/// Identity is a stable key distinct from position; looking up a property
/// the item doesn't carry returns `None` (the sort treats it as sorting
/// last, it is never an error).
pub trait PropertySource {
    fn identity(&self) -> &str;
    fn property(&self, name: &str) -> Option<PropertyValue>;
}

/// A media entity: identity key + named property bag.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    key: String,
    properties: BTreeMap<String, PropertyValue>,
}

impl MediaItem {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property assignment.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PropertySource for MediaItem {
    fn identity(&self) -> &str {
        &self.key
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.get(name).cloned()
    }
}

#[derive(Debug, Default)]
struct LibraryInner {
    /// Insertion order is the unsorted baseline every view falls back to.
    items: Vec<MediaItem>,
    /// Bumped on every mutation so views can re-derive lazily.
    generation: u64,
}

/// Shared, insertion-ordered backing store of media items.
///
/// Cloning the handle is cheap; all clones see the same store. Mutation bumps
/// a generation counter — views check it on access and re-derive their order
/// lazily instead of pushing updates (in-flight cursors keep their snapshot).
#[derive(Clone, Default)]
pub struct MediaLibrary {
    inner: Arc<RwLock<LibraryInner>>,
}

impl std::fmt::Debug for MediaLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("MediaLibrary")
            .field("len", &inner.items.len())
            .field("generation", &inner.generation)
            .finish()
    }
}

impl MediaLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, or replace the item with the same key in place.
    pub fn insert(&self, item: MediaItem) {
        let mut inner = self.inner.write();
        match inner.items.iter_mut().find(|i| i.key == item.key) {
            Some(slot) => *slot = item,
            None => inner.items.push(item),
        }
        inner.generation += 1;
    }

    /// Remove an item by key. Returns false if the key is unknown.
    pub fn remove(&self, key: &str) -> bool {
        let mut inner = self.inner.write();
        let before = inner.items.len();
        inner.items.retain(|i| i.key != key);
        let removed = inner.items.len() != before;
        if removed {
            inner.generation += 1;
        }
        removed
    }

    /// Mutate an item's properties in place (edit-and-resume flows).
    /// Returns false if the key is unknown.
    pub fn update(&self, key: &str, f: impl FnOnce(&mut MediaItem)) -> bool {
        let mut inner = self.inner.write();
        match inner.items.iter_mut().find(|i| i.key == key) {
            Some(item) => {
                f(item);
                inner.generation += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<MediaItem> {
        self.inner.read().items.iter().find(|i| i.key == key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.inner.read().generation
    }

    /// Point-in-time copy of all items in insertion order.
    pub fn items(&self) -> Vec<MediaItem> {
        self.inner.read().items.clone()
    }

    /// Case-insensitive substring search across all text properties.
    pub fn search(&self, query: &str) -> Vec<MediaItem> {
        let q = query.to_lowercase();
        self.inner
            .read()
            .items
            .iter()
            .filter(|item| {
                item.properties.values().any(|v| {
                    v.as_text()
                        .map(|s| s.to_lowercase().contains(&q))
                        .unwrap_or(false)
                })
            })
            .cloned()
            .collect()
    }
}
