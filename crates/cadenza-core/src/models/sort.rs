//! Sort specifications and item comparison.
//!
//! A `SortSpec` is an ordered list of (property, direction) entries defining
//! a deterministic order over items. Entries evaluate left to right; the
//! first non-equal entry decides. All-equal pairs compare `Equal`, so a
//! stable sort falls back to insertion order.

use crate::models::item::PropertySource;
use crate::props;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction of a single sort entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// One (property, direction) pair of a spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub property: String,
    pub direction: SortDirection,
}

/// Ordered list of sort entries. Empty means insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    entries: Vec<SortEntry>,
}

impl SortSpec {
    /// No sorting — views keep insertion order.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Single-field sort by the named property.
    ///
    /// Requesting `Track` expands to Disc-then-Track: track numbers are only
    /// meaningful within a disc.
    pub fn by(property: &str, direction: SortDirection) -> Self {
        if property == props::TRACK {
            return Self::unsorted()
                .then(props::DISC, direction)
                .then(props::TRACK, direction);
        }
        Self::unsorted().then(property, direction)
    }

    /// Append a lower-priority entry.
    pub fn then(mut self, property: impl Into<String>, direction: SortDirection) -> Self {
        self.entries.push(SortEntry {
            property: property.into(),
            direction,
        });
        self
    }

    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compare two items under this spec.
    ///
    /// An item missing an entry's property sorts last regardless of
    /// direction — direction flips the value comparison only. Never fails.
    pub fn compare<S: PropertySource>(&self, a: &S, b: &S) -> Ordering {
        for entry in &self.entries {
            let ord = match (a.property(&entry.property), b.property(&entry.property)) {
                (Some(va), Some(vb)) => entry.direction.apply(va.total_cmp(&vb)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}
