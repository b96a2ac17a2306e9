//! Comparable property values.
//!
//! Items expose named properties as `PropertyValue`s — the only thing the
//! sort machinery knows about an item. Comparison is total: every pair of
//! values compares, including across variants, so sorting never panics.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// A comparable value attached to a named item property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Date(DateTime<Utc>),
}

impl PropertyValue {
    /// Cross-variant rank: Number < Text < Date.
    fn rank(&self) -> u8 {
        match self {
            PropertyValue::Number(_) => 0,
            PropertyValue::Text(_) => 1,
            PropertyValue::Date(_) => 2,
        }
    }

    /// Total order over values. Same-variant pairs compare naturally
    /// (`f64::total_cmp` for numbers), mixed pairs compare by variant rank.
    pub fn total_cmp(&self, other: &PropertyValue) -> Ordering {
        match (self, other) {
            (PropertyValue::Number(a), PropertyValue::Number(b)) => a.total_cmp(b),
            (PropertyValue::Text(a), PropertyValue::Text(b)) => a.cmp(b),
            (PropertyValue::Date(a), PropertyValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Number(n as f64)
    }
}

impl From<u32> for PropertyValue {
    fn from(n: u32) -> Self {
        PropertyValue::Number(n as f64)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(d: DateTime<Utc>) -> Self {
        PropertyValue::Date(d)
    }
}
