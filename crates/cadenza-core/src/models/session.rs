//! Navigation session state — the persisted sort blob.
//!
//! The host saves this on navigate-away and hands it back on navigate-back.
//! Only the single (property, ascending) pair currently in effect is encoded;
//! the Disc-then-Track composite is re-derived on decode. Decoding is
//! tolerant — missing or malformed fields fall back to defaults instead of
//! failing.

use crate::models::sort::{SortDirection, SortSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Persisted per-page sort state. Field names match the host's state bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "Property", default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(rename = "Ascending", default, skip_serializing_if = "Option::is_none")]
    pub ascending: Option<bool>,
}

impl SessionState {
    /// Encode the currently active sort pair.
    pub fn encode(property: &str, direction: SortDirection) -> Self {
        Self {
            property: Some(property.to_string()),
            ascending: Some(direction.is_ascending()),
        }
    }

    /// Decode a persisted state blob. Fields of the wrong type are treated
    /// as absent, never as an error.
    pub fn decode(value: &Value) -> Self {
        let property = value.get("Property").and_then(Value::as_str).map(String::from);
        let ascending = value.get("Ascending").and_then(Value::as_bool);

        if value.get("Property").is_some() && property.is_none() {
            log::warn!("session state: malformed Property field, ignoring");
        }
        if value.get("Ascending").is_some() && ascending.is_none() {
            log::warn!("session state: malformed Ascending field, ignoring");
        }

        Self { property, ascending }
    }

    /// The JSON blob handed to the host's key/value store.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Direction in effect, defaulting to ascending.
    pub fn direction(&self) -> SortDirection {
        match self.ascending {
            Some(false) => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// Rebuild the sort spec this state describes. No property means no
    /// sort applied.
    pub fn to_sort_spec(&self) -> SortSpec {
        match &self.property {
            Some(property) => SortSpec::by(property, self.direction()),
            None => SortSpec::unsorted(),
        }
    }
}
