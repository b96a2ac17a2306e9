//! Cadenza data models.
//!
//! Items are property bags; everything the sequencer does with them goes
//! through `PropertySource`. Sort specs, session blobs and the lyrics DTO
//! are plain serde-able data.

pub mod item;
pub mod lyrics;
pub mod session;
pub mod sort;
pub mod value;

pub use item::{MediaItem, MediaLibrary, PropertySource};
pub use lyrics::SyncedLyrics;
pub use session::SessionState;
pub use sort::{SortDirection, SortEntry, SortSpec};
pub use value::PropertyValue;
