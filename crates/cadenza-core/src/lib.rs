//! cadenza-core — ordered playback sequencing over live media collections.
//!
//! Owns the mapping from "a displayed, sortable, filterable collection of
//! media items" to "a stable, resumable playback order".
//!
//! # Architecture
//!
//! ```text
//! MediaLibrary               shared backing store, generation-counted
//!   └─ FilteredOrderedView   filter + SortSpec, lazily recomputed order
//!        └─ PlaybackCursor   snapshot-isolated traversal (seq or shuffled)
//! SessionState               persisted sort blob across navigation
//! SyncedLyrics               passive DTO for the external lyrics API
//! ```
//!
//! The playback engine, the item metadata source and the navigation host are
//! external collaborators; this crate never touches I/O.

pub mod error;
pub mod models;
pub mod props;
pub mod sequencer;

pub use error::SequencerError;
pub use models::*;
pub use sequencer::*;
