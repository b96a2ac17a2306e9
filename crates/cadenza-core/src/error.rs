//! Sequencer error taxonomy.
//!
//! Only creation-time validation fails. Mid-traversal operations clamp or
//! transition state instead of erroring, and a missing sort property is
//! resolved by the sort-last policy, never surfaced.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequencerError {
    /// Start or jump index outside the cursor's snapshot bounds.
    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },

    /// Playback or shuffle requested over zero items.
    #[error("cannot start playback over an empty collection")]
    EmptyCollection,
}
