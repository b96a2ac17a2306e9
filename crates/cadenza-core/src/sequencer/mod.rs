//! Playback sequencing — views, cursors, shuffle.
//!
//! Views derive a live order from the library; cursors freeze it. UI events
//! change views, playback walks cursors, and the two never race because a
//! cursor's snapshot is taken exactly once.

pub mod cursor;
pub mod shuffle;
pub mod view;

pub use cursor::{CursorState, PlaybackCursor};
pub use shuffle::ShuffleSequencer;
pub use view::{FilterPredicate, FilteredOrderedView};
