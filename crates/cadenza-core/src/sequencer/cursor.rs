//! Playback cursor — snapshot-isolated traversal.
//!
//! A cursor fixes its bounds and order at creation. The live view can be
//! resorted or refiltered underneath without moving the needle mid-playback;
//! only item *properties* resolve against the live library, so an
//! edit-and-resume sequence sees fresh metadata in the same slot.

use crate::error::SequencerError;
use crate::models::item::{MediaItem, MediaLibrary};
use crate::sequencer::view::FilteredOrderedView;

/// Cursor lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Active,
    /// Ran past the last position. `retreat` or `restart` reactivates.
    Exhausted,
    /// Terminal; every operation is a no-op afterwards.
    Cancelled,
}

/// Sequential traversal over a fixed snapshot of identity keys.
#[derive(Debug)]
pub struct PlaybackCursor {
    order: Vec<String>,
    /// Equals `order.len()` exactly when Exhausted.
    position: usize,
    state: CursorState,
    library: MediaLibrary,
}

impl PlaybackCursor {
    /// Start a cursor over the view's current order.
    pub fn start(view: &FilteredOrderedView, start: usize) -> Result<Self, SequencerError> {
        Self::from_snapshot(view.snapshot_order(), start, view.library().clone())
    }

    /// Start a cursor over an already-materialized key order.
    pub fn from_snapshot(
        order: Vec<String>,
        start: usize,
        library: MediaLibrary,
    ) -> Result<Self, SequencerError> {
        if order.is_empty() {
            return Err(SequencerError::EmptyCollection);
        }
        if start >= order.len() {
            return Err(SequencerError::OutOfRange {
                index: start,
                len: order.len(),
            });
        }
        Ok(Self {
            order,
            position: start,
            state: CursorState::Active,
            library,
        })
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Total count, fixed at creation.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Identity key at the current position. `None` unless Active.
    pub fn current_key(&self) -> Option<&str> {
        match self.state {
            CursorState::Active => self.order.get(self.position).map(String::as_str),
            _ => None,
        }
    }

    /// Resolve the current item against the live library. `None` when the
    /// cursor is not Active or the item has been removed since creation.
    pub fn current(&self) -> Option<MediaItem> {
        self.current_key().and_then(|key| self.library.get(key))
    }

    /// Step forward. Transitions to Exhausted past the last position; a
    /// no-op when already Exhausted or Cancelled.
    pub fn advance(&mut self) {
        if self.state != CursorState::Active {
            return;
        }
        self.position += 1;
        if self.position >= self.order.len() {
            self.position = self.order.len();
            self.state = CursorState::Exhausted;
        }
    }

    /// Step backward, clamping at position 0. Never errors. Reactivates an
    /// Exhausted cursor at the last position.
    pub fn retreat(&mut self) {
        if self.state == CursorState::Cancelled {
            return;
        }
        if self.position > 0 {
            self.position -= 1;
        }
        self.state = CursorState::Active;
    }

    /// Jump to an absolute position within the creation-time bounds.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SequencerError> {
        if index >= self.order.len() {
            return Err(SequencerError::OutOfRange {
                index,
                len: self.order.len(),
            });
        }
        if self.state == CursorState::Cancelled {
            return Ok(());
        }
        self.position = index;
        self.state = CursorState::Active;
        Ok(())
    }

    /// Rewind to position 0 and reactivate. A no-op once Cancelled.
    pub fn restart(&mut self) {
        if self.state == CursorState::Cancelled {
            return;
        }
        self.position = 0;
        self.state = CursorState::Active;
    }

    /// End the session. Idempotent, safe from any state.
    pub fn cancel(&mut self) {
        self.state = CursorState::Cancelled;
    }
}
