//! Shuffle sequencing — fair permutations over a view snapshot.
//!
//! The permutation is materialized once (Fisher–Yates via `SliceRandom`) and
//! wrapped in the same `PlaybackCursor` as sequential playback; it has no
//! live-view binding, so resorting the view never reshuffles the session.

use crate::error::SequencerError;
use crate::sequencer::cursor::PlaybackCursor;
use crate::sequencer::view::FilteredOrderedView;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Generates shuffled traversal orders. Owns its RNG so test runs can pin
/// a seed.
pub struct ShuffleSequencer {
    rng: SmallRng,
}

impl ShuffleSequencer {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic sequencer for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Shuffle the view's current order into a cursor at position 0.
    /// Every permutation is equally likely; no key repeats before
    /// exhaustion.
    pub fn start(&mut self, view: &FilteredOrderedView) -> Result<PlaybackCursor, SequencerError> {
        let mut keys = view.snapshot_order();
        if keys.is_empty() {
            return Err(SequencerError::EmptyCollection);
        }
        keys.shuffle(&mut self.rng);
        PlaybackCursor::from_snapshot(keys, 0, view.library().clone())
    }

    /// Shuffle keeping the item at `current_index` first, so the track
    /// already playing stays current when shuffle is switched on.
    pub fn start_from(
        &mut self,
        view: &FilteredOrderedView,
        current_index: usize,
    ) -> Result<PlaybackCursor, SequencerError> {
        let keys = view.snapshot_order();
        if keys.is_empty() {
            return Err(SequencerError::EmptyCollection);
        }
        if current_index >= keys.len() {
            return Err(SequencerError::OutOfRange {
                index: current_index,
                len: keys.len(),
            });
        }

        let mut order = Vec::with_capacity(keys.len());
        order.push(keys[current_index].clone());
        let mut rest: Vec<String> = keys
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != current_index)
            .map(|(_, k)| k)
            .collect();
        rest.shuffle(&mut self.rng);
        order.extend(rest);

        PlaybackCursor::from_snapshot(order, 0, view.library().clone())
    }
}

impl Default for ShuffleSequencer {
    fn default() -> Self {
        Self::new()
    }
}
