//! The frame decoder.

use core::mem;

use thiserror::Error;
use tinyvec::ArrayVec;

use super::{
    item::ItemCursor,
    sentinel::{SentinelCursor, Step},
    unit::Unit,
};

/// The outcome of feeding one byte to a [`Decoder`].
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feed {
    /// A frame boundary was confirmed; the items are ready to consume.
    Ready,
    /// No frame boundary yet.
    Pending,
}

/// A frame accumulated more payload items than the decoder has room for.
///
/// The overlong frame was discarded in its entirety, and the decoder is
/// ready for the frame that follows.
#[derive(Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("Frame exceeded the capacity of {capacity} items and was discarded.")]
pub struct Overflow {
    /// The number of items the decoder can hold.
    pub capacity: usize,
}

/// Streaming decoder for frames of `N` or fewer items of type `I`, ended by
/// a sentinel of type `S`.
///
/// The decoder is driven synchronously, one byte per [`feed`](Self::feed)
/// call, by whatever polls the input source; it never blocks and accepts
/// every byte. State persists across frames: after consuming a ready frame
/// the caller resets the decoder and keeps feeding.
#[derive(Debug)]
pub struct Decoder<I: Unit, S: Unit, const N: usize> {
    items: ArrayVec<[I; N]>,
    item: ItemCursor<I>,
    sentinel: SentinelCursor<S>,
    /// Items completed since the live candidate match began.
    speculative: usize,
    /// Items completed since the frame first ran out of room.
    dropped: usize,
}

impl<I: Unit, S: Unit, const N: usize> Decoder<I, S, N> {
    /// Create a decoder recognizing frames ended by the given sentinel.
    pub fn new(sentinel: S) -> Self {
        Self {
            items: ArrayVec::default(),
            item: ItemCursor::new(),
            sentinel: SentinelCursor::new(sentinel),
            speculative: 0,
            dropped: 0,
        }
    }

    /// Advance the decoder by one byte.
    ///
    /// Returns [`Feed::Ready`] exactly when this byte confirmed a frame
    /// boundary with at least one genuine payload item; consume the items
    /// via [`items`](Self::items), then call [`reset`](Self::reset) before
    /// feeding on. A terminator with no preceding payload is absorbed
    /// silently.
    ///
    /// An overlong frame surfaces as [`Overflow`] once its terminator
    /// arrives, never earlier and never by writing out of bounds; the
    /// decoder comes back cleared.
    pub fn feed(&mut self, byte: u8) -> Result<Feed, Overflow> {
        if self.sentinel.advance(byte) == Step::Broken {
            // Items flagged during the broken attempt are ordinary payload.
            self.speculative = 0;
        }

        if let Some(item) = self.item.advance(byte) {
            if self.dropped > 0 || self.items.try_push(item).is_some() {
                self.dropped += 1;
            }
            if self.sentinel.is_partial() {
                self.speculative += 1;
            }
        }

        if self.sentinel.is_complete() {
            self.sentinel.clear();

            let speculative = mem::take(&mut self.speculative);
            let dropped = mem::take(&mut self.dropped);

            // Once the buffer fills, every later completion is dropped, so
            // the drops form a suffix of the frame. If they all fall within
            // the speculative run they were terminator bytes, not payload,
            // and the frame survives intact.
            if dropped > speculative {
                self.reset();
                return Err(Overflow { capacity: N });
            }

            let len = self.items.len() - (speculative - dropped);
            self.items.truncate(len);

            if !self.items.is_empty() {
                return Ok(Feed::Ready);
            }

            self.reset();
        }

        Ok(Feed::Pending)
    }

    /// The payload items of the frame decoded so far.
    ///
    /// Meaningful to consume once [`feed`](Self::feed) reports
    /// [`Feed::Ready`]; the slice is mutated in place by further feeding.
    /// Residual bytes of a sentinel tail may sit in the item accumulator
    /// until [`reset`](Self::reset).
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Clear all buffers and counters unconditionally.
    ///
    /// Called by the consumer after accepting a ready frame, or at any
    /// point to abandon a partially decoded one. A no-op on an empty
    /// decoder.
    pub fn reset(&mut self) {
        self.items.clear();
        self.item.clear();
        self.sentinel.clear();
        self.speculative = 0;
        self.dropped = 0;
    }
}
