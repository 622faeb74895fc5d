//! The item-accumulation state machine.

use core::mem;

use super::unit::Unit;

/// Cursor merging stream bytes into fixed-width items.
///
/// The cursor advances on every byte of the stream, unconditionally; it has
/// no knowledge of terminators. See [`SentinelCursor`](super::SentinelCursor)
/// for the other half of the pair.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ItemCursor<I: Unit> {
    value: I,
    filled: usize,
}

impl<I: Unit> ItemCursor<I> {
    /// Create a cursor with an empty accumulator.
    pub fn new() -> Self {
        Self {
            value: I::default(),
            filled: 0,
        }
    }

    /// Advance the cursor by one byte.
    ///
    /// Returns the completed item once enough bytes have accumulated,
    /// leaving the cursor empty for the next.
    pub fn advance(&mut self, byte: u8) -> Option<I> {
        self.value = self.value.merge(self.filled, byte);
        self.filled += 1;

        if self.filled == I::WIDTH {
            self.filled = 0;
            Some(mem::take(&mut self.value))
        } else {
            None
        }
    }

    /// Whether the accumulator holds bytes of an incomplete item.
    pub fn is_partial(&self) -> bool {
        self.filled != 0
    }

    /// Discard any accumulated bytes.
    pub fn clear(&mut self) {
        self.value = I::default();
        self.filled = 0;
    }
}
