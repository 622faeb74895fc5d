//! The sentinel-matching state machine.

use super::unit::Unit;

/// Cursor tracking a candidate match of the frame terminator.
///
/// The cursor advances on every byte of the stream, independently of item
/// boundaries: a match may begin mid-item and span several items. It only
/// reports how far the match has progressed; deciding what a confirmed match
/// means for previously formed items is the decoder's business.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SentinelCursor<S: Unit> {
    sentinel: S,
    progress: usize,
}

/// The outcome of advancing a [`SentinelCursor`] by one byte.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// The byte extended the candidate match.
    Matched,
    /// The byte broke the candidate match.
    ///
    /// The breaking byte is not re-tested against the start of the
    /// terminator; matching resumes with the next byte.
    Broken,
}

impl<S: Unit> SentinelCursor<S> {
    /// Create a cursor matching against a terminator value.
    pub fn new(sentinel: S) -> Self {
        Self {
            sentinel,
            progress: 0,
        }
    }

    /// Advance the cursor by one byte.
    pub fn advance(&mut self, byte: u8) -> Step {
        // A completed match left unacknowledged rearms on the next byte.
        if self.progress == S::WIDTH {
            self.progress = 0;
        }

        if byte == self.sentinel.byte(self.progress) {
            self.progress += 1;
            Step::Matched
        } else {
            self.progress = 0;
            Step::Broken
        }
    }

    /// Whether a candidate match is in progress or complete.
    pub fn is_partial(&self) -> bool {
        self.progress != 0
    }

    /// Whether the full terminator has matched.
    pub fn is_complete(&self) -> bool {
        self.progress == S::WIDTH
    }

    /// Abandon any candidate match.
    pub fn clear(&mut self) {
        self.progress = 0;
    }
}
