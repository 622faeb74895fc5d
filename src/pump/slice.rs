//! Slice-based driving loop.

use thiserror::Error;

use crate::machine::{Decoder, Feed, Overflow, Unit};

use super::FromFrames;

/// An error decoding from a slice.
#[derive(Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("{source} (after {fed} bytes)")]
pub struct Error {
    /// Bytes fed before decoding stopped, terminator included.
    pub fed: usize,
    /// The underlying overflow.
    pub source: Overflow,
}

/// Decode frames from a slice of stream bytes, publishing to a receiver.
///
/// Every byte of the slice is fed in order. Bytes of an unfinished trailing
/// frame remain buffered in the decoder, completing on a later call.
///
/// This method is also re-exported as `caboose::pump::decode_slice`.
///
/// # Errors
///
/// Stops at the terminator of an overlong frame, reporting how many bytes
/// were fed. The decoder is left cleared; calling again with the slice from
/// that offset resumes decoding after the discarded frame.
pub fn decode<I: Unit, S: Unit, const N: usize>(
    r: &[u8],
    decoder: &mut Decoder<I, S, N>,
    o: &mut impl FromFrames<I>,
) -> Result<(), Error> {
    for (fed, &byte) in r.iter().enumerate() {
        match decoder.feed(byte) {
            Ok(Feed::Ready) => {
                o.add_frame(decoder.items());
                decoder.reset();
            }
            Ok(Feed::Pending) => {}
            Err(source) => return Err(Error {
                fed: fed + 1,
                source,
            }),
        }
    }

    Ok(())
}
