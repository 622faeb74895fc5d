//! Polled-source driving loop.

use thiserror::Error;

use crate::machine::{Decoder, Feed, Overflow, Unit};

use super::FromFrames;

/// A polled source of bytes, as exposed by an asynchronous serial line.
///
/// Availability checks are non-blocking; reads block until a byte arrives.
/// Pacing between polls, and abandoning a frame that never terminates, are
/// the caller's business.
pub trait ByteSource {
    /// An error reading from the source.
    type Error;

    /// Whether a byte is waiting to be read.
    fn ready(&mut self) -> bool;

    /// Read the next byte.
    fn read(&mut self) -> Result<u8, Self::Error>;
}

/// Errors occurring while draining a source.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// An error from the supplied source.
    #[error("Error reading from the byte source.")]
    Source(E),
    /// An overlong frame was discarded.
    #[error(transparent)]
    Overflow(#[from] Overflow),
}

/// Decode frames from a source while bytes are ready, publishing to a
/// receiver.
///
/// Returns as soon as the source has nothing waiting, leaving any partial
/// frame buffered in the decoder for the next call. Suited to a poll loop
/// sharing its thread with other work.
///
/// This method is also re-exported as `caboose::pump::drain`.
pub fn drain<I: Unit, S: Unit, const N: usize, B: ByteSource>(
    r: &mut B,
    decoder: &mut Decoder<I, S, N>,
    o: &mut impl FromFrames<I>,
) -> Result<(), Error<B::Error>> {
    while r.ready() {
        let byte = r.read().map_err(Error::Source)?;

        if let Feed::Ready = decoder.feed(byte)? {
            o.add_frame(decoder.items());
            decoder.reset();
        }
    }

    Ok(())
}
