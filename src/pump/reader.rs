//! Reader-based driving loop.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::machine::{Decoder, Feed, Overflow, Unit};

use super::FromFrames;

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An overlong frame was discarded.
    #[error(transparent)]
    Overflow(#[from] Overflow),
}

/// Decode frames from a reader of stream bytes, publishing to a receiver.
///
/// Bytes are fed until the reader reports end of stream; an unfinished
/// trailing frame remains buffered in the decoder. Interrupted reads are
/// retried.
///
/// This method is also re-exported as `caboose::pump::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode<I: Unit, S: Unit, const N: usize>(
    r: &mut impl Read,
    decoder: &mut Decoder<I, S, N>,
    o: &mut impl FromFrames<I>,
) -> Result<(), Error> {
    let mut byte = [0; 1];

    loop {
        match r.read(&mut byte) {
            Ok(0) => return Ok(()),
            Ok(_) => {
                if let Feed::Ready = decoder.feed(byte[0])? {
                    o.add_frame(decoder.items());
                    decoder.reset();
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
}
