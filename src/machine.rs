//! Internal state machines for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoding, such as firmware polling a serial line between other work. See
//! [`crate::pump`] for driving loops covering common input shapes.
//!
//! # Architecture
//!
//! Two small state machines advance independently over the same byte stream:
//!
//! - An [`ItemCursor`] merges bytes, least-significant first, into
//!   fixed-width items.
//! - A [`SentinelCursor`] tracks how far the most recent bytes have matched
//!   the frame terminator.
//!
//! Neither knows about the other. The [`Decoder`] dispatches each byte to
//! both and composes their answers: items completed while a terminator match
//! is in progress are held speculatively, retracted if the match confirms,
//! and kept as ordinary payload if it breaks.
//!
//! The cursors are small and hard to misuse, but the composition rules are
//! easy to get subtly wrong; implementers are recommended to begin by
//! studying the drivers in [`crate::pump`].

pub mod decoder;
pub mod item;
pub mod sentinel;
pub mod unit;

pub use decoder::{Decoder, Feed, Overflow};
pub use item::ItemCursor;
pub use sentinel::SentinelCursor;
pub use unit::Unit;

/// The carriage-return line-feed terminator, encoded least-significant byte
/// first, as used by the command links this crate was written for.
pub const CRLF: u16 = u16::from_le_bytes([b'\r', b'\n']);
