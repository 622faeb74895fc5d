#![no_std]

//! A streaming decoder for sentinel-terminated command frames on serial
//! links.
//!
//! Caboose turns a continuous byte stream, delivered one byte at a time with
//! no transport framing, into frames of fixed-width items ended by a
//! fixed-width sentinel value. The protocol has no escaping: sentinel bytes
//! may legitimately occur inside item payloads, so the decoder tracks
//! candidate sentinel matches speculatively while continuing to form items,
//! and retracts items fabricated from terminator bytes once a match
//! confirms.
//!
//! Most users should begin with the driving loops and the [`FromFrames`]
//! receiver trait in the [`pump`] module. Applications needing finer control
//! over decoding (such as those polling a serial line on embedded systems)
//! can drive the [`machine`] module directly, one byte per call.
//!
//! [`FromFrames`]: pump::FromFrames
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoding (default).
//! - `defmt`: derive [`defmt::Format`] on public types.

pub mod encode;
pub mod machine;
pub mod pump;
