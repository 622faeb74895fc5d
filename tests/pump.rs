#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::io::{self, Read};

use caboose::encode;
use caboose::machine::{CRLF, Decoder, Overflow};
use caboose::pump::source::{self, ByteSource};
use caboose::pump::{FromFrames, decode_reader, decode_slice, drain};

/// Receiver collecting each frame's items.
#[derive(Default)]
struct Frames(Vec<Vec<u8>>);

impl FromFrames<u8> for Frames {
    fn add_frame(&mut self, items: &[u8]) {
        self.0.push(items.to_vec());
    }
}

#[test]
fn decode_slice_splits_frames() {
    let mut decoder = Decoder::<u8, u16, 8>::new(CRLF);
    let mut frames = Frames::default();

    decode_slice(b"AB\r\nCD\r\n", &mut decoder, &mut frames).unwrap();

    assert_eq!(frames.0, [b"AB", b"CD"]);
}

#[test]
fn decode_slice_buffers_across_calls() {
    let mut decoder = Decoder::<u8, u16, 8>::new(CRLF);
    let mut frames = Frames::default();

    decode_slice(b"AB\r\nC", &mut decoder, &mut frames).unwrap();
    assert_eq!(frames.0, [b"AB"]);

    decode_slice(b"D\r\n", &mut decoder, &mut frames).unwrap();
    assert_eq!(frames.0, [b"AB", b"CD"]);
}

#[test]
fn decode_slice_resumes_after_overflow() {
    let mut decoder = Decoder::<u8, u16, 2>::new(CRLF);
    let mut frames = Frames::default();

    let stream = b"ABC\r\nDE\r\n";

    let error = decode_slice(stream, &mut decoder, &mut frames).unwrap_err();
    assert_eq!(error.source, Overflow { capacity: 2 });
    assert_eq!(error.fed, 5);

    decode_slice(&stream[error.fed..], &mut decoder, &mut frames).unwrap();
    assert_eq!(frames.0, [b"DE"]);
}

#[test]
fn decode_reader_splits_frames() {
    let mut decoder = Decoder::<u8, u16, 8>::new(CRLF);
    let mut frames = Frames::default();

    let mut reader = io::Cursor::new(b"AB\r\nCD\r\n");
    decode_reader(&mut reader, &mut decoder, &mut frames).unwrap();

    assert_eq!(frames.0, [b"AB", b"CD"]);
}

/// A reader interrupting once before every byte it yields.
struct Interrupting<R> {
    inner: R,
    interrupt: bool,
}

impl<R: Read> Read for Interrupting<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt {
            self.interrupt = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }

        self.interrupt = true;
        self.inner.read(&mut buf[..1])
    }
}

#[test]
fn decode_reader_retries_interrupted_reads() {
    let mut decoder = Decoder::<u8, u16, 8>::new(CRLF);
    let mut frames = Frames::default();

    let mut reader = Interrupting {
        inner: io::Cursor::new(b"AB\r\n"),
        interrupt: true,
    };
    decode_reader(&mut reader, &mut decoder, &mut frames).unwrap();

    assert_eq!(frames.0, [b"AB"]);
}

/// A polled source over a queue of bytes.
#[derive(Default)]
struct Queue(VecDeque<u8>);

impl Queue {
    fn push(&mut self, bytes: &[u8]) {
        self.0.extend(bytes);
    }
}

impl ByteSource for Queue {
    type Error = ();

    fn ready(&mut self) -> bool {
        !self.0.is_empty()
    }

    fn read(&mut self) -> Result<u8, ()> {
        self.0.pop_front().ok_or(())
    }
}

#[test]
fn drain_decodes_while_bytes_are_ready() {
    let mut decoder = Decoder::<u8, u16, 8>::new(CRLF);
    let mut frames = Frames::default();
    let mut queue = Queue::default();

    queue.push(b"AB\r\nC");
    drain(&mut queue, &mut decoder, &mut frames).unwrap();
    assert_eq!(frames.0, [b"AB"]);
    assert!(!queue.ready());

    // The partial frame completes once more bytes arrive.
    queue.push(b"D\r\n");
    drain(&mut queue, &mut decoder, &mut frames).unwrap();
    assert_eq!(frames.0, [b"AB", b"CD"]);
}

/// A source erroring on every read.
struct Faulty;

impl ByteSource for Faulty {
    type Error = &'static str;

    fn ready(&mut self) -> bool {
        true
    }

    fn read(&mut self) -> Result<u8, &'static str> {
        Err("line noise")
    }
}

#[test]
fn drain_propagates_source_errors() {
    let mut decoder = Decoder::<u8, u16, 8>::new(CRLF);
    let mut frames = Frames::default();

    let error = drain(&mut Faulty, &mut decoder, &mut frames).unwrap_err();
    assert!(matches!(error, source::Error::Source("line noise")));
}

#[test]
fn encoded_frames_decode_back() {
    let mut out = [0; 8];
    let n = encode::frame(&[0x41u8, 0x42], CRLF, &mut out).unwrap();
    assert_eq!(&out[..n], b"AB\r\n");

    let mut decoder = Decoder::<u8, u16, 8>::new(CRLF);
    let mut frames = Frames::default();
    decode_slice(&out[..n], &mut decoder, &mut frames).unwrap();

    assert_eq!(frames.0, [b"AB"]);
}

#[test]
fn encode_writes_items_least_significant_first() {
    let mut out = [0; 8];
    let n = encode::frame(&[0x2010u16, 0x4030], CRLF, &mut out).unwrap();

    assert_eq!(&out[..n], &[0x10, 0x20, 0x30, 0x40, 0x0D, 0x0A]);
}

#[test]
fn encode_rejects_a_short_buffer() {
    let mut out = [0; 3];

    let error = encode::frame(&[0x41u8, 0x42], CRLF, &mut out).unwrap_err();
    assert_eq!(error, encode::Truncated { needed: 4 });
    assert_eq!(out, [0; 3]);
}
