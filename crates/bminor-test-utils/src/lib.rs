//! Test utilities and mock streams for B-minor runtime development.
//!
//! Provides in-memory writers that record what the code under test did with
//! them ([`CaptureWriter`], [`FailingWriter`]) and input fixtures in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::io::{self, Write};

use bminor_core::ElementKind;

pub use fixtures::{scripted_input, FailingReader};

/// Every element kind, in declaration order.
pub const ALL_KINDS: [ElementKind; 3] = ElementKind::ALL;

/// Element counts worth exercising for every kind: empty, single, small and
/// a few sizes straddling common allocator bins.
pub const SAMPLE_COUNTS: [i64; 7] = [0, 1, 5, 63, 64, 4096, 65_537];

/// Writer that keeps every byte and counts flushes.
///
/// Use [`unflushed_len`](CaptureWriter::unflushed_len) to assert that code
/// under test flushed after its last write.
#[derive(Debug, Default)]
pub struct CaptureWriter {
    bytes: Vec<u8>,
    flushes: usize,
    flushed_at: usize,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All bytes written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Written bytes as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Bytes written since the last flush.
    pub fn unflushed_len(&self) -> usize {
        self.bytes.len() - self.flushed_at
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        self.flushed_at = self.bytes.len();
        Ok(())
    }
}

/// Writer whose every write and flush fails, like a closed pipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock stream closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock stream closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_tracks_flush_boundary() {
        let mut w = CaptureWriter::new();
        w.write_all(b"ab").unwrap();
        assert_eq!(w.unflushed_len(), 2);
        w.flush().unwrap();
        w.write_all(b"c").unwrap();
        assert_eq!(w.text(), "abc");
        assert_eq!(w.flushes(), 1);
        assert_eq!(w.unflushed_len(), 1);
    }

    #[test]
    fn failing_writer_always_errors() {
        let mut w = FailingWriter;
        assert!(w.write_all(b"x").is_err());
        assert!(w.flush().is_err());
    }
}
