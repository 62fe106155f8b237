//! Input fixtures for scanner tests.

use std::io::{self, BufRead, Cursor, Read};

/// In-memory input stream holding `text`, as if typed at a terminal.
pub fn scripted_input(text: &str) -> Cursor<Vec<u8>> {
    Cursor::new(text.as_bytes().to_vec())
}

/// Reader that fails every call with the given error kind.
///
/// `Interrupted` is the interesting case: readers are expected to retry it,
/// so pair it with [`FailingReader::interrupt_then`] to yield data after a
/// fixed number of interruptions.
#[derive(Debug)]
pub struct FailingReader {
    kind: io::ErrorKind,
    failures_left: Option<usize>,
    data: Cursor<Vec<u8>>,
}

impl FailingReader {
    /// Fails forever with `kind`.
    pub fn new(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            failures_left: None,
            data: Cursor::new(Vec::new()),
        }
    }

    /// Reports `Interrupted` `times` times, then serves `text`.
    pub fn interrupt_then(times: usize, text: &str) -> Self {
        Self {
            kind: io::ErrorKind::Interrupted,
            failures_left: Some(times),
            data: scripted_input(text),
        }
    }

    fn fail(&mut self) -> Option<io::Error> {
        match &mut self.failures_left {
            None => Some(io::Error::new(self.kind, "mock input failure")),
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                Some(io::Error::new(self.kind, "mock input failure"))
            }
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(e) = self.fail() {
            return Err(e);
        }
        self.data.read(buf)
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if let Some(e) = self.fail() {
            return Err(e);
        }
        self.data.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.data.consume(amt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_serves_text() {
        let mut s = String::new();
        scripted_input("1 2\n").read_to_string(&mut s).unwrap();
        assert_eq!(s, "1 2\n");
    }

    #[test]
    fn interrupts_run_out() {
        let mut r = FailingReader::interrupt_then(2, "ok");
        assert!(r.fill_buf().is_err());
        assert!(r.fill_buf().is_err());
        assert_eq!(r.fill_buf().unwrap(), b"ok");
    }
}
