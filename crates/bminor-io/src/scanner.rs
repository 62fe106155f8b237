//! Numeric and line input over any buffered reader.
//!
//! Numbers are read scanf-style: leading whitespace (line breaks included) is
//! skipped, the next whitespace-delimited token is taken, and its longest
//! numeric prefix is the value. Whatever follows that prefix inside the
//! token stays queued for the next read. A token with no numeric prefix is a
//! failure, and the total read methods then drop the rest of the line.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use lexical_core::FromLexical;

use crate::config::IoConfig;
use crate::error::ScanError;

/// C `isspace` in the "C" locale.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Whether a parsed prefix holds more than a sign.
///
/// A lone `-` or `+` parses as zero; scanf rejects it. Letters only survive
/// in float prefixes as `inf`/`nan`.
fn has_magnitude(prefix: &[u8]) -> bool {
    prefix.iter().any(u8::is_ascii_alphanumeric)
}

/// Read side of the I/O adapter.
#[derive(Debug)]
pub struct Scanner<R: BufRead> {
    input: R,
    /// Unparsed tail of the last numeric token, read before `input`.
    pending: VecDeque<u8>,
    config: IoConfig,
}

impl<R: BufRead> Scanner<R> {
    /// Wrap a reader with the default config.
    pub fn new(input: R) -> Self {
        Self::with_config(input, IoConfig::default())
    }

    /// Wrap a reader with an explicit config.
    pub fn with_config(input: R, config: IoConfig) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            config,
        }
    }

    /// Read an integer, or return `0` after discarding the rest of the line.
    pub fn read_integer(&mut self) -> i64 {
        let result = self.try_read_integer();
        self.recover(result, "read_integer")
    }

    /// Read a float, or return `0.0` after discarding the rest of the line.
    pub fn read_float(&mut self) -> f64 {
        let result = self.try_read_float();
        self.recover(result, "read_float")
    }

    /// Read an integer without recovery.
    ///
    /// On failure the offending token has been consumed but the rest of its
    /// line has not.
    pub fn try_read_integer(&mut self) -> Result<i64, ScanError> {
        self.read_number::<i64>()
    }

    /// Read a float without recovery.
    ///
    /// Accepts decimal and exponent forms as well as `inf`/`nan`.
    pub fn try_read_float(&mut self) -> Result<f64, ScanError> {
        self.read_number::<f64>()
    }

    /// Read one line of at most `max` bytes, `fgets`-style.
    ///
    /// Stops after a `\n` or once `max` bytes are stored; a longer line keeps
    /// its remainder in the stream. The `\n` (and, per config, a `\r` before
    /// it) is not included. Returns `Ok(None)` when input is already at its
    /// end.
    pub fn try_read_line(&mut self, max: usize) -> Result<Option<Vec<u8>>, ScanError> {
        let mut line = Vec::new();
        if max == 0 {
            return Ok(Some(line));
        }
        let mut consumed_any = false;
        let mut terminated = false;
        while line.len() < max {
            let Some(b) = self.peek_byte()? else {
                break;
            };
            self.bump();
            consumed_any = true;
            if b == b'\n' {
                terminated = true;
                break;
            }
            line.push(b);
        }
        if !consumed_any {
            return Ok(None);
        }
        if terminated && self.config.strip_carriage_return && line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Read one line of at most `max` bytes; empty on end of input or error.
    pub fn read_line(&mut self, max: usize) -> Vec<u8> {
        match self.try_read_line(max) {
            Ok(line) => line.unwrap_or_default(),
            Err(e) => {
                eprintln!("bminor-io: warning: read_string failed: {e}");
                Vec::new()
            }
        }
    }

    /// Drop buffered and stream input up to and including the next `\n`.
    pub fn discard_line(&mut self) -> io::Result<()> {
        self.pending.clear();
        loop {
            let (used, done) = {
                let buf = self.fill_buf()?;
                if buf.is_empty() {
                    return Ok(());
                }
                match buf.iter().position(|&b| b == b'\n') {
                    Some(pos) => (pos + 1, true),
                    None => (buf.len(), false),
                }
            };
            self.input.consume(used);
            if done {
                return Ok(());
            }
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &IoConfig {
        &self.config
    }

    /// Unwrap the underlying reader. Queued token bytes are lost.
    pub fn into_inner(self) -> R {
        self.input
    }

    fn recover<T: Default>(&mut self, result: Result<T, ScanError>, op: &str) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                if let ScanError::Io { .. } = e {
                    eprintln!("bminor-io: warning: {op} failed: {e}");
                }
                if let Err(e) = self.discard_line() {
                    eprintln!("bminor-io: warning: {op} recovery failed: {e}");
                }
                T::default()
            }
        }
    }

    fn read_number<T: FromLexical>(&mut self) -> Result<T, ScanError> {
        let token = self.next_token()?;
        match lexical_core::parse_partial::<T>(&token) {
            Ok((value, used)) if has_magnitude(&token[..used]) => {
                for &b in token[used..].iter().rev() {
                    self.pending.push_front(b);
                }
                Ok(value)
            }
            _ => Err(ScanError::Invalid {
                token: String::from_utf8_lossy(&token).into_owned(),
            }),
        }
    }

    /// Skip whitespace, then take bytes up to the next whitespace or EOF.
    fn next_token(&mut self) -> Result<Vec<u8>, ScanError> {
        while let Some(b) = self.peek_byte()? {
            if !is_space(b) {
                break;
            }
            self.bump();
        }
        let mut token = Vec::new();
        while let Some(b) = self.peek_byte()? {
            if is_space(b) {
                break;
            }
            token.push(b);
            self.bump();
        }
        if token.is_empty() {
            return Err(ScanError::Eof);
        }
        Ok(token)
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(&b) = self.pending.front() {
            return Ok(Some(b));
        }
        Ok(self.fill_buf()?.first().copied())
    }

    /// Consume the byte last returned by `peek_byte`.
    fn bump(&mut self) {
        if self.pending.pop_front().is_none() {
            self.input.consume(1);
        }
    }

    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        loop {
            match self.input.fill_buf() {
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        self.input.fill_buf()
    }
}
