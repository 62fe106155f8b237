//! Total print operations over any writer.

use std::io::{self, Write};

use crate::config::IoConfig;
use crate::format;

/// Print side of the I/O adapter.
///
/// Each `print_*` call writes one value and then flushes (unless
/// [`IoConfig::flush_each_write`] is off). No call returns an error: a
/// failing write or flush is reported on stderr and otherwise ignored,
/// because generated code has nowhere to receive it.
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    config: IoConfig,
}

impl<W: Write> Printer<W> {
    /// Wrap a writer with the default config.
    pub fn new(out: W) -> Self {
        Self::with_config(out, IoConfig::default())
    }

    /// Wrap a writer with an explicit config.
    pub fn with_config(out: W, config: IoConfig) -> Self {
        Self { out, config }
    }

    /// Print a 64-bit integer in decimal.
    pub fn print_integer(&mut self, value: i64) {
        let result = format::write_integer(&mut self.out, value);
        self.finish("print_integer", result);
    }

    /// Print a float, without decimals when it is integral.
    pub fn print_float(&mut self, value: f64) {
        let result = format::write_float(&mut self.out, value);
        self.finish("print_float", result);
    }

    /// Print `true` or `false`.
    pub fn print_boolean(&mut self, value: bool) {
        let result = format::write_boolean(&mut self.out, value);
        self.finish("print_boolean", result);
    }

    /// Print one raw byte.
    pub fn print_char(&mut self, value: u8) {
        let result = format::write_char(&mut self.out, value);
        self.finish("print_char", result);
    }

    /// Print raw string bytes, or the null placeholder for `None`.
    pub fn print_string(&mut self, text: Option<&[u8]>) {
        let result = format::write_string(&mut self.out, text, self.config.null_placeholder);
        self.finish("print_string", result);
    }

    /// Print a line terminator.
    pub fn print_newline(&mut self) {
        let result = self.out.write_all(b"\n");
        self.finish("print_newline", result);
    }

    /// The active configuration.
    pub fn config(&self) -> &IoConfig {
        &self.config
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn finish(&mut self, op: &str, written: io::Result<()>) {
        let result = written.and_then(|()| {
            if self.config.flush_each_write {
                self.out.flush()
            } else {
                Ok(())
            }
        });
        if let Err(e) = result {
            eprintln!("bminor-io: warning: {op} failed: {e}");
        }
    }
}
