//! Scalar I/O adapter for the B-minor runtime.
//!
//! Stateless formatting of integers, floats, booleans, characters and
//! strings, plus integer/float/line input. Every print flushes, so output is
//! visible before a following read blocks. Every read is total: malformed
//! input is discarded up to the end of the line and replaced by zero.
//!
//! The generic [`Printer`] and [`Scanner`] work over any `Write`/`BufRead`;
//! [`stdio`] holds the process-wide instances bound to stdout and stdin.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod format;
pub mod printer;
pub mod scanner;
pub mod stdio;

pub use config::IoConfig;
pub use error::ScanError;
pub use format::format_float;
pub use printer::Printer;
pub use scanner::Scanner;
