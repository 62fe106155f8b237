//! B-minor runtime support, as a Rust library.
//!
//! This is the facade crate that re-exports the Rust API of the runtime
//! sub-crates. Compiled B-minor programs link the C ABI in `bminor-ffi`
//! instead; this crate is for Rust hosts, tools and tests that want the same
//! arrays and the same textual conventions.
//!
//! # Quick start
//!
//! ```rust
//! use bminor::prelude::*;
//!
//! // An array of five booleans, all false, with its length in a header.
//! let mut seen = TaggedBuffer::<bool>::new(5).unwrap();
//! seen[1] = true;
//! assert_eq!(seen.len(), 5);
//!
//! // Print it the way generated code would.
//! let mut out = Printer::new(Vec::new());
//! for &flag in seen.iter() {
//!     out.print_boolean(flag);
//!     out.print_char(b' ');
//! }
//! out.print_float(4.0);
//! out.print_newline();
//! assert_eq!(out.into_inner(), b"false true false false false 4\n");
//!
//! // Read numbers back; bad input becomes zero.
//! let mut input = Scanner::new(&b"12 oops\n7\n"[..]);
//! assert_eq!(input.read_integer(), 12);
//! assert_eq!(input.read_integer(), 0);
//! assert_eq!(input.read_integer(), 7);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `bminor-core` | Element kinds, the `Element` trait, `AllocError` |
//! | [`array`] | `bminor-array` | `TaggedBuffer`, layouts, `ArrayConfig` |
//! | [`io`] | `bminor-io` | Formatting, `Printer`, `Scanner`, stdio instances |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element kinds and errors (`bminor-core`).
pub use bminor_core as types;

/// Header-prefixed arrays (`bminor-array`).
///
/// [`array::TaggedBuffer`] is also in the [`prelude`].
pub use bminor_array as array;

/// Scalar printing and reading (`bminor-io`).
///
/// [`io::stdio`] holds the process-wide stdout printer and stdin scanner.
pub use bminor_io as io;

/// Common imports for typical runtime usage.
///
/// ```rust
/// use bminor::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use bminor_core::{AllocError, Element, ElementKind};

    // Arrays
    pub use bminor_array::{ArrayConfig, TaggedBuffer};

    // I/O
    pub use bminor_io::{format_float, IoConfig, Printer, ScanError, Scanner};
}
