//! Header-prefixed fixed-size arrays for the B-minor runtime.
//!
//! Generated code indexes arrays through a bare element pointer, so the
//! element count has to live somewhere reachable from that pointer alone.
//! This crate stores it in a header placed immediately before element 0.
//! This crate is one of two that may contain `unsafe` code (along with
//! `bminor-ffi`), and all of it is confined to the private `raw` module.
//!
//! # Layout
//!
//! ```text
//! integer / float                    boolean
//! base                               base
//! │                                  │
//! ├─ header: i64 | f64  (8 bytes)    ├─ header: c_int (4 bytes)
//! ├─ elements[0]  ◄── returned ptr   ├─ elements[0]  ◄── returned ptr
//! ├─ elements[1]                     ├─ elements[1]
//! │  …                               │  …
//! └─ elements[n-1]                   └─ elements[n-1]
//! ```
//!
//! The offset from element 0 back to the base depends only on the element
//! type (see [`header_offset`]), so a pointer is enough to recover both the
//! count and the allocation layout.
//!
//! # Ownership
//!
//! [`TaggedBuffer`] owns one allocation and releases it on drop. It can be
//! converted to and from the raw element pointer handed to generated code
//! with [`TaggedBuffer::into_raw`] and [`TaggedBuffer::from_raw`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod layout;
mod raw;

pub use bminor_core::{AllocError, Element, ElementKind};
pub use buffer::{clamp_count, TaggedBuffer};
pub use config::ArrayConfig;
pub use layout::{header_offset, BufferLayout};
