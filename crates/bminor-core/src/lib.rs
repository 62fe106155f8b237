//! Core types for the B-minor runtime support layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the allocator, the I/O adapter and the C ABI:
//! element kinds, the [`Element`] binding between an element type and its
//! header storage type, and allocation error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod kind;

pub use element::Element;
pub use error::AllocError;
pub use kind::ElementKind;
