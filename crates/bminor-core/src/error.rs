//! Error types for header-prefixed array allocation.
//!
//! Inside Rust these are ordinary recoverable errors. The C boundary turns
//! every one of them into process termination, since generated code has no
//! way to observe a failed array creation.

use std::error::Error;
use std::fmt;

use crate::kind::ElementKind;

/// Errors that can occur while creating a header-prefixed array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested count exceeds the configured element ceiling.
    CapacityExceeded {
        /// Element kind of the rejected array.
        kind: ElementKind,
        /// Number of elements requested.
        requested: usize,
        /// Configured maximum number of elements.
        limit: usize,
    },
    /// The count cannot be represented exactly in the kind's header type.
    HeaderOverflow {
        /// Element kind of the rejected array.
        kind: ElementKind,
        /// Number of elements requested.
        requested: usize,
    },
    /// `header + count * element_size` overflows the address space.
    LayoutOverflow {
        /// Element kind of the rejected array.
        kind: ElementKind,
        /// Number of elements requested.
        requested: usize,
    },
    /// The global allocator returned null.
    OutOfMemory {
        /// Element kind of the rejected array.
        kind: ElementKind,
        /// Total bytes requested from the allocator (header included).
        bytes: usize,
    },
}

impl AllocError {
    /// Element kind of the array whose creation failed.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::CapacityExceeded { kind, .. }
            | Self::HeaderOverflow { kind, .. }
            | Self::LayoutOverflow { kind, .. }
            | Self::OutOfMemory { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                kind,
                requested,
                limit,
            } => {
                write!(
                    f,
                    "{kind} array of {requested} elements exceeds limit of {limit} elements"
                )
            }
            Self::HeaderOverflow { kind, requested } => {
                write!(
                    f,
                    "{kind} array of {requested} elements does not fit its length header"
                )
            }
            Self::LayoutOverflow { kind, requested } => {
                write!(f, "{kind} array of {requested} elements overflows the address space")
            }
            Self::OutOfMemory { kind, bytes } => {
                write!(f, "out of memory allocating {bytes} bytes for {kind} array")
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind_and_size() {
        let e = AllocError::OutOfMemory {
            kind: ElementKind::Float,
            bytes: 808,
        };
        assert_eq!(
            e.to_string(),
            "out of memory allocating 808 bytes for float array"
        );
    }

    #[test]
    fn capacity_message_includes_limit() {
        let e = AllocError::CapacityExceeded {
            kind: ElementKind::Boolean,
            requested: 11,
            limit: 10,
        };
        let msg = e.to_string();
        assert!(msg.contains("boolean"));
        assert!(msg.contains("11"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn kind_accessor_covers_all_variants() {
        let errors = [
            AllocError::CapacityExceeded {
                kind: ElementKind::Integer,
                requested: 2,
                limit: 1,
            },
            AllocError::HeaderOverflow {
                kind: ElementKind::Integer,
                requested: 2,
            },
            AllocError::LayoutOverflow {
                kind: ElementKind::Integer,
                requested: 2,
            },
            AllocError::OutOfMemory {
                kind: ElementKind::Integer,
                bytes: 24,
            },
        ];
        for e in &errors {
            assert_eq!(e.kind(), ElementKind::Integer);
        }
    }
}
