//! Byte layout of a tagged buffer.
//!
//! A single generic computation replaces per-kind offset arithmetic: the
//! header layout is extended by the element array layout, which yields both
//! the total allocation size and the offset of element 0.

use std::alloc::Layout;

use bminor_core::{AllocError, Element};

/// Byte distance from the allocation base to element 0 for element type `T`.
///
/// This is the header size rounded up to the element alignment, and does not
/// depend on the element count: 8 for `i64` and `f64`, 4 for `bool`.
pub const fn header_offset<T: Element>() -> usize {
    let header = std::mem::size_of::<T::Header>();
    let align = std::mem::align_of::<T>();
    (header + align - 1) & !(align - 1)
}

/// Allocation shape for a tagged buffer of `len` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferLayout {
    layout: Layout,
    elements_offset: usize,
    len: usize,
}

impl BufferLayout {
    /// Compute the layout of a buffer holding `len` elements of type `T`.
    ///
    /// Returns `Err(AllocError::LayoutOverflow)` if the total size overflows
    /// `isize::MAX`.
    pub fn for_count<T: Element>(len: usize) -> Result<Self, AllocError> {
        let overflow = || AllocError::LayoutOverflow {
            kind: T::KIND,
            requested: len,
        };
        let header = Layout::new::<T::Header>();
        let elements = Layout::array::<T>(len).map_err(|_| overflow())?;
        let (layout, elements_offset) = header.extend(elements).map_err(|_| overflow())?;
        debug_assert_eq!(elements_offset, header_offset::<T>());
        Ok(Self {
            layout: layout.pad_to_align(),
            elements_offset,
            len,
        })
    }

    /// Layout passed to the global allocator.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Total allocation size in bytes, header and padding included.
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Alignment of the allocation base.
    pub fn align(&self) -> usize {
        self.layout.align()
    }

    /// Byte offset of element 0 from the allocation base.
    pub fn elements_offset(&self) -> usize {
        self.elements_offset
    }

    /// Number of elements the layout holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the layout holds zero elements (header only).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
