//! Low-level primitives for tagged buffer memory.
//!
//! The only code that touches the count header. Every `unsafe` block
//! carries a `// SAFETY:` comment stating the invariant it relies on.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use bminor_core::{AllocError, Element};

use crate::layout::{header_offset, BufferLayout};

/// Allocate a zeroed tagged buffer of `len` elements and store `header`.
///
/// Returns a pointer to element 0.
pub(crate) fn allocate<T: Element>(len: usize, header: T::Header) -> Result<NonNull<T>, AllocError> {
    let shape = BufferLayout::for_count::<T>(len)?;
    let layout: Layout = shape.layout();
    // SAFETY: the layout always includes the header, so its size is non-zero.
    let base = unsafe { alloc::alloc_zeroed(layout) };
    let Some(base) = NonNull::new(base) else {
        return Err(AllocError::OutOfMemory {
            kind: T::KIND,
            bytes: layout.size(),
        });
    };
    // SAFETY: base is aligned to at least align_of::<T::Header>() and the
    // first size_of::<T::Header>() bytes belong to the allocation.
    unsafe { base.cast::<T::Header>().as_ptr().write(header) };
    // SAFETY: elements_offset <= layout.size(), so the result stays inside the
    // allocation (or one past its end when len == 0), aligned for T.
    let elements = unsafe { base.add(shape.elements_offset()) };
    Ok(elements.cast::<T>())
}

/// Recover the allocation base from an element pointer.
///
/// # Safety
///
/// `elements` must have been returned by [`allocate::<T>`] and not released.
unsafe fn base_of<T: Element>(elements: NonNull<T>) -> NonNull<u8> {
    // SAFETY: allocate() placed element 0 exactly header_offset::<T>() bytes
    // past the base of the same allocation.
    unsafe { elements.cast::<u8>().sub(header_offset::<T>()) }
}

/// Read the count header in front of `elements`.
///
/// # Safety
///
/// `elements` must have been returned by [`allocate::<T>`] and not released.
pub(crate) unsafe fn read_header<T: Element>(elements: NonNull<T>) -> T::Header {
    // SAFETY: the base is aligned for T::Header and the header was initialised
    // by allocate(); it is never written again.
    unsafe { base_of(elements).cast::<T::Header>().as_ptr().read() }
}

/// Borrow the element region as a slice.
///
/// # Safety
///
/// `elements` must have been returned by [`allocate::<T>`] with `len`
/// elements, not released, and not mutably aliased for `'a`.
pub(crate) unsafe fn elements<'a, T: Element>(elements: NonNull<T>, len: usize) -> &'a [T] {
    // SAFETY: the region holds len initialised (zeroed, valid for T) elements.
    unsafe { std::slice::from_raw_parts(elements.as_ptr(), len) }
}

/// Mutably borrow the element region.
///
/// # Safety
///
/// As [`elements`], and the region must not be aliased at all for `'a`.
pub(crate) unsafe fn elements_mut<'a, T: Element>(
    elements: NonNull<T>,
    len: usize,
) -> &'a mut [T] {
    // SAFETY: see elements(); exclusivity is guaranteed by the caller.
    unsafe { std::slice::from_raw_parts_mut(elements.as_ptr(), len) }
}

/// Release a tagged buffer, reconstructing its layout from the header.
///
/// # Safety
///
/// `elements` must have been returned by [`allocate::<T>`] and not released.
/// It must not be used afterwards.
pub(crate) unsafe fn release<T: Element>(elements: NonNull<T>) {
    // SAFETY: caller guarantees a live buffer.
    let len = T::decode_len(unsafe { read_header(elements) }) as usize;
    match BufferLayout::for_count::<T>(len) {
        // SAFETY: an intact header rebuilds exactly the layout passed to
        // alloc_zeroed(), at the same base.
        Ok(shape) => unsafe { alloc::dealloc(base_of(elements).as_ptr(), shape.layout()) },
        // Only reachable if the header was overwritten; the buffer leaks.
        Err(e) => debug_assert!(false, "corrupt array header on release: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_sits_one_element_before_integer_data() {
        let ptr = allocate::<i64>(4, 4).unwrap();
        // SAFETY: ptr is live; the header occupies index -1.
        let header = unsafe { ptr.as_ptr().sub(1).read() };
        assert_eq!(header, 4);
        unsafe { release(ptr) };
    }

    #[test]
    fn float_header_is_stored_as_double() {
        let ptr = allocate::<f64>(3, 3.0).unwrap();
        // SAFETY: ptr is live; the header occupies index -1.
        let header = unsafe { ptr.as_ptr().sub(1).read() };
        assert_eq!(header.to_bits(), 3.0f64.to_bits());
        unsafe { release(ptr) };
    }

    #[test]
    fn boolean_header_is_int_four_bytes_back() {
        let ptr = allocate::<bool>(5, 5).unwrap();
        // SAFETY: ptr is live; the c_int header starts 4 bytes before it.
        let header = unsafe {
            ptr.cast::<u8>()
                .sub(4)
                .cast::<std::ffi::c_int>()
                .as_ptr()
                .read()
        };
        assert_eq!(header, 5);
        unsafe { release(ptr) };
    }

    #[test]
    fn elements_are_zeroed_and_aligned() {
        let ptr = allocate::<f64>(16, 16.0).unwrap();
        assert_eq!(ptr.as_ptr() as usize % std::mem::align_of::<f64>(), 0);
        let data = unsafe { elements(ptr, 16) };
        assert!(data.iter().all(|&x| x == 0.0));
        unsafe { release(ptr) };
    }

    #[test]
    fn empty_buffer_round_trips_header() {
        let ptr = allocate::<bool>(0, 0).unwrap();
        assert_eq!(unsafe { read_header(ptr) }, 0);
        assert!(unsafe { elements(ptr, 0) }.is_empty());
        unsafe { release(ptr) };
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "corrupt array header")]
    fn release_with_overwritten_header_is_caught() {
        let ptr = allocate::<i64>(2, 2).unwrap();
        // SAFETY: ptr is live; index -1 is the header slot.
        unsafe { ptr.as_ptr().sub(1).write(-1) };
        unsafe { release(ptr) };
    }

    #[test]
    fn writes_do_not_touch_header() {
        let ptr = allocate::<i64>(3, 3).unwrap();
        let data = unsafe { elements_mut(ptr, 3) };
        data.copy_from_slice(&[-1, -1, -1]);
        assert_eq!(unsafe { read_header(ptr) }, 3);
        unsafe { release(ptr) };
    }
}
