//! The owning [`TaggedBuffer`] handle.

use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use bminor_core::{AllocError, Element, ElementKind};

use crate::config::ArrayConfig;
use crate::raw;

/// Clamp a requested element count to a length.
///
/// Negative counts become `0`. Returns `None` only when a non-negative count
/// does not fit `usize` (32-bit targets).
pub fn clamp_count(count: i64) -> Option<usize> {
    usize::try_from(count.max(0)).ok()
}

/// A fixed-size, zero-initialised array whose length lives in a header
/// directly in front of element 0.
///
/// The buffer dereferences to `[T]`. It never resizes, and the header is
/// written once at creation. Dropping the buffer releases the allocation.
///
/// ```
/// use bminor_array::TaggedBuffer;
///
/// let mut flags = TaggedBuffer::<bool>::new(5).unwrap();
/// assert_eq!(flags.len(), 5);
/// assert!(flags.iter().all(|&b| !b));
/// flags[2] = true;
///
/// let ptr = flags.into_raw();
/// assert_eq!(unsafe { TaggedBuffer::length_of(ptr) }, 5);
/// drop(unsafe { TaggedBuffer::from_raw(ptr) });
/// ```
pub struct TaggedBuffer<T: Element> {
    elements: NonNull<T>,
    len: usize,
    _owns: PhantomData<T>,
}

impl<T: Element> TaggedBuffer<T> {
    /// Create a buffer of `count` zeroed elements with the default config.
    ///
    /// Negative counts are treated as `0`.
    pub fn new(count: i64) -> Result<Self, AllocError> {
        Self::with_config(count, &ArrayConfig::default())
    }

    /// Create a buffer of `count` zeroed elements, enforcing `config`.
    ///
    /// Negative counts are treated as `0`. Fails without allocating if the
    /// count exceeds `config.max_elements` or the kind's header range.
    pub fn with_config(count: i64, config: &ArrayConfig) -> Result<Self, AllocError> {
        let len = clamp_count(count).ok_or(AllocError::LayoutOverflow {
            kind: T::KIND,
            requested: usize::MAX,
        })?;
        if !config.permits(len) {
            return Err(AllocError::CapacityExceeded {
                kind: T::KIND,
                requested: len,
                limit: config.max_elements,
            });
        }
        let header = T::encode_len(len).ok_or(AllocError::HeaderOverflow {
            kind: T::KIND,
            requested: len,
        })?;
        let elements = raw::allocate::<T>(len, header)?;
        Ok(Self {
            elements,
            len,
            _owns: PhantomData,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds zero elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element kind of this buffer.
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// Pointer to element 0.
    pub fn as_ptr(&self) -> *const T {
        self.elements.as_ptr()
    }

    /// Mutable pointer to element 0.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.elements.as_ptr()
    }

    /// Give up ownership and return the element pointer.
    ///
    /// The allocation stays live until the pointer is passed back to
    /// [`from_raw`](Self::from_raw) and the result dropped.
    pub fn into_raw(self) -> *mut T {
        let this = ManuallyDrop::new(self);
        this.elements.as_ptr()
    }

    /// Reclaim ownership of an element pointer produced by
    /// [`into_raw`](Self::into_raw).
    ///
    /// Returns `None` for a null pointer. The length is read back from the
    /// header.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must come from `TaggedBuffer::<T>::into_raw` with the
    /// same `T` and must not have been reclaimed already.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw(ptr: *mut T) -> Option<Self> {
        let elements = NonNull::new(ptr)?;
        // SAFETY: caller guarantees ptr is a live buffer of element type T.
        let len = T::decode_len(unsafe { raw::read_header(elements) }) as usize;
        Some(Self {
            elements,
            len,
            _owns: PhantomData,
        })
    }

    /// Element count stored in front of `ptr`, widened to `i64`.
    ///
    /// Returns `0` for a null pointer.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point at element 0 of a live buffer of element
    /// type `T`.
    #[allow(unsafe_code)]
    pub unsafe fn length_of(ptr: *const T) -> i64 {
        match NonNull::new(ptr.cast_mut()) {
            None => 0,
            // SAFETY: caller guarantees ptr is a live buffer of element type T.
            Some(elements) => T::decode_len(unsafe { raw::read_header(elements) }),
        }
    }
}

#[allow(unsafe_code)]
impl<T: Element> Deref for TaggedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: self owns a live buffer of self.len elements; &self forbids
        // concurrent mutable access.
        unsafe { raw::elements(self.elements, self.len) }
    }
}

#[allow(unsafe_code)]
impl<T: Element> DerefMut for TaggedBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: self owns a live buffer; &mut self guarantees exclusivity.
        unsafe { raw::elements_mut(self.elements, self.len) }
    }
}

#[allow(unsafe_code)]
impl<T: Element> Drop for TaggedBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: self owns the buffer and is never used again.
        unsafe { raw::release(self.elements) };
    }
}

impl<T: Element> fmt::Debug for TaggedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedBuffer")
            .field("kind", &T::KIND)
            .field("len", &self.len)
            .field("elements", &self.deref())
            .finish()
    }
}
