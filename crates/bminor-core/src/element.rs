//! Binding between an array element type and its count-header storage type.

use std::ffi::c_int;
use std::fmt::Debug;

use crate::kind::ElementKind;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// Largest count a double header can hold without rounding (2^53).
pub const MAX_FLOAT_HEADER_COUNT: u64 = 1 << 53;

/// Largest count a native `int` header can hold.
pub const MAX_INT_HEADER_COUNT: u64 = c_int::MAX as u64;

/// An element type that can be stored in a header-prefixed array.
///
/// Sealed: the set of kinds is fixed by the C ABI. The associated
/// [`Header`](Element::Header) type is what actually sits in memory in front
/// of element 0, so integer and float arrays keep a one-element-wide header
/// while boolean arrays keep an `int`-wide one.
///
/// The all-zero bit pattern must be a valid `Self` equal to [`Element::ZERO`];
/// the allocator relies on this for zero-initialisation.
pub trait Element: Copy + PartialEq + Debug + sealed::Sealed + 'static {
    /// In-memory representation of the element count.
    type Header: Copy + Debug + 'static;

    /// Which element kind this type implements.
    const KIND: ElementKind;

    /// Value of a freshly created element.
    const ZERO: Self;

    /// Encode `len` into the header representation.
    ///
    /// Returns `None` if the header type cannot represent `len` exactly.
    fn encode_len(len: usize) -> Option<Self::Header>;

    /// Decode a stored header back into a count, widened to `i64`.
    fn decode_len(header: Self::Header) -> i64;
}

impl Element for i64 {
    type Header = i64;
    const KIND: ElementKind = ElementKind::Integer;
    const ZERO: Self = 0;

    fn encode_len(len: usize) -> Option<i64> {
        i64::try_from(len).ok()
    }

    fn decode_len(header: i64) -> i64 {
        header
    }
}

impl Element for f64 {
    type Header = f64;
    const KIND: ElementKind = ElementKind::Float;
    const ZERO: Self = 0.0;

    fn encode_len(len: usize) -> Option<f64> {
        let wide = len as u64;
        if wide > MAX_FLOAT_HEADER_COUNT {
            return None;
        }
        Some(wide as f64)
    }

    fn decode_len(header: f64) -> i64 {
        header as i64
    }
}

impl Element for bool {
    type Header = c_int;
    const KIND: ElementKind = ElementKind::Boolean;
    const ZERO: Self = false;

    fn encode_len(len: usize) -> Option<c_int> {
        c_int::try_from(len).ok()
    }

    fn decode_len(header: c_int) -> i64 {
        i64::from(header)
    }
}
