//! NUL-terminated string helpers.

use std::ffi::{c_char, CStr};

/// Borrow the bytes of a C string, without its NUL. `None` for null.
///
/// # Safety
///
/// A non-null `ptr` must point to a NUL-terminated string that stays valid
/// and unmodified for `'a`.
#[allow(unsafe_code)]
pub(crate) unsafe fn c_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null, and the caller guarantees NUL termination.
    Some(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

/// Byte length of a NUL-terminated string, or 0 for null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn string_length(s: *const c_char) -> i64 {
    ffi_guard_or!(0, {
        // SAFETY: generated code only passes string literals and read_string
        // buffers, both NUL-terminated.
        let len = unsafe { c_bytes(s) }.map_or(0, <[u8]>::len);
        i64::try_from(len).unwrap_or(i64::MAX)
    })
}
