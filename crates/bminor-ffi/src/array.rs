//! Array FFI: create, length, free for each element kind.
//!
//! Generated code gets a pointer to element 0 and indexes it directly. The
//! count lives in a header in front of that pointer; see `bminor-array` for
//! the layout.

use bminor_array::{ArrayConfig, TaggedBuffer};
use bminor_core::{AllocError, Element};

/// Allocate a buffer under `config` and hand ownership to the caller.
pub(crate) fn try_create<T: Element>(count: i64, config: &ArrayConfig) -> Result<*mut T, AllocError> {
    TaggedBuffer::<T>::with_config(count, config).map(TaggedBuffer::into_raw)
}

/// Report an allocation failure and terminate. Generated code has no way to
/// handle a missing array.
fn fatal(e: &AllocError) -> ! {
    eprintln!("bminor-rt: fatal: {e}");
    std::process::exit(1)
}

fn create<T: Element>(count: i64) -> *mut T {
    match try_create::<T>(count, &ArrayConfig::default()) {
        Ok(ptr) => ptr,
        Err(e) => fatal(&e),
    }
}

#[allow(unsafe_code)]
fn length<T: Element>(ptr: *const T) -> i64 {
    // SAFETY: caller guarantees a non-null ptr came from create::<T>() and
    // has not been freed.
    unsafe { TaggedBuffer::<T>::length_of(ptr) }
}

#[allow(unsafe_code)]
fn free<T: Element>(ptr: *mut T) {
    // SAFETY: caller guarantees a non-null ptr came from create::<T>() and
    // is freed at most once.
    drop(unsafe { TaggedBuffer::<T>::from_raw(ptr) });
}

// ── integer ────────────────────────────────────────────────────

/// Create a zeroed array of `count` 64-bit integers.
///
/// Negative counts yield an empty array. Exits the process with status 1 if
/// the allocation fails.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn array_create_integer(count: i64) -> *mut i64 {
    ffi_guard_or!(std::ptr::null_mut(), { create::<i64>(count) })
}

/// Element count of an integer array, or 0 for null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn array_length_integer(ptr: *const i64) -> i64 {
    ffi_guard_or!(0, { length(ptr) })
}

/// Release an integer array. Null is a no-op.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn array_free_integer(ptr: *mut i64) {
    ffi_guard!({ free(ptr) })
}

// ── float ──────────────────────────────────────────────────────

/// Create a zeroed array of `count` doubles.
///
/// Negative counts yield an empty array. Exits the process with status 1 if
/// the allocation fails.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn array_create_float(count: i64) -> *mut f64 {
    ffi_guard_or!(std::ptr::null_mut(), { create::<f64>(count) })
}

/// Element count of a float array, or 0 for null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn array_length_float(ptr: *const f64) -> i64 {
    ffi_guard_or!(0, { length(ptr) })
}

/// Release a float array. Null is a no-op.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn array_free_float(ptr: *mut f64) {
    ffi_guard!({ free(ptr) })
}

// ── boolean ────────────────────────────────────────────────────

/// Create an array of `count` booleans, all `false`.
///
/// Negative counts yield an empty array. Exits the process with status 1 if
/// the allocation fails.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn array_create_boolean(count: i64) -> *mut bool {
    ffi_guard_or!(std::ptr::null_mut(), { create::<bool>(count) })
}

/// Element count of a boolean array, or 0 for null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn array_length_boolean(ptr: *const bool) -> i64 {
    ffi_guard_or!(0, { length(ptr) })
}

/// Release a boolean array. Null is a no-op.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn array_free_boolean(ptr: *mut bool) {
    ffi_guard!({ free(ptr) })
}
