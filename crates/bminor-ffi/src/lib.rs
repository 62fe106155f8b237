//! C ABI of the B-minor runtime.
//!
//! Compiled B-minor programs link against this crate (as a static or shared
//! library) and call its `#[no_mangle]` functions directly. The header
//! `include/bminor_rt.h` is regenerated by `build.rs` on every build.
//!
//! Every entry point is total: a Rust panic never unwinds into generated
//! code. Each body runs under `ffi_guard_or!`, which catches the panic,
//! stores its message for [`bminor_last_panic_message`] and returns the
//! function's neutral value instead. The one deliberate exception is
//! allocation failure, which prints a diagnostic and exits the process.
//!
//! This crate is one of two that may contain `unsafe` code (along with
//! `bminor-array`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::any::Any;
use std::cell::RefCell;
use std::ffi::c_char;

thread_local! {
    /// Message of the most recent panic caught on this thread.
    pub(crate) static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Store a caught panic payload in `LAST_PANIC`.
pub(crate) fn record_panic(payload: Box<dyn Any + Send>) {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_owned()
    };
    LAST_PANIC.with(|cell| *cell.borrow_mut() = message);
}

/// Run a body under `catch_unwind`, yielding `$default` if it panics.
///
/// The body is a closure, so `return` inside it returns from the guard.
macro_rules! ffi_guard_or {
    ($default:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                $crate::record_panic(payload);
                $default
            }
        }
    };
}

/// `ffi_guard_or!` for bodies that return nothing.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!((), $body)
    };
}

pub mod array;
pub mod math;
pub mod print;
pub mod read;
pub mod string;

/// Copy the last caught panic message on this thread into `buf`.
///
/// Writes at most `cap - 1` bytes followed by a NUL. Returns the full
/// message length in bytes, so a caller can pass a null `buf` (or `cap` 0)
/// to size its buffer first. Returns 0 when no panic has been caught.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bminor_last_panic_message(buf: *mut c_char, cap: usize) -> i32 {
    LAST_PANIC.with(|cell| {
        let message = cell.borrow();
        let bytes = message.as_bytes();
        if !buf.is_null() && cap > 0 {
            let n = bytes.len().min(cap - 1);
            // SAFETY: caller guarantees buf points to at least cap writable
            // bytes, and n + 1 <= cap.
            unsafe {
                std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), n);
                *buf.add(n) = 0;
            }
        }
        i32::try_from(bytes.len()).unwrap_or(i32::MAX)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear() {
        LAST_PANIC.with(|cell| cell.borrow_mut().clear());
    }

    #[test]
    fn no_panic_means_empty_message() {
        clear();
        assert_eq!(bminor_last_panic_message(std::ptr::null_mut(), 0), 0);
    }

    #[test]
    fn guard_returns_default_and_stores_message() {
        clear();
        let value: i64 = ffi_guard_or!(-1, {
            panic!("guarded body exploded");
        });
        assert_eq!(value, -1);

        let len = bminor_last_panic_message(std::ptr::null_mut(), 0);
        assert_eq!(len as usize, "guarded body exploded".len());

        let mut buf = vec![0u8; len as usize + 1];
        let len2 = bminor_last_panic_message(buf.as_mut_ptr().cast::<c_char>(), buf.len());
        assert_eq!(len, len2);
        assert_eq!(&buf[..len as usize], b"guarded body exploded");
        assert_eq!(buf[len as usize], 0);
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        clear();
        ffi_guard!({
            let n = 3;
            panic!("bad count {n}");
        });
        let mut buf = [0u8; 32];
        let len = bminor_last_panic_message(buf.as_mut_ptr().cast::<c_char>(), buf.len());
        assert_eq!(&buf[..len as usize], b"bad count 3");
    }

    #[test]
    fn message_is_truncated_to_capacity() {
        clear();
        ffi_guard!({
            panic!("0123456789");
        });
        let mut buf = [0xffu8; 5];
        let len = bminor_last_panic_message(buf.as_mut_ptr().cast::<c_char>(), buf.len());
        assert_eq!(len, 10);
        assert_eq!(&buf, b"0123\0");
    }

    #[test]
    fn guard_passes_through_normal_value() {
        let value = ffi_guard_or!(0.0, { 2.5 });
        assert_eq!(value, 2.5);
    }

    #[test]
    fn early_return_leaves_only_the_guard() {
        let value = ffi_guard_or!(0, {
            if true {
                return 7;
            }
            1
        });
        assert_eq!(value, 7);
    }
}
