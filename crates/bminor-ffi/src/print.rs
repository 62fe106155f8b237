//! Print FFI over the process-wide stdout printer.
//!
//! Every call writes and flushes before returning.

use std::ffi::c_char;

use bminor_io::stdio::with_stdout;

use crate::string::c_bytes;

/// Print a 64-bit integer in decimal.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn print_integer(value: i64) {
    ffi_guard!({ with_stdout(|p| p.print_integer(value)) })
}

/// Print a double; integral values print without decimals.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn print_float(value: f64) {
    ffi_guard!({ with_stdout(|p| p.print_float(value)) })
}

/// Print `true` or `false`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn print_boolean(value: bool) {
    ffi_guard!({ with_stdout(|p| p.print_boolean(value)) })
}

/// Print one raw byte.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn print_char(value: c_char) {
    ffi_guard!({ with_stdout(|p| p.print_char(value as u8)) })
}

/// Print a NUL-terminated string, or `(null)` for a null pointer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn print_string(s: *const c_char) {
    ffi_guard!({
        // SAFETY: caller passes null or a NUL-terminated string.
        let text = unsafe { c_bytes(s) };
        with_stdout(|p| p.print_string(text))
    })
}

/// Print a line terminator.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn print_newline() {
    ffi_guard!({ with_stdout(|p| p.print_newline()) })
}
