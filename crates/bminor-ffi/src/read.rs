//! Read FFI over the process-wide stdin scanner.
//!
//! Reads block until input is available. None of them fails: bad numeric
//! input yields zero and end of input yields zero or an empty string.

use std::ffi::c_char;
use std::io::BufRead;

use bminor_io::stdio::with_stdin;
use bminor_io::Scanner;

/// Read one integer from stdin; 0 on malformed input or end of input.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn read_integer() -> i64 {
    ffi_guard_or!(0, { with_stdin(|s| s.read_integer()) })
}

/// Read one double from stdin; 0.0 on malformed input or end of input.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn read_float() -> f64 {
    ffi_guard_or!(0.0, { with_stdin(|s| s.read_float()) })
}

/// Read one line from stdin into `buf`, which holds `cap` bytes.
///
/// Stores at most `cap - 1` bytes and a NUL; the line terminator is
/// dropped. At end of input `buf` becomes the empty string. A null `buf`
/// or `cap <= 0` reads nothing.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn read_string(buf: *mut c_char, cap: i64) {
    ffi_guard!({
        let Ok(cap) = usize::try_from(cap) else {
            return;
        };
        if buf.is_null() || cap == 0 {
            return;
        }
        // SAFETY: caller guarantees buf points to cap writable bytes.
        let dest = unsafe { std::slice::from_raw_parts_mut(buf.cast::<u8>(), cap) };
        with_stdin(|s| read_line_into(s, dest));
    })
}

/// Read a line into `dest` as a NUL-terminated string. Returns the number
/// of bytes stored before the NUL.
pub(crate) fn read_line_into<R: BufRead>(scanner: &mut Scanner<R>, dest: &mut [u8]) -> usize {
    let Some(max) = dest.len().checked_sub(1) else {
        return 0;
    };
    let line = scanner.read_line(max);
    let n = line.len().min(max);
    dest[..n].copy_from_slice(&line[..n]);
    dest[n] = 0;
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use bminor_test_utils::scripted_input;

    #[test]
    fn line_is_copied_and_terminated() {
        let mut s = Scanner::new(scripted_input("alice\nbob\n"));
        let mut dest = [0xffu8; 16];
        assert_eq!(read_line_into(&mut s, &mut dest), 5);
        assert_eq!(&dest[..6], b"alice\0");
        assert_eq!(read_line_into(&mut s, &mut dest), 3);
        assert_eq!(&dest[..4], b"bob\0");
    }

    #[test]
    fn long_line_is_split_across_reads() {
        let mut s = Scanner::new(scripted_input("abcdefg\n"));
        let mut dest = [0u8; 4];
        assert_eq!(read_line_into(&mut s, &mut dest), 3);
        assert_eq!(&dest, b"abc\0");
        assert_eq!(read_line_into(&mut s, &mut dest), 3);
        assert_eq!(&dest, b"def\0");
        assert_eq!(read_line_into(&mut s, &mut dest), 1);
        assert_eq!(&dest[..2], b"g\0");
    }

    #[test]
    fn end_of_input_empties_buffer() {
        let mut s = Scanner::new(scripted_input(""));
        let mut dest = [b'x'; 8];
        assert_eq!(read_line_into(&mut s, &mut dest), 0);
        assert_eq!(dest[0], 0);
    }

    #[test]
    fn one_byte_buffer_only_holds_nul() {
        let mut s = Scanner::new(scripted_input("data\n"));
        let mut dest = [b'x'; 1];
        assert_eq!(read_line_into(&mut s, &mut dest), 0);
        assert_eq!(dest, [0]);
        // Nothing was consumed.
        let mut rest = [0u8; 8];
        read_line_into(&mut s, &mut rest);
        assert_eq!(&rest[..5], b"data\0");
    }

    #[test]
    fn empty_buffer_is_untouched() {
        let mut s = Scanner::new(scripted_input("data\n"));
        assert_eq!(read_line_into(&mut s, &mut []), 0);
    }

    #[test]
    fn null_buffer_and_bad_capacity_are_noops() {
        read_string(std::ptr::null_mut(), 16);
        let mut dest = [b'x'; 4];
        read_string(dest.as_mut_ptr().cast::<c_char>(), 0);
        read_string(dest.as_mut_ptr().cast::<c_char>(), -5);
        assert_eq!(dest, [b'x'; 4]);
    }
}
