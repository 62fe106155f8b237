//! Benchmark workloads for the B-minor runtime.
//!
//! Provides deterministic input scripts for the scanner benchmarks:
//!
//! - [`integer_script`]: whitespace-separated integers, several per line
//! - [`float_script`]: floats as `print_float` renders them
//! - [`mixed_script`]: numbers interleaved with malformed tokens

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bminor_io::format_float;

/// Values per line in generated scripts.
const PER_LINE: usize = 8;

/// Linear congruential step (Knuth MMIX constants). Enough spread for
/// benchmark inputs without pulling in an RNG.
fn next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

fn join_lines(tokens: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for (i, token) in tokens.enumerate() {
        if i > 0 {
            out.push(if i % PER_LINE == 0 { '\n' } else { ' ' });
        }
        out.push_str(&token);
    }
    out.push('\n');
    out
}

/// `count` signed integers spanning the full `i64` range.
pub fn integer_script(count: usize, seed: u64) -> String {
    let mut state = seed;
    join_lines((0..count).map(|_| (next(&mut state) as i64).to_string()))
}

/// `count` finite floats, half integral and half fractional.
pub fn float_script(count: usize, seed: u64) -> String {
    let mut state = seed;
    join_lines((0..count).map(|i| {
        let bits = next(&mut state);
        let whole = (bits >> 40) as f64 - (1u64 << 23) as f64;
        let value = if i % 2 == 0 {
            whole
        } else {
            whole + (bits & 0xffff) as f64 / 65536.0
        };
        format_float(value)
    }))
}

/// `count` tokens where every fourth one is not a number.
pub fn mixed_script(count: usize, seed: u64) -> String {
    let mut state = seed;
    join_lines((0..count).map(|i| {
        let v = next(&mut state) as i64 % 100_000;
        if i % 4 == 3 {
            format!("x{v}")
        } else {
            v.to_string()
        }
    }))
}
