//! Float builtins: `sqrt`, `abs`, `max`, `min`.
//!
//! All four are total. `math_sqrt` of a negative value is NaN; `math_max`
//! and `math_min` return the other operand when one is NaN.

/// Square root.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn math_sqrt(x: f64) -> f64 {
    x.sqrt()
}

/// Absolute value.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn math_abs(x: f64) -> f64 {
    x.abs()
}

/// Larger of two values.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn math_max(a: f64, b: f64) -> f64 {
    a.max(b)
}

/// Smaller of two values.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn math_min(a: f64, b: f64) -> f64 {
    a.min(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_of_square_and_negative() {
        assert_eq!(math_sqrt(16.0), 4.0);
        assert!(math_sqrt(-1.0).is_nan());
    }

    #[test]
    fn abs_clears_sign() {
        assert_eq!(math_abs(-2.5), 2.5);
        assert_eq!(math_abs(3.0), 3.0);
        assert!(math_abs(-0.0).is_sign_positive());
    }

    #[test]
    fn max_min_ignore_nan_operand() {
        assert_eq!(math_max(1.0, 2.0), 2.0);
        assert_eq!(math_min(1.0, 2.0), 1.0);
        assert_eq!(math_max(f64::NAN, 3.0), 3.0);
        assert_eq!(math_min(3.0, f64::NAN), 3.0);
        assert!(math_max(f64::NAN, f64::NAN).is_nan());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn max_is_at_least_min(a in -1e12f64..1e12, b in -1e12f64..1e12) {
                prop_assert!(math_max(a, b) >= math_min(a, b));
                prop_assert!(math_max(a, b) == a || math_max(a, b) == b);
            }

            #[test]
            fn sqrt_squares_back(x in 0.0f64..1e12) {
                let r = math_sqrt(x);
                prop_assert!((r * r - x).abs() <= x * 1e-12 + 1e-12);
            }
        }
    }
}
