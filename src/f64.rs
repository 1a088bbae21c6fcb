// Copyright 2026 the Smath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constant functions for the `f64` double-precision float type.
//!
//! Every function here is a `const fn`:
//!
//! ```
//! use smath::f64::{floor, pow, round, sqrt};
//!
//! const DIAGONAL: f64 = sqrt(2.0);
//! const CELLS: usize = round(pow(DIAGONAL, 8) * 2.5) as usize;
//!
//! let grid = [0_u8; CELLS];
//! assert_eq!(grid.len(), 40);
//! assert_eq!(floor(-2.5), -3);
//! ```

type Bits = u64;

const MANTISSA_BITS: Bits = 52;
const EXPONENT_MASK: Bits = 0x7ff;
const EXPONENT_BIAS: Bits = EXPONENT_MASK >> 1;
const SIGN_MASK: Bits = 1 << (Bits::BITS - 1);

/// 2⁵⁴, large enough to lift any subnormal into the normal range.
const SUBNORMAL_SCALE: f64 = f64::from_bits((EXPONENT_BIAS + 54) << MANTISSA_BITS);
/// 2⁻²⁷, the square root of the reciprocal of [`SUBNORMAL_SCALE`].
const SUBNORMAL_UNSCALE: f64 = f64::from_bits((EXPONENT_BIAS - 27) << MANTISSA_BITS);

crate::cmp::cmp_fns!(float f64);
crate::rounding::rounding_fns!(f64 => i64);
crate::power::float_pow_fns!(f64);
crate::power::float_root_fns!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn ulp(x: f64) -> f64 {
        f64::from_bits(x.to_bits() + 1) - x
    }

    #[test]
    fn layout() {
        assert_eq!(MANTISSA_BITS, Bits::from(f64::MANTISSA_DIGITS - 1));
        assert_eq!(EXPONENT_BIAS, 1023);
        assert_eq!(f64::from_bits(EXPONENT_BIAS << MANTISSA_BITS), 1.0);
        assert_eq!(SUBNORMAL_SCALE, 18014398509481984.0);
        assert_eq!(SUBNORMAL_UNSCALE * 134217728.0, 1.0);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round(2.5), 3);
        assert_eq!(round(-2.5), -3);
        assert_eq!(round(0.5), 1);
        assert_eq!(round(-0.5), -1);
        assert_eq!(round(1.4999999999999998), 1);
        assert_eq!(round(0.49999999999999994), 0);
        assert_eq!(round(4503599627370495.5), 4503599627370496);
    }

    #[test]
    fn rounding_special_values() {
        assert_eq!(floor(-0.0), 0);
        assert_eq!(floor(-1e-300), -1);
        assert_eq!(ceil(1e-300), 1);
        assert_eq!(trunc(-0.999), 0);
        assert_eq!(floor(f64::NAN), 0);
        assert_eq!(ceil(f64::INFINITY), i64::MAX);
        assert_eq!(floor(f64::NEG_INFINITY), i64::MIN);
        assert_eq!(round(1e300), i64::MAX);
        assert_eq!(trunc(9007199254740993.0), 9007199254740992);
    }

    #[test]
    fn rounding_matches_libm() {
        arbtest::arbtest(|u| {
            let x: f64 = u.arbitrary()?;
            if !(x.abs() < 9e18) {
                return Err(arbitrary::Error::IncorrectFormat);
            }
            assert_eq!(floor(x), libm::floor(x) as i64, "floor({x})");
            assert_eq!(ceil(x), libm::ceil(x) as i64, "ceil({x})");
            assert_eq!(round(x), libm::round(x) as i64, "round({x})");
            assert_eq!(trunc(x), libm::trunc(x) as i64, "trunc({x})");
            Ok(())
        })
        .budget_ms(1_000);
    }

    #[test]
    fn halves_match_libm() {
        arbtest::arbtest(|u| {
            let whole: i32 = u.arbitrary()?;
            let x = f64::from(whole) + 0.5;
            assert_eq!(round(x), libm::round(x) as i64, "round({x})");
            assert_eq!(round(-x), libm::round(-x) as i64, "round({})", -x);
            Ok(())
        })
        .budget_ms(500);
    }

    #[test]
    fn sqrt_exact_squares() {
        assert_eq!(sqrt(4.0), 2.0);
        assert!((sqrt(4.0) - 2.0).abs() <= ulp(2.0));
        assert_eq!(sqrt(0.0), 0.0);
        assert!(sqrt(-0.0).is_sign_negative());
        assert_eq!(sqrt(1.0), 1.0);
        assert_eq!(sqrt(0.0625), 0.25);
        assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn sqrt_of_two() {
        let root = sqrt(2.0);
        assert!((root * root - 2.0).abs() <= 4.0 * f64::EPSILON);
        assert!((root - core::f64::consts::SQRT_2).abs() <= 2.0 * ulp(core::f64::consts::SQRT_2));
    }

    #[test]
    fn sqrt_domain() {
        assert!(sqrt(-1.0).is_nan());
        assert!(sqrt(f64::NEG_INFINITY).is_nan());
        assert!(sqrt(f64::NAN).is_nan());
        assert_eq!(try_sqrt(-1.0), Err(crate::DomainError::NegativeRoot));
        assert_eq!(try_sqrt(9.0), Ok(3.0));
        assert!(try_sqrt(f64::NAN).is_ok_and(f64::is_nan));
    }

    #[test]
    fn sqrt_subnormals() {
        let tiny = f64::from_bits(1);
        let root = sqrt(tiny);
        assert_eq!(root, libm::sqrt(tiny));
        assert!((sqrt(1e-310) - libm::sqrt(1e-310)).abs() <= 2.0 * ulp(libm::sqrt(1e-310)));
    }

    #[test]
    fn sqrt_matches_libm() {
        arbtest::arbtest(|u| {
            let x: f64 = u.arbitrary()?;
            if !(x.is_finite() && x > 0.0) {
                return Err(arbitrary::Error::IncorrectFormat);
            }
            let root = sqrt(x);
            let expected = libm::sqrt(x);
            assert!(
                (root - expected).abs() <= 2.0 * ulp(expected),
                "sqrt({x}) = {root}, expected {expected}"
            );
            Ok(())
        })
        .budget_ms(1_000);
    }

    #[test]
    fn pow_by_squaring() {
        assert_eq!(pow(2.0, 10), 1024.0);
        assert_eq!(pow(-1.5, 3), -3.375);
        assert_eq!(pow(10.0, -2), 0.01);
        assert_eq!(pow(f64::NAN, 0), 1.0);
        assert_eq!(pow(2.0, 1024), f64::INFINITY);
        assert_eq!(pow(2.0, i32::MIN), 0.0);
    }

    #[test]
    fn usable_in_const_context() {
        const ROOT: f64 = sqrt(2.0);
        const CHECKED: f64 = match try_sqrt(6.25) {
            Ok(root) => root,
            Err(err) => err.raise(),
        };
        const _: () = assert!(round(2.5) == 3 && round(-2.5) == -3);
        const _: () = assert!(floor(-0.5) == -1 && ceil(-0.5) == 0 && trunc(-1.5) == -1);
        const _: () = assert!(abs(-3.0) == 3.0 && min(1.0, 2.0) == 1.0 && max(1.0, 2.0) == 2.0);
        let table = [0_u16; ceil(pow(1.5, 4)) as usize];
        assert_eq!(table.len(), 6);
        assert_eq!(ROOT, sqrt(2.0));
        assert_eq!(CHECKED, 2.5);
    }
}
