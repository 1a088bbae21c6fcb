// Copyright 2026 the Smath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer powers and square roots.

use crate::num::{Arithmetic, Float, Integral};
use crate::DomainError;

/// Defines `pow` and `checked_pow` for one integer type.
macro_rules! int_pow_fns {
    ($t:ident) => {
        /// Raises `base` to the power of `exponent` by repeated squaring.
        ///
        /// # Panics
        ///
        /// Panics if the result overflows, in every build profile. In a const
        /// context this is a compile error.
        #[inline]
        #[track_caller]
        pub const fn pow(base: $t, exponent: u32) -> $t {
            match checked_pow(base, exponent) {
                Some(power) => power,
                None => $crate::DomainError::Overflow.raise(),
            }
        }

        /// Raises `base` to the power of `exponent`, or `None` on overflow.
        #[inline]
        pub const fn checked_pow(base: $t, exponent: u32) -> Option<$t> {
            checked_pow_wide(base, exponent as u128)
        }

        pub(crate) const fn checked_pow_wide(mut base: $t, mut exponent: u128) -> Option<$t> {
            if exponent == 0 {
                return Some(1);
            }
            let mut acc: $t = 1;
            loop {
                if exponent & 1 == 1 {
                    acc = match acc.checked_mul(base) {
                        Some(acc) => acc,
                        None => return None,
                    };
                    if exponent == 1 {
                        return Some(acc);
                    }
                }
                exponent >>= 1;
                base = match base.checked_mul(base) {
                    Some(square) => square,
                    None => return None,
                };
            }
        }
    };
}

/// Defines `pow` for one float type.
macro_rules! float_pow_fns {
    ($t:ident) => {
        /// Raises `value` to the power of `exponent` by repeated squaring.
        ///
        /// A negative exponent yields the reciprocal of the positive power,
        /// so `pow(0.0, -1)` is infinite. `pow(x, 0)` is `1.0` for every `x`,
        /// NaN included.
        #[inline]
        pub const fn pow(value: $t, exponent: i32) -> $t {
            let power = pow_wide(value, exponent.unsigned_abs() as u128);
            if exponent < 0 {
                1.0 / power
            } else {
                power
            }
        }

        pub(crate) const fn pow_wide(mut base: $t, mut exponent: u128) -> $t {
            let mut acc: $t = 1.0;
            while exponent > 0 {
                if exponent & 1 == 1 {
                    acc *= base;
                }
                exponent >>= 1;
                base *= base;
            }
            acc
        }
    };
}

/// Defines `sqrt` and `try_sqrt` for one float type.
///
/// The invoking module must provide the IEEE 754 layout of the type as
/// `Bits`, `MANTISSA_BITS` and `EXPONENT_BIAS`, and the subnormal scaling
/// pair `SUBNORMAL_SCALE` and `SUBNORMAL_UNSCALE`.
macro_rules! float_root_fns {
    ($t:ident) => {
        /// Square root, computed with the Babylonian method.
        ///
        /// Returns NaN for negative values; [`try_sqrt`] reports them as an
        /// error instead. `sqrt(-0.0)` is `-0.0`.
        #[inline]
        pub const fn sqrt(x: $t) -> $t {
            match try_sqrt(x) {
                Ok(root) => root,
                Err(_) => $t::NAN,
            }
        }

        /// Square root, or [`DomainError::NegativeRoot`] for negative values.
        ///
        /// Zeros, infinity and NaN are returned unchanged.
        ///
        /// # Errors
        ///
        /// [`DomainError::NegativeRoot`] if `x` is below zero.
        ///
        /// [`DomainError::NegativeRoot`]: crate::DomainError::NegativeRoot
        pub const fn try_sqrt(x: $t) -> Result<$t, $crate::DomainError> {
            if x < 0.0 {
                return Err($crate::DomainError::NegativeRoot);
            }
            if x == 0.0 || x.is_nan() || x == $t::INFINITY {
                return Ok(x);
            }
            if x < $t::MIN_POSITIVE {
                return Ok(babylonian(x * SUBNORMAL_SCALE) * SUBNORMAL_UNSCALE);
            }
            Ok(babylonian(x))
        }

        /// Newton's iteration on `t² - x` for a positive, normal `x`.
        const fn babylonian(x: $t) -> $t {
            const MAX_STEPS: u32 = 64;
            // Halving the biased exponent lands within a few percent of the root.
            let seed = $t::from_bits((x.to_bits() >> 1) + (EXPONENT_BIAS << (MANTISSA_BITS - 1)));
            // From the first step on, iterates approach the root from above.
            let mut root = 0.5 * (seed + x / seed);
            let mut next = 0.5 * (root + x / root);
            let mut steps = 1;
            while next < root && steps < MAX_STEPS {
                root = next;
                next = 0.5 * (root + x / root);
                steps += 1;
            }
            root
        }
    };
}

pub(crate) use {float_pow_fns, float_root_fns, int_pow_fns};

/// Raises `value` to an integral `exponent` of any integer type.
///
/// Float bases accept negative exponents and produce the reciprocal.
///
/// ```
/// assert_eq!(smath::pow(2_u64, 10_u8), 1024);
/// assert_eq!(smath::pow(2.0_f64, -2_i64), 0.25);
/// ```
///
/// # Panics
///
/// Panics for an integral base with a negative exponent, and when an integral
/// result overflows. [`try_pow`] reports both as a [`DomainError`].
#[inline]
#[track_caller]
pub fn pow<T: Arithmetic, E: Integral>(value: T, exponent: E) -> T {
    match try_pow(value, exponent) {
        Ok(power) => power,
        Err(err) => err.raise(),
    }
}

/// Raises `value` to an integral `exponent`, reporting domain errors.
///
/// # Errors
///
/// [`DomainError::NegativeExponent`] for an integral base with a negative
/// exponent, and [`DomainError::Overflow`] when an integral result does not
/// fit in `T`. Float bases never fail.
///
/// ```
/// use smath::DomainError;
///
/// assert_eq!(smath::try_pow(3_i32, 4_u32), Ok(81));
/// assert_eq!(smath::try_pow(3_i32, -1_i32), Err(DomainError::NegativeExponent));
/// assert_eq!(smath::try_pow(3_u8, 6_i32), Err(DomainError::Overflow));
/// ```
#[inline]
pub fn try_pow<T: Arithmetic, E: Integral>(value: T, exponent: E) -> Result<T, DomainError> {
    let (negative, magnitude) = exponent.exponent_parts();
    value.try_pow_parts(negative, magnitude)
}

/// Square root of a float, NaN for negative values.
///
/// ```
/// assert_eq!(smath::sqrt(9.0_f32), 3.0);
/// assert!(smath::sqrt(-1.0_f64).is_nan());
/// ```
#[inline]
pub fn sqrt<F: Float>(x: F) -> F {
    x.sqrt()
}

/// Square root of a float, reporting negative values.
///
/// # Errors
///
/// [`DomainError::NegativeRoot`] if `x` is below zero.
#[inline]
pub fn try_sqrt<F: Float>(x: F) -> Result<F, DomainError> {
    x.try_sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_powers() {
        assert_eq!(pow(2_i32, 10_u32), 1024);
        assert_eq!(pow(-3_i64, 3_u8), -27);
        assert_eq!(pow(0_u8, 0_u8), 1);
        assert_eq!(pow(1_u128, u128::MAX), 1);
        assert_eq!(pow(-1_i8, i64::MAX), -1);
        assert_eq!(pow(i64::MIN, 1_u8), i64::MIN);
    }

    #[test]
    fn zero_and_unit_exponents() {
        arbtest::arbtest(|u| {
            let x: i32 = u.arbitrary()?;
            assert_eq!(pow(x, 0_u16), 1);
            assert_eq!(pow(x, 1_i64), x);

            let f: f64 = u.arbitrary()?;
            assert_eq!(pow(f, 0_i8), 1.0);
            if !f.is_nan() {
                assert_eq!(pow(f, 1_usize), f);
            }
            Ok(())
        })
        .budget_ms(500);
    }

    #[test]
    fn float_negative_exponent_is_reciprocal() {
        assert_eq!(pow(2.0_f64, -10_i32), 1.0 / 1024.0);
        assert_eq!(pow(0.5_f32, -3_i16), 8.0);
        assert_eq!(pow(0.0_f64, -1_i32), f64::INFINITY);
        assert_eq!(pow(2.0_f64, i128::MIN), 0.0);
    }

    #[test]
    fn domain_errors() {
        assert_eq!(try_pow(2_u32, -1_i8), Err(DomainError::NegativeExponent));
        assert_eq!(try_pow(2_u32, 32_u8), Err(DomainError::Overflow));
        assert_eq!(try_pow(2_u32, 31_u8), Ok(1 << 31));
        assert_eq!(try_pow(-2_i8, 7_u8), Ok(-128));
        assert_eq!(try_pow(-2_i8, 8_u8), Err(DomainError::Overflow));
        assert_eq!(try_sqrt(-4.0_f64), Err(DomainError::NegativeRoot));
        assert_eq!(try_sqrt(16.0_f32), Ok(4.0));
    }

    #[test]
    #[should_panic(expected = "negative exponent for an integral base")]
    fn pow_panics_on_negative_integral_exponent() {
        let _ = pow(10_i32, -2_i32);
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow")]
    fn pow_panics_on_overflow() {
        let _ = pow(10_u16, 5_u32);
    }

    #[test]
    fn checked_pow_agrees_with_std() {
        arbtest::arbtest(|u| {
            let base: i16 = u.arbitrary()?;
            let exponent: u32 = u.int_in_range(0..=20)?;
            assert_eq!(crate::i16::checked_pow(base, exponent), base.checked_pow(exponent));
            let base: u64 = u.arbitrary()?;
            assert_eq!(crate::u64::checked_pow(base, exponent), base.checked_pow(exponent));
            Ok(())
        })
        .budget_ms(500);
    }

    #[test]
    fn generic_sqrt_matches_per_type() {
        for x in [0.0_f64, 1e-310, 0.25, 2.0, 1e300, f64::INFINITY] {
            assert_eq!(sqrt(x).to_bits(), crate::f64::sqrt(x).to_bits());
        }
        assert!(sqrt(-0.5_f32).is_nan());
    }
}
