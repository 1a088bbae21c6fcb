// Copyright 2026 the Smath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounding of floating-point values to integers.

use crate::num::Float;

/// Defines `floor`, `ceil`, `round` and `trunc` for one float type.
///
/// The invoking module must provide the IEEE 754 layout of the type as
/// `Bits`, `MANTISSA_BITS`, `EXPONENT_MASK`, `EXPONENT_BIAS` and `SIGN_MASK`.
macro_rules! rounding_fns {
    ($t:ident => $int:ident) => {
        /// Greatest integer less than or equal to `value`.
        ///
        /// Values outside the range of the integer type saturate to its
        /// bounds, and NaN maps to zero.
        #[inline]
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the conversion saturates by definition"
        )]
        pub const fn floor(value: $t) -> $int {
            floor_float(value) as $int
        }

        /// Smallest integer greater than or equal to `value`.
        ///
        /// Values outside the range of the integer type saturate to its
        /// bounds, and NaN maps to zero.
        #[inline]
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the conversion saturates by definition"
        )]
        pub const fn ceil(value: $t) -> $int {
            ceil_float(value) as $int
        }

        /// Nearest integer to `value`, rounding half-way cases away from zero.
        ///
        /// Values outside the range of the integer type saturate to its
        /// bounds, and NaN maps to zero.
        #[inline]
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the conversion saturates by definition"
        )]
        pub const fn round(value: $t) -> $int {
            round_float(value) as $int
        }

        /// Integer part of `value`, rounding toward zero.
        ///
        /// Values outside the range of the integer type saturate to its
        /// bounds, and NaN maps to zero.
        #[inline]
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the conversion saturates by definition"
        )]
        pub const fn trunc(value: $t) -> $int {
            trunc_float(value) as $int
        }

        /// Clears the fraction bits of `value`.
        const fn trunc_float(value: $t) -> $t {
            let bits = value.to_bits();
            let exponent = (bits >> MANTISSA_BITS) & EXPONENT_MASK;
            if exponent >= EXPONENT_BIAS + MANTISSA_BITS {
                // Already integral, or infinite, or NaN.
                value
            } else if exponent < EXPONENT_BIAS {
                $t::from_bits(bits & SIGN_MASK)
            } else {
                let fraction: Bits = (1 << (EXPONENT_BIAS + MANTISSA_BITS - exponent)) - 1;
                $t::from_bits(bits & !fraction)
            }
        }

        const fn floor_float(value: $t) -> $t {
            let whole = trunc_float(value);
            if value < whole {
                whole - 1.0
            } else {
                whole
            }
        }

        const fn ceil_float(value: $t) -> $t {
            let whole = trunc_float(value);
            if value > whole {
                whole + 1.0
            } else {
                whole
            }
        }

        const fn round_float(value: $t) -> $t {
            let whole = trunc_float(value);
            // Exact: `whole` shares the exponent of `value`, or is zero.
            let fraction = value - whole;
            if fraction >= 0.5 {
                whole + 1.0
            } else if fraction <= -0.5 {
                whole - 1.0
            } else {
                whole
            }
        }
    };
}

pub(crate) use rounding_fns;

/// Greatest integer less than or equal to `value`.
///
/// ```
/// assert_eq!(smath::floor(-1.5_f64), -2_i64);
/// assert_eq!(smath::floor(1.5_f32), 1_i32);
/// ```
#[inline]
pub fn floor<F: Float>(value: F) -> F::Int {
    value.floor()
}

/// Smallest integer greater than or equal to `value`.
///
/// ```
/// assert_eq!(smath::ceil(-1.5_f64), -1);
/// assert_eq!(smath::ceil(1.25_f32), 2);
/// ```
#[inline]
pub fn ceil<F: Float>(value: F) -> F::Int {
    value.ceil()
}

/// Nearest integer to `value`; half-way cases round away from zero.
///
/// ```
/// assert_eq!(smath::round(2.5_f64), 3);
/// assert_eq!(smath::round(-2.5_f64), -3);
/// assert_eq!(smath::round(2.4999_f32), 2);
/// ```
#[inline]
pub fn round<F: Float>(value: F) -> F::Int {
    value.round()
}

/// Integer part of `value`.
///
/// ```
/// assert_eq!(smath::trunc(-7.9_f64), -7);
/// ```
#[inline]
pub fn trunc<F: Float>(value: F) -> F::Int {
    value.trunc()
}
