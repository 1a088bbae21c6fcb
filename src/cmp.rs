// Copyright 2026 the Smath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute value and selection of the smaller or larger value.

use crate::num::{Arithmetic, Common, CommonType};

/// Defines `abs`, `min` and `max` as const functions for one primitive type.
///
/// The `float` form expects a `SIGN_MASK` constant in the invoking module.
macro_rules! cmp_fns {
    (signed $t:ident) => {
        /// Absolute value.
        ///
        /// # Panics
        ///
        /// The absolute value of `MIN` is not representable. Negating it
        /// fails const evaluation, and panics at run time when overflow
        /// checks are enabled.
        #[inline]
        pub const fn abs(x: $t) -> $t {
            if x < 0 {
                -x
            } else {
                x
            }
        }

        $crate::cmp::cmp_fns!(@select $t);
    };
    (unsigned $t:ident) => {
        /// Absolute value, which for an unsigned type is the value itself.
        #[inline]
        pub const fn abs(x: $t) -> $t {
            x
        }

        $crate::cmp::cmp_fns!(@select $t);
    };
    (float $t:ident) => {
        /// Absolute value.
        ///
        /// Clears the sign bit, so `abs(-0.0)` is `+0.0` and the sign of a
        /// NaN is dropped as well.
        #[inline]
        pub const fn abs(x: $t) -> $t {
            $t::from_bits(x.to_bits() & !SIGN_MASK)
        }

        /// The smaller of two values.
        ///
        /// Returns `first` when the two compare equal. A NaN loses against
        /// any number; only two NaNs produce a NaN.
        #[inline]
        pub const fn min(first: $t, second: $t) -> $t {
            if first.is_nan() || second < first {
                second
            } else {
                first
            }
        }

        /// The larger of two values.
        ///
        /// Returns `first` when the two compare equal. A NaN loses against
        /// any number; only two NaNs produce a NaN.
        #[inline]
        pub const fn max(first: $t, second: $t) -> $t {
            if first.is_nan() || second > first {
                second
            } else {
                first
            }
        }
    };
    (@select $t:ident) => {
        /// The smaller of two values, `first` when they are equal.
        #[inline]
        pub const fn min(first: $t, second: $t) -> $t {
            if second < first {
                second
            } else {
                first
            }
        }

        /// The larger of two values, `first` when they are equal.
        #[inline]
        pub const fn max(first: $t, second: $t) -> $t {
            if second > first {
                second
            } else {
                first
            }
        }
    };
}

pub(crate) use cmp_fns;

/// Absolute value of any arithmetic value.
///
/// ```
/// assert_eq!(smath::abs(-3_i8), 3);
/// assert_eq!(smath::abs(-0.25_f32), 0.25);
/// ```
#[inline]
pub fn abs<T: Arithmetic>(x: T) -> T {
    x.abs()
}

/// The smaller of two values, compared in their [common type](CommonType).
///
/// For more than two values, see [`min!`](crate::min!).
///
/// ```
/// let m: f64 = smath::min(3_i32, 2.5_f64);
/// assert_eq!(m, 2.5);
/// ```
#[inline]
pub fn min<T, U>(first: T, second: U) -> Common<T, U>
where
    T: CommonType<U>,
{
    let first = <Common<T, U> as From<T>>::from(first);
    let second = <Common<T, U> as From<U>>::from(second);
    first.select_min(second)
}

/// The larger of two values, compared in their [common type](CommonType).
///
/// For more than two values, see [`max!`](crate::max!).
///
/// ```
/// let m: u32 = smath::max(7_u8, 300_u32);
/// assert_eq!(m, 300);
/// ```
#[inline]
pub fn max<T, U>(first: T, second: U) -> Common<T, U>
where
    T: CommonType<U>,
{
    let first = <Common<T, U> as From<T>>::from(first);
    let second = <Common<T, U> as From<U>>::from(second);
    first.select_max(second)
}

/// The smallest of two or more values, reduced left to right.
///
/// `min!(a, b, c)` is `min(min(a, b), c)`, promoting through
/// [`CommonType`](crate::num::CommonType) at each step.
///
/// Prefixing the values with a primitive type name and a semicolon reduces
/// with that type's const function instead, which makes the macro usable in
/// const contexts:
///
/// ```
/// const SMALLEST: i64 = smath::min!(i64; 9, -3, 4, -3);
/// assert_eq!(SMALLEST, -3);
///
/// let mixed: f64 = smath::min!(4_u8, -2_i16, 0.5_f64);
/// assert_eq!(mixed, -2.0);
/// ```
#[macro_export]
macro_rules! min {
    (@fold $select:path; $acc:expr) => {
        $acc
    };
    (@fold $select:path; $acc:expr, $next:expr $(, $rest:expr)*) => {
        $crate::min!(@fold $select; $select($acc, $next) $(, $rest)*)
    };
    ($t:ident; $first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::min!(@fold $crate::$t::min; $first, $second $(, $rest)*)
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::min!(@fold $crate::min; $first, $second $(, $rest)*)
    };
}

/// The largest of two or more values, reduced left to right.
///
/// `max!(a, b, c)` is `max(max(a, b), c)`, promoting through
/// [`CommonType`](crate::num::CommonType) at each step.
///
/// As with [`min!`](crate::min!), a leading type name and semicolon selects
/// the const form:
///
/// ```
/// const BUFFER: [u8; smath::max!(usize; 16, 64, 32)] = [0; 64];
/// assert_eq!(BUFFER.len(), 64);
///
/// let widest: i32 = smath::max!(3_i8, 200_i16, -7_i32);
/// assert_eq!(widest, 200);
/// ```
#[macro_export]
macro_rules! max {
    (@fold $select:path; $acc:expr) => {
        $acc
    };
    (@fold $select:path; $acc:expr, $next:expr $(, $rest:expr)*) => {
        $crate::max!(@fold $select; $select($acc, $next) $(, $rest)*)
    };
    ($t:ident; $first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::max!(@fold $crate::$t::max; $first, $second $(, $rest)*)
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::max!(@fold $crate::max; $first, $second $(, $rest)*)
    };
}
