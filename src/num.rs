// Copyright 2026 the Smath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric categories accepted by the generic functions.
//!
//! Every generic function in this crate is bounded by one of the sealed
//! category traits below. Passing a value outside the category is rejected
//! when the call is type-checked:
//!
//! ```compile_fail
//! // `i32` is not a `Float`.
//! let _ = smath::sqrt(4_i32);
//! ```
//!
//! ```compile_fail
//! // Exponents must be integral.
//! let _ = smath::pow(2.0_f64, 0.5_f64);
//! ```
//!
//! The const functions in the per-type modules express the same constraint
//! through the module a function lives in; there is no `smath::i32::sqrt`:
//!
//! ```compile_fail
//! const ROOT: i32 = smath::i32::sqrt(4);
//! ```

use crate::DomainError;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer and floating-point types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an arithmetic type",
    label = "expected a primitive integer or floating-point type"
)]
pub trait Arithmetic: Copy + PartialOrd + sealed::Sealed {
    /// Absolute value.
    fn abs(self) -> Self;

    /// The smaller of two values, preferring `self` on ties.
    ///
    /// A NaN loses against any number.
    fn select_min(self, other: Self) -> Self;

    /// The larger of two values, preferring `self` on ties.
    ///
    /// A NaN loses against any number.
    fn select_max(self, other: Self) -> Self;

    #[doc(hidden)]
    fn try_pow_parts(self, negative: bool, magnitude: u128) -> Result<Self, DomainError>;
}

/// Primitive integer types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an integral type",
    label = "expected a primitive integer type"
)]
pub trait Integral: Arithmetic {
    /// Splits the value into its sign and its magnitude.
    #[doc(hidden)]
    fn exponent_parts(self) -> (bool, u128);
}

/// Primitive floating-point types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a floating-point type",
    label = "expected `f32` or `f64`"
)]
pub trait Float: Arithmetic {
    /// The integer type the rounding functions produce.
    type Int: Integral;

    /// Greatest integer less than or equal to `self`.
    fn floor(self) -> Self::Int;
    /// Smallest integer greater than or equal to `self`.
    fn ceil(self) -> Self::Int;
    /// Nearest integer, rounding half-way cases away from zero.
    fn round(self) -> Self::Int;
    /// Integer part of `self`.
    fn trunc(self) -> Self::Int;
    /// Square root, NaN for negative values.
    fn sqrt(self) -> Self;
    /// Square root, reporting negative values.
    ///
    /// # Errors
    ///
    /// [`DomainError::NegativeRoot`] if `self` is below zero.
    fn try_sqrt(self) -> Result<Self, DomainError>;
}

/// The type two arithmetic values are promoted to before they are compared.
///
/// Identical types promote to themselves. Distinct types promote to the wider
/// of the two when [`From`] converts losslessly between them, e.g. `u8` and
/// `i16` to `i16`, or `i32` and `f64` to `f64`. Any other pair has no common
/// type:
///
/// ```compile_fail
/// // Neither `i32` nor `u32` holds every value of the other.
/// let _ = smath::min(-1_i32, 1_u32);
/// ```
pub trait CommonType<Rhs = Self>: Sized {
    /// The promoted type.
    type Output: Arithmetic + From<Self> + From<Rhs>;
}

/// Shorthand for the promoted type of `T` and `U`.
pub type Common<T, U> = <T as CommonType<U>>::Output;

impl<T: Arithmetic> CommonType<T> for T {
    type Output = T;
}

macro_rules! impl_widening {
    ($($narrow:ident => $($wide:ident)+;)+) => {
        $($(
            impl CommonType<$wide> for $narrow {
                type Output = $wide;
            }

            impl CommonType<$narrow> for $wide {
                type Output = $wide;
            }
        )+)+
    };
}

impl_widening! {
    u8 => u16 u32 u64 u128 usize i16 i32 i64 i128 isize f32 f64;
    u16 => u32 u64 u128 usize i32 i64 i128 f32 f64;
    u32 => u64 u128 i64 i128 f64;
    u64 => u128 i128;
    i8 => i16 i32 i64 i128 isize f32 f64;
    i16 => i32 i64 i128 isize f32 f64;
    i32 => i64 i128 f64;
    i64 => i128;
    f32 => f64;
}

macro_rules! impl_arithmetic {
    (int $($t:ident)+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Arithmetic for $t {
                #[inline]
                fn abs(self) -> Self {
                    crate::$t::abs(self)
                }

                #[inline]
                fn select_min(self, other: Self) -> Self {
                    crate::$t::min(self, other)
                }

                #[inline]
                fn select_max(self, other: Self) -> Self {
                    crate::$t::max(self, other)
                }

                fn try_pow_parts(self, negative: bool, magnitude: u128) -> Result<Self, DomainError> {
                    if negative {
                        return Err(DomainError::NegativeExponent);
                    }
                    crate::$t::checked_pow_wide(self, magnitude).ok_or(DomainError::Overflow)
                }
            }
        )+
    };
    (float $($t:ident => $int:ident)+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Arithmetic for $t {
                #[inline]
                fn abs(self) -> Self {
                    crate::$t::abs(self)
                }

                #[inline]
                fn select_min(self, other: Self) -> Self {
                    crate::$t::min(self, other)
                }

                #[inline]
                fn select_max(self, other: Self) -> Self {
                    crate::$t::max(self, other)
                }

                fn try_pow_parts(self, negative: bool, magnitude: u128) -> Result<Self, DomainError> {
                    let power = crate::$t::pow_wide(self, magnitude);
                    Ok(if negative { 1.0 / power } else { power })
                }
            }

            impl Float for $t {
                type Int = $int;

                #[inline]
                fn floor(self) -> $int {
                    crate::$t::floor(self)
                }

                #[inline]
                fn ceil(self) -> $int {
                    crate::$t::ceil(self)
                }

                #[inline]
                fn round(self) -> $int {
                    crate::$t::round(self)
                }

                #[inline]
                fn trunc(self) -> $int {
                    crate::$t::trunc(self)
                }

                #[inline]
                fn sqrt(self) -> Self {
                    crate::$t::sqrt(self)
                }

                #[inline]
                fn try_sqrt(self) -> Result<Self, DomainError> {
                    crate::$t::try_sqrt(self)
                }
            }
        )+
    };
}

impl_arithmetic!(int i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
impl_arithmetic!(float f32 => i32 f64 => i64);

macro_rules! impl_integral {
    (signed $($t:ident)+) => {
        $(
            impl Integral for $t {
                #[inline]
                fn exponent_parts(self) -> (bool, u128) {
                    (self < 0, self.unsigned_abs() as u128)
                }
            }
        )+
    };
    (unsigned $($t:ident)+) => {
        $(
            impl Integral for $t {
                #[inline]
                fn exponent_parts(self) -> (bool, u128) {
                    (false, self as u128)
                }
            }
        )+
    };
}

impl_integral!(signed i8 i16 i32 i64 isize);
impl_integral!(unsigned u8 u16 u32 u64 usize);

impl Integral for i128 {
    #[inline]
    fn exponent_parts(self) -> (bool, u128) {
        (self < 0, self.unsigned_abs())
    }
}

impl Integral for u128 {
    #[inline]
    fn exponent_parts(self) -> (bool, u128) {
        (false, self)
    }
}
