// Copyright 2026 the Smath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constant functions for the `f32` single-precision float type.
//!
//! The rounding functions produce an `i32`.

type Bits = u32;

const MANTISSA_BITS: Bits = 23;
const EXPONENT_MASK: Bits = 0xff;
const EXPONENT_BIAS: Bits = EXPONENT_MASK >> 1;
const SIGN_MASK: Bits = 1 << (Bits::BITS - 1);

/// 2²⁴, large enough to lift any subnormal into the normal range.
const SUBNORMAL_SCALE: f32 = f32::from_bits((EXPONENT_BIAS + 24) << MANTISSA_BITS);
/// 2⁻¹², the square root of the reciprocal of [`SUBNORMAL_SCALE`].
const SUBNORMAL_UNSCALE: f32 = f32::from_bits((EXPONENT_BIAS - 12) << MANTISSA_BITS);

crate::cmp::cmp_fns!(float f32);
crate::rounding::rounding_fns!(f32 => i32);
crate::power::float_pow_fns!(f32);
crate::power::float_root_fns!(f32);
