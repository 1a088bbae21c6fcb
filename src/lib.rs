// Copyright 2026 the Smath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Math functions that can be evaluated at compile time.
//!
//! The smath library provides `const fn` replacements for a handful of
//! standard math functions: absolute value, minimum and maximum, the four
//! float-to-integer rounding modes, integer powers and square roots. Because
//! they are `const`, their results can size arrays, initialise `const` items
//! and feed const generic arguments.
//!
//! # Const functions
//!
//! Each primitive numeric type has a module of the same name holding the const
//! functions for that type, in the manner of `core::f64`:
//!
//! ```
//! const SIDE: usize = smath::f64::ceil(smath::f64::sqrt(50.0)) as usize;
//! const CELLS: usize = smath::usize::pow(SIDE, 2);
//!
//! let board = [0_u8; CELLS];
//! assert_eq!(board.len(), 64);
//! ```
//!
//! A module only offers what makes sense for its type: the integer modules
//! have `abs`, `min`, `max`, `pow` and `checked_pow`; the float modules add
//! `floor`, `ceil`, `round`, `trunc`, `sqrt` and `try_sqrt`.
//!
//! # Generic functions
//!
//! The same operations are available at the crate root as generic functions,
//! bounded by the numeric categories in [`num`]. These cannot be `const` on
//! stable Rust, but accept any type of the right category and, for `min` and
//! `max`, values of different types:
//!
//! ```
//! let widest: f64 = smath::max!(3_u8, -40_i16, 2.5_f64);
//! assert_eq!(widest, 3.0);
//! assert_eq!(smath::pow(1.5_f32, -2_i64), 1.0 / 2.25);
//! assert_eq!(smath::round(-2.5_f64), -3);
//! ```
//!
//! # Domain errors
//!
//! `sqrt` of a negative number is NaN, while `try_sqrt` reports a
//! [`DomainError`]. Integer powers that overflow panic, which fails the build
//! when it happens during const evaluation:
//!
//! ```compile_fail
//! const TOO_BIG: u8 = smath::u8::pow(2, 8);
//! assert_eq!(TOO_BIG, 0);
//! ```
//!
//! # Features
//!
//! - `std` (enabled by default): implements `std::error::Error` for
//!   [`DomainError`]. Without it the crate is `no_std`.
//! - `serde`: `Serialize` and `Deserialize` for [`DomainError`].

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::unreadable_literal, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod cmp;
mod error;
mod int;
pub mod num;
mod power;
mod rounding;

pub mod f32;
pub mod f64;

int::int_module!(signed i8);
int::int_module!(signed i16);
int::int_module!(signed i32);
int::int_module!(signed i64);
int::int_module!(signed i128);
int::int_module!(signed isize);
int::int_module!(unsigned u8);
int::int_module!(unsigned u16);
int::int_module!(unsigned u32);
int::int_module!(unsigned u64);
int::int_module!(unsigned u128);
int::int_module!(unsigned usize);

pub use crate::cmp::{abs, max, min};
pub use crate::error::DomainError;
pub use crate::power::{pow, sqrt, try_pow, try_sqrt};
pub use crate::rounding::{ceil, floor, round, trunc};
