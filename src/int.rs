// Copyright 2026 the Smath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-type modules of the primitive integers.

/// Declares the public module of one integer type, named after the type.
macro_rules! int_module {
    ($kind:ident $t:ident) => {
        #[doc = concat!("Constant functions for the `", stringify!($t), "` primitive type.")]
        pub mod $t {
            $crate::cmp::cmp_fns!($kind $t);
            $crate::power::int_pow_fns!($t);
        }
    };
}

pub(crate) use int_module;

#[cfg(test)]
mod tests {
    #[test]
    fn abs_min_max() {
        assert_eq!(crate::i32::abs(-7), 7);
        assert_eq!(crate::i128::abs(i128::MIN + 1), i128::MAX);
        assert_eq!(crate::u8::abs(200), 200);
        assert_eq!(crate::isize::min(-1, 1), -1);
        assert_eq!(crate::usize::max(3, 9), 9);
        assert_eq!(crate::u64::min(u64::MAX, 0), 0);
    }

    #[test]
    fn pow() {
        assert_eq!(crate::i32::pow(2, 10), 1024);
        assert_eq!(crate::u8::pow(7, 0), 1);
        assert_eq!(crate::u8::pow(0, 0), 1);
        assert_eq!(crate::i64::pow(-2, 63), i64::MIN);
        assert_eq!(crate::u128::pow(2, 127), 1 << 127);
        assert_eq!(crate::i16::pow(-1, u32::MAX), -1);
    }

    #[test]
    fn checked_pow() {
        assert_eq!(crate::u8::checked_pow(2, 7), Some(128));
        assert_eq!(crate::u8::checked_pow(2, 8), None);
        assert_eq!(crate::i8::checked_pow(-2, 7), Some(-128));
        assert_eq!(crate::i8::checked_pow(2, 7), None);
        assert_eq!(crate::u32::checked_pow(0, u32::MAX), Some(0));
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow")]
    fn pow_overflow_panics() {
        let _ = crate::u16::pow(core::hint::black_box(256), 2);
    }

    #[test]
    fn usable_in_const_context() {
        const KIB: usize = crate::usize::pow(2, 10);
        const SPREAD: i32 = crate::i32::max(4, -9) - crate::i32::min(4, -9);
        let page = [0_u8; crate::usize::pow(2, 4)];
        assert_eq!(KIB, 1024);
        assert_eq!(SPREAD, 13);
        assert_eq!(page.len(), 16);
    }
}
