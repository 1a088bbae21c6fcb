// Copyright 2026 the Smath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain errors reported by the checked operations.

use core::fmt;

/// An argument that is well-typed but outside the domain of an operation.
///
/// Returned by [`try_sqrt`](crate::try_sqrt), [`try_pow`](crate::try_pow) and
/// the per-type `try_sqrt` functions. Because all of these are usable in const
/// contexts, an error can be turned into a build failure with [`raise`]:
///
/// ```
/// const ROOT: f64 = match smath::f64::try_sqrt(2.0) {
///     Ok(root) => root,
///     Err(err) => err.raise(),
/// };
/// assert!((ROOT * ROOT - 2.0).abs() < 1e-15);
/// ```
///
/// ```compile_fail
/// const ROOT: f64 = match smath::f64::try_sqrt(-2.0) {
///     Ok(root) => root,
///     Err(err) => err.raise(),
/// };
/// assert!(ROOT.is_nan());
/// ```
///
/// [`raise`]: DomainError::raise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DomainError {
    /// The square root of a value below zero was requested.
    NegativeRoot,
    /// An integral base was raised to a negative exponent.
    NegativeExponent,
    /// The result does not fit in the type of the base.
    Overflow,
}

impl DomainError {
    /// A short, static description of the error.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NegativeRoot => "square root of a negative number",
            Self::NegativeExponent => "negative exponent for an integral base",
            Self::Overflow => "arithmetic overflow",
        }
    }

    /// Panics with the description of this error.
    ///
    /// During const evaluation the panic is reported as a compile error.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    pub const fn raise(self) -> ! {
        match self {
            Self::NegativeRoot => panic!("square root of a negative number"),
            Self::NegativeExponent => panic!("negative exponent for an integral base"),
            Self::Overflow => panic!("arithmetic overflow"),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", DomainError::NegativeRoot),
            "square root of a negative number"
        );
        assert_eq!(
            DomainError::NegativeExponent.to_string(),
            DomainError::NegativeExponent.as_str()
        );
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow")]
    fn raise_panics_at_run_time() {
        DomainError::Overflow.raise();
    }

    #[cfg(feature = "std")]
    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::Overflow);
        assert_eq!(err.to_string(), "arithmetic overflow");
    }
}
