//! Numeric weights for clauses and thresholds.

use std::fmt::Debug;

use num_traits::{One, Zero};

/// A clause weight or score value.
///
/// Implemented for every primitive integer type and for `f32`/`f64`. Integer
/// sums are checked: a model whose weights cannot all be added without
/// overflow is rejected when it is built.
///
/// # Example
///
/// ```
/// use quirkysat_core::Weight;
///
/// assert!(10i64.is_valid_weight());
/// assert!(!(-1i64).is_valid_weight());
/// assert!(!f64::NAN.is_valid_weight());
/// assert_eq!(<i64 as Weight>::from_count(3), 3);
/// assert_eq!(200u8.checked_add_weight(100), None);
/// ```
pub trait Weight: Copy + Debug + PartialOrd + Zero + One + Send + Sync + 'static {
    /// Adds two weights, `None` on overflow.
    fn checked_add_weight(self, rhs: Self) -> Option<Self>;

    /// Adds two weights, clamping at the largest representable value.
    fn saturating_add_weight(self, rhs: Self) -> Self;

    /// Returns true if this value is non-negative and ordered.
    #[inline]
    fn is_valid_weight(&self) -> bool {
        *self >= Self::zero()
    }

    /// Returns `n` as a weight, clamped to the largest representable value.
    fn from_count(n: usize) -> Self {
        (0..n).fold(Self::zero(), |acc, _| acc.saturating_add_weight(Self::one()))
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),+) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_add_weight(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline]
                fn saturating_add_weight(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }
            }
        )+
    };
}

// Float addition cannot panic; large sums go to infinity.
macro_rules! impl_float_weight {
    ($($t:ty),+) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_add_weight(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn saturating_add_weight(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )+
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);
