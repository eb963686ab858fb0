use num_traits::{Bounded, Float, SaturatingAdd, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Edge cost and tentative distance type.
///
/// A weight is totally ordered and has an `infinity` sentinel that compares
/// greater than or equal to every other value. Unreachable vertices report
/// `infinity()` as their distance.
pub trait Weight: Copy + Ord + Debug {
    /// Additive identity, the distance of the source vertex
    fn zero() -> Self;

    /// Sentinel for "not reached"; the greatest representable value
    fn infinity() -> Self;

    /// `self + other`, clamped to `infinity()` instead of overflowing
    fn relax_add(self, other: Self) -> Self;

    /// Whether the value is usable as an edge cost (non-negative)
    fn is_valid_cost(self) -> bool {
        self >= Self::zero()
    }

    fn is_finite(self) -> bool {
        self != Self::infinity()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self {
                <$t as Zero>::zero()
            }

            #[inline]
            fn infinity() -> Self {
                <$t as Bounded>::max_value()
            }

            #[inline]
            fn relax_add(self, other: Self) -> Self {
                SaturatingAdd::saturating_add(&self, &other)
            }
        }
    )*};
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i32, i64);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {$(
        impl Weight for OrderedFloat<$t> {
            #[inline]
            fn zero() -> Self {
                OrderedFloat(<$t as Zero>::zero())
            }

            #[inline]
            fn infinity() -> Self {
                OrderedFloat(<$t as Float>::infinity())
            }

            #[inline]
            fn relax_add(self, other: Self) -> Self {
                OrderedFloat(self.0 + other.0)
            }

            // NaN sorts above infinity in `OrderedFloat`, so reject it explicitly
            fn is_valid_cost(self) -> bool {
                self.0 >= <$t as Zero>::zero()
            }
        }
    )*};
}

impl_float_weight!(f32, f64);
