use num_bigint::BigInt;
use num_traits::{One, Signed};
use crate::*;

// Numerators and denominators of `Ratio`.
// Units are ±1, and the normal form of an integer is its absolute value.

pub trait IntOps<T = Self>: EucRingOps<T> {}

pub trait Integer: EucRing + IntOps + Signed + Ord
where for<'a> &'a Self: EucRingOps<Self> {}

macro_rules! impl_integer {
    ($($type:ty),*) => { $(
        impl AddMonOps for $type {}
        impl AddGrpOps for $type {}
        impl MonOps for $type {}
        impl RingOps for $type {}
        impl EucRingOps for $type {}
        impl IntOps for $type {}

        impl<'a> AddMonOps<$type> for &'a $type {}
        impl<'a> AddGrpOps<$type> for &'a $type {}
        impl<'a> MonOps<$type> for &'a $type {}
        impl<'a> RingOps<$type> for &'a $type {}
        impl<'a> EucRingOps<$type> for &'a $type {}
        impl<'a> IntOps<$type> for &'a $type {}

        impl Elem for $type {
            fn math_symbol() -> String {
                "Z".to_string()
            }
        }

        impl AddMon for $type {}
        impl AddGrp for $type {}
        impl Mon for $type {}

        impl Ring for $type {
            fn inv(&self) -> Option<Self> {
                self.is_pm_one().then(|| self.clone())
            }

            fn is_unit(&self) -> bool {
                self.is_pm_one()
            }

            fn normalizing_unit(&self) -> Self {
                if self.is_negative() { -Self::one() } else { Self::one() }
            }
        }

        // num-integer already returns the non-negative gcd / lcm.
        impl EucRing for $type {
            fn gcd(x: &Self, y: &Self) -> Self {
                num_integer::Integer::gcd(x, y)
            }

            fn lcm(x: &Self, y: &Self) -> Self {
                num_integer::Integer::lcm(x, y)
            }
        }

        impl Integer for $type {}

        #[cfg(feature = "tex")]
        impl crate::tex::TeX for $type {
            fn tex_math_symbol() -> String {
                "\\mathbb{Z}".to_string()
            }

            fn tex_string(&self) -> String {
                self.to_string()
            }
        }
    )* };
}

impl_integer!(i32, i64, i128, BigInt);
