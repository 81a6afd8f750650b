//! Portable backend: plain arrays and one scalar operation per lane.
//!
//! Used for every lane count without a native register mapping, and for all
//! types when the build selects the `fallback` configuration.

use std::array;

use crate::element::{FloatElement, IntegerElement, NumericElement, SignedElement};
use crate::simd::traits::{FloatBackend, IntegerBackend, LaneBackend, NegateBackend};

#[inline(always)]
fn zip_lanes<T: Copy, const N: usize>(
    lhs: [T; N],
    rhs: [T; N],
    op: impl Fn(T, T) -> T,
) -> [T; N] {
    array::from_fn(|i| op(lhs[i], rhs[i]))
}

impl<T: NumericElement, const N: usize> LaneBackend for [T; N] {
    type Element = T;
    type Magnitude = [T::Magnitude; N];

    const LANES: usize = N;

    #[inline(always)]
    fn make_load(lanes: &[T]) -> Self {
        assert!(lanes.len() == N, "Size must be == {N}");

        array::from_fn(|i| lanes[i])
    }

    #[inline(always)]
    fn make_repeating(value: T) -> Self {
        [value; N]
    }

    #[inline(always)]
    fn lanes(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [T] {
        self
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, T::lane_add)
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, T::lane_sub)
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, T::lane_mul)
    }

    #[inline(always)]
    fn absolute(self) -> Self::Magnitude {
        self.map(T::lane_magnitude)
    }
}

impl<T: SignedElement, const N: usize> NegateBackend for [T; N] {
    #[inline(always)]
    fn negate(self) -> Self {
        self.map(T::lane_neg)
    }
}

impl<T: IntegerElement, const N: usize> IntegerBackend for [T; N] {
    #[inline(always)]
    fn bitwise_not(self) -> Self {
        self.map(|lane| !lane)
    }

    #[inline(always)]
    fn bitwise_and(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, |a, b| a & b)
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, |a, b| a | b)
    }

    #[inline(always)]
    fn bitwise_xor(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, |a, b| a ^ b)
    }

    #[inline(always)]
    fn shift_left(self, amount: u32) -> Self {
        self.map(|lane| lane.lane_shl(amount))
    }

    #[inline(always)]
    fn shift_right(self, amount: u32) -> Self {
        self.map(|lane| lane.lane_shr(amount))
    }

    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, Ord::min)
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, Ord::max)
    }
}

impl<T: FloatElement, const N: usize> FloatBackend for [T; N] {
    #[inline(always)]
    fn divide(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, T::lane_div)
    }

    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, T::lane_min)
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        zip_lanes(self, rhs, T::lane_max)
    }
}
