//! Primitive table every native lane representation provides.
//!
//! Storages never touch intrinsics directly. Each operation of a storage is
//! forwarded to exactly one method of these traits, implemented once per
//! native representation (`[T; N]` for the portable backend, SSE2 or NEON
//! registers for the native ones). Implementations must agree lane for lane
//! with the scalar rules of [`crate::element`].

use crate::element::{FloatElement, IntegerElement, NumericElement, SignedElement};

pub trait LaneBackend: Copy {
    type Element: NumericElement;

    /// Representation holding the lane-wise absolute values.
    type Magnitude: LaneBackend<Element = <Self::Element as NumericElement>::Magnitude>;

    const LANES: usize;

    /// Loads one value per lane.
    ///
    /// # Panics
    ///
    /// Panics if `lanes.len() != Self::LANES`.
    fn make_load(lanes: &[Self::Element]) -> Self;

    fn make_repeating(value: Self::Element) -> Self;

    #[inline(always)]
    fn make_zero() -> Self {
        Self::make_repeating(<Self::Element as num::Zero>::zero())
    }

    /// The lanes in order, exactly `Self::LANES` long.
    fn lanes(&self) -> &[Self::Element];

    fn lanes_mut(&mut self) -> &mut [Self::Element];

    #[inline(always)]
    fn get(&self, index: usize) -> Self::Element {
        self.lanes()[index]
    }

    #[inline(always)]
    fn set(&mut self, index: usize, value: Self::Element) {
        self.lanes_mut()[index] = value;
    }

    fn add(self, rhs: Self) -> Self;

    fn subtract(self, rhs: Self) -> Self;

    fn multiply(self, rhs: Self) -> Self;

    fn absolute(self) -> Self::Magnitude;
}

/// Representations whose element has a closed negation.
pub trait NegateBackend: LaneBackend<Element: SignedElement> {
    fn negate(self) -> Self;
}

pub trait IntegerBackend: LaneBackend<Element: IntegerElement> {
    fn bitwise_not(self) -> Self;

    fn bitwise_and(self, rhs: Self) -> Self;

    fn bitwise_or(self, rhs: Self) -> Self;

    fn bitwise_xor(self, rhs: Self) -> Self;

    /// Shifts every lane by the same amount.
    fn shift_left(self, amount: u32) -> Self;

    /// Logical for unsigned lanes, arithmetic for signed ones.
    fn shift_right(self, amount: u32) -> Self;

    fn minimum(self, rhs: Self) -> Self;

    fn maximum(self, rhs: Self) -> Self;
}

pub trait FloatBackend: NegateBackend<Element: FloatElement> {
    fn divide(self, rhs: Self) -> Self;

    fn minimum(self, rhs: Self) -> Self;

    fn maximum(self, rhs: Self) -> Self;
}
