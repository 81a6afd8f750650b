use std::arch::aarch64::*;

use crate::simd::neon::{shift_count, LANE_COUNT};
use crate::simd::traits::{IntegerBackend, LaneBackend};

/// A SIMD vector of 4 unsigned 32-bit integers
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct U32x4(uint32x4_t);

impl U32x4 {
    #[inline(always)]
    pub fn from_register(elements: uint32x4_t) -> Self {
        Self(elements)
    }

    #[inline(always)]
    pub fn register(self) -> uint32x4_t {
        self.0
    }
}

impl LaneBackend for U32x4 {
    type Element = u32;
    type Magnitude = Self;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn make_load(lanes: &[u32]) -> Self {
        assert!(lanes.len() == LANE_COUNT, "Size must be == {LANE_COUNT}");

        Self(unsafe { vld1q_u32(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn make_repeating(value: u32) -> Self {
        Self(unsafe { vdupq_n_u32(value) })
    }

    #[inline(always)]
    fn lanes(&self) -> &[u32] {
        // SAFETY: `U32x4` is a transparent `uint32x4_t`, whose 16 bytes are
        // the 4 lanes in ascending order with at least `u32` alignment.
        unsafe { &*(self as *const Self as *const [u32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [u32] {
        // SAFETY: see `lanes`; every bit pattern is a valid `u32`.
        unsafe { &mut *(self as *mut Self as *mut [u32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn absolute(self) -> Self {
        self
    }
}

impl IntegerBackend for U32x4 {
    #[inline(always)]
    fn bitwise_not(self) -> Self {
        Self(unsafe { vmvnq_u32(self.0) })
    }

    #[inline(always)]
    fn bitwise_and(self, rhs: Self) -> Self {
        Self(unsafe { vandq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn bitwise_xor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shift_left(self, amount: u32) -> Self {
        Self(unsafe { vshlq_u32(self.0, vdupq_n_s32(shift_count(amount, false))) })
    }

    #[inline(always)]
    fn shift_right(self, amount: u32) -> Self {
        Self(unsafe { vshlq_u32(self.0, vdupq_n_s32(shift_count(amount, true))) })
    }

    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        Self(unsafe { vminq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_u32(self.0, rhs.0) })
    }
}
