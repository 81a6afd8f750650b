use std::arch::aarch64::*;

use crate::simd::neon::{shift_count, U32x4, LANE_COUNT};
use crate::simd::traits::{IntegerBackend, LaneBackend, NegateBackend};

/// A SIMD vector of 4 signed 32-bit integers
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct I32x4(int32x4_t);

impl I32x4 {
    #[inline(always)]
    pub fn from_register(elements: int32x4_t) -> Self {
        Self(elements)
    }

    #[inline(always)]
    pub fn register(self) -> int32x4_t {
        self.0
    }
}

impl LaneBackend for I32x4 {
    type Element = i32;
    type Magnitude = U32x4;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn make_load(lanes: &[i32]) -> Self {
        assert!(lanes.len() == LANE_COUNT, "Size must be == {LANE_COUNT}");

        Self(unsafe { vld1q_s32(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn make_repeating(value: i32) -> Self {
        Self(unsafe { vdupq_n_s32(value) })
    }

    #[inline(always)]
    fn lanes(&self) -> &[i32] {
        // SAFETY: `I32x4` is a transparent `int32x4_t`, whose 16 bytes are the
        // 4 lanes in ascending order with at least `i32` alignment.
        unsafe { &*(self as *const Self as *const [i32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [i32] {
        // SAFETY: see `lanes`; every bit pattern is a valid `i32`.
        unsafe { &mut *(self as *mut Self as *mut [i32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_s32(self.0, rhs.0) })
    }

    // vabsq wraps i32::MIN to itself, which reads back as 2^31 unsigned.
    #[inline(always)]
    fn absolute(self) -> U32x4 {
        U32x4::from_register(unsafe { vreinterpretq_u32_s32(vabsq_s32(self.0)) })
    }
}

impl NegateBackend for I32x4 {
    #[inline(always)]
    fn negate(self) -> Self {
        Self(unsafe { vnegq_s32(self.0) })
    }
}

impl IntegerBackend for I32x4 {
    #[inline(always)]
    fn bitwise_not(self) -> Self {
        Self(unsafe { vmvnq_s32(self.0) })
    }

    #[inline(always)]
    fn bitwise_and(self, rhs: Self) -> Self {
        Self(unsafe { vandq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn bitwise_xor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shift_left(self, amount: u32) -> Self {
        Self(unsafe { vshlq_s32(self.0, vdupq_n_s32(shift_count(amount, false))) })
    }

    #[inline(always)]
    fn shift_right(self, amount: u32) -> Self {
        Self(unsafe { vshlq_s32(self.0, vdupq_n_s32(shift_count(amount, true))) })
    }

    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        Self(unsafe { vminq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_s32(self.0, rhs.0) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [i32; 4] = [7, -3, i32::MAX, i32::MIN];
    const B: [i32; 4] = [-2, 5, 2, -1];

    #[test]
    fn test_matches_fallback() {
        let (a, b) = (I32x4::make_load(&A), I32x4::make_load(&B));

        assert_eq!(a.add(b).lanes(), &LaneBackend::add(A, B));
        assert_eq!(a.multiply(b).lanes(), &A.multiply(B));
        assert_eq!(a.negate().lanes(), &A.negate());
        assert_eq!(a.absolute().lanes(), &A.absolute());
        assert_eq!(a.bitwise_not().lanes(), &A.bitwise_not());
        assert_eq!(IntegerBackend::minimum(a, b).lanes(), &IntegerBackend::minimum(A, B));
        for amount in [0, 1, 31, 32, 300] {
            assert_eq!(a.shift_left(amount).lanes(), &A.shift_left(amount));
            assert_eq!(a.shift_right(amount).lanes(), &A.shift_right(amount));
        }
    }
}
