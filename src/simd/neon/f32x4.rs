use std::arch::aarch64::*;

use crate::simd::neon::LANE_COUNT;
use crate::simd::traits::{FloatBackend, LaneBackend, NegateBackend};

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct F32x4(float32x4_t);

impl F32x4 {
    #[inline(always)]
    pub fn from_register(elements: float32x4_t) -> Self {
        Self(elements)
    }

    #[inline(always)]
    pub fn register(self) -> float32x4_t {
        self.0
    }
}

impl LaneBackend for F32x4 {
    type Element = f32;
    type Magnitude = Self;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn make_load(lanes: &[f32]) -> Self {
        assert!(lanes.len() == LANE_COUNT, "Size must be == {LANE_COUNT}");

        Self(unsafe { vld1q_f32(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn make_repeating(value: f32) -> Self {
        Self(unsafe { vdupq_n_f32(value) })
    }

    #[inline(always)]
    fn lanes(&self) -> &[f32] {
        // SAFETY: `F32x4` is a transparent `float32x4_t`, whose 16 bytes are
        // the 4 lanes in ascending order with at least `f32` alignment.
        unsafe { &*(self as *const Self as *const [f32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [f32] {
        // SAFETY: see `lanes`; every bit pattern is a valid `f32`.
        unsafe { &mut *(self as *mut Self as *mut [f32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn absolute(self) -> Self {
        Self(unsafe { vabsq_f32(self.0) })
    }
}

impl NegateBackend for F32x4 {
    #[inline(always)]
    fn negate(self) -> Self {
        Self(unsafe { vnegq_f32(self.0) })
    }
}

impl FloatBackend for F32x4 {
    #[inline(always)]
    fn divide(self, rhs: Self) -> Self {
        Self(unsafe { vdivq_f32(self.0, rhs.0) })
    }

    // vminq propagates NaN; select explicitly so NaN picks the second operand
    // like the other backends.
    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        Self(unsafe { vbslq_f32(vcltq_f32(self.0, rhs.0), self.0, rhs.0) })
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        Self(unsafe { vbslq_f32(vcgtq_f32(self.0, rhs.0), self.0, rhs.0) })
    }
}
