#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::sse::i32x4::{mullo_epi32, select, shift_count};
use crate::simd::sse::LANE_COUNT;
use crate::simd::traits::{IntegerBackend, LaneBackend};

/// A SIMD vector of 4 unsigned 32-bit integers
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct U32x4(__m128i);

impl U32x4 {
    #[inline(always)]
    pub fn from_register(elements: __m128i) -> Self {
        Self(elements)
    }

    #[inline(always)]
    pub fn register(self) -> __m128i {
        self.0
    }

    // SSE2 only compares signed lanes; flipping the sign bit of both operands
    // turns the unsigned order into the signed one.
    #[inline(always)]
    fn greater_than(self, rhs: Self) -> __m128i {
        unsafe {
            let bias = _mm_set1_epi32(i32::MIN);
            _mm_cmpgt_epi32(_mm_xor_si128(self.0, bias), _mm_xor_si128(rhs.0, bias))
        }
    }
}

impl LaneBackend for U32x4 {
    type Element = u32;
    type Magnitude = Self;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn make_load(lanes: &[u32]) -> Self {
        assert!(lanes.len() == LANE_COUNT, "Size must be == {LANE_COUNT}");

        Self(unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) })
    }

    #[inline(always)]
    fn make_repeating(value: u32) -> Self {
        Self(unsafe { _mm_set1_epi32(value as i32) })
    }

    #[inline(always)]
    fn make_zero() -> Self {
        Self(unsafe { _mm_setzero_si128() })
    }

    #[inline(always)]
    fn lanes(&self) -> &[u32] {
        // SAFETY: `U32x4` is a transparent `__m128i`, whose 16 bytes are the 4
        // lanes in ascending order with at least `u32` alignment.
        unsafe { &*(self as *const Self as *const [u32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [u32] {
        // SAFETY: see `lanes`; every bit pattern is a valid `u32`.
        unsafe { &mut *(self as *mut Self as *mut [u32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        Self(mullo_epi32(self.0, rhs.0))
    }

    #[inline(always)]
    fn absolute(self) -> Self {
        self
    }
}

impl IntegerBackend for U32x4 {
    #[inline(always)]
    fn bitwise_not(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, _mm_set1_epi32(-1)) })
    }

    #[inline(always)]
    fn bitwise_and(self, rhs: Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn bitwise_xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn shift_left(self, amount: u32) -> Self {
        Self(unsafe { _mm_sll_epi32(self.0, shift_count(amount)) })
    }

    #[inline(always)]
    fn shift_right(self, amount: u32) -> Self {
        Self(unsafe { _mm_srl_epi32(self.0, shift_count(amount)) })
    }

    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        Self(select(self.greater_than(rhs), rhs.0, self.0))
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        Self(select(self.greater_than(rhs), self.0, rhs.0))
    }
}
