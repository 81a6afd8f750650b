#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::sse::{U32x4, LANE_COUNT};
use crate::simd::traits::{IntegerBackend, LaneBackend, NegateBackend};

/// A SIMD vector of 4 signed 32-bit integers
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct I32x4(__m128i);

impl I32x4 {
    #[inline(always)]
    pub fn from_register(elements: __m128i) -> Self {
        Self(elements)
    }

    #[inline(always)]
    pub fn register(self) -> __m128i {
        self.0
    }
}

/// Low 32 bits of each 32x32 lane product, SSE2 only.
#[inline(always)]
pub(crate) fn mullo_epi32(a: __m128i, b: __m128i) -> __m128i {
    unsafe {
        let even = _mm_mul_epu32(a, b);
        let odd = _mm_mul_epu32(_mm_shuffle_epi32::<0xF5>(a), _mm_shuffle_epi32::<0xF5>(b));
        let low = _mm_unpacklo_epi32(even, odd);
        let high = _mm_unpackhi_epi32(even, odd);
        _mm_unpacklo_epi64(low, high)
    }
}

/// Picks `if_set` where `mask` lanes are all ones and `if_clear` elsewhere.
#[inline(always)]
pub(crate) fn select(mask: __m128i, if_set: __m128i, if_clear: __m128i) -> __m128i {
    unsafe { _mm_or_si128(_mm_and_si128(mask, if_set), _mm_andnot_si128(mask, if_clear)) }
}

/// Shift count register; psll/psrl/psra saturate counts above 31.
#[inline(always)]
pub(crate) fn shift_count(amount: u32) -> __m128i {
    unsafe { _mm_set_epi64x(0, i64::from(amount)) }
}

impl LaneBackend for I32x4 {
    type Element = i32;
    type Magnitude = U32x4;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn make_load(lanes: &[i32]) -> Self {
        assert!(lanes.len() == LANE_COUNT, "Size must be == {LANE_COUNT}");

        Self(unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) })
    }

    #[inline(always)]
    fn make_repeating(value: i32) -> Self {
        Self(unsafe { _mm_set1_epi32(value) })
    }

    #[inline(always)]
    fn make_zero() -> Self {
        Self(unsafe { _mm_setzero_si128() })
    }

    #[inline(always)]
    fn lanes(&self) -> &[i32] {
        // SAFETY: `I32x4` is a transparent `__m128i`, whose 16 bytes are the 4
        // lanes in ascending order with at least `i32` alignment.
        unsafe { &*(self as *const Self as *const [i32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [i32] {
        // SAFETY: see `lanes`; every bit pattern is a valid `i32`.
        unsafe { &mut *(self as *mut Self as *mut [i32; LANE_COUNT]) }
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

    // (x ^ s) - s with s the sign fill; i32::MIN maps to 2^31 once read as u32.
    #[inline(always)]
    fn absolute(self) -> U32x4 {
        unsafe {
            let sign = _mm_srai_epi32::<31>(self.0);
            U32x4::from_register(_mm_sub_epi32(_mm_xor_si128(self.0, sign), sign))
        }
    }
}

impl NegateBackend for I32x4 {
    #[inline(always)]
    fn negate(self) -> Self {
        Self(unsafe { _mm_sub_epi32(_mm_setzero_si128(), self.0) })
    }
}

impl IntegerBackend for I32x4 {
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
        Self(unsafe { _mm_sra_epi32(self.0, shift_count(amount)) })
    }

    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        let greater = unsafe { _mm_cmpgt_epi32(self.0, rhs.0) };
        Self(select(greater, rhs.0, self.0))
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        let greater = unsafe { _mm_cmpgt_epi32(self.0, rhs.0) };
        Self(select(greater, self.0, rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [i32; 4] = [7, -3, i32::MAX, i32::MIN];
    const B: [i32; 4] = [-2, 5, 2, -1];

    fn pair() -> (I32x4, I32x4) {
        (I32x4::make_load(&A), I32x4::make_load(&B))
    }

    #[test]
    fn test_load_and_lanes() {
        let (a, _) = pair();
        assert_eq!(a.lanes(), &A);
    }

    #[test]
    fn test_arithmetic_matches_fallback() {
        let (a, b) = pair();
        assert_eq!(a.add(b).lanes(), &LaneBackend::add(A, B));
        assert_eq!(a.subtract(b).lanes(), &A.subtract(B));
        assert_eq!(a.multiply(b).lanes(), &A.multiply(B));
        assert_eq!(a.negate().lanes(), &A.negate());
        assert_eq!(a.absolute().lanes(), &A.absolute());
    }

    #[test]
    fn test_bitwise_matches_fallback() {
        let (a, b) = pair();
        assert_eq!(a.bitwise_not().lanes(), &A.bitwise_not());
        assert_eq!(a.bitwise_and(b).lanes(), &A.bitwise_and(B));
        assert_eq!(a.bitwise_or(b).lanes(), &A.bitwise_or(B));
        assert_eq!(a.bitwise_xor(b).lanes(), &A.bitwise_xor(B));
    }

    #[test]
    fn test_shifts_match_fallback() {
        let (a, _) = pair();
        for amount in [0, 1, 5, 31, 32, 33, 200, u32::MAX] {
            assert_eq!(a.shift_left(amount).lanes(), &A.shift_left(amount));
            assert_eq!(a.shift_right(amount).lanes(), &A.shift_right(amount));
        }
    }

    #[test]
    fn test_min_max_match_fallback() {
        let (a, b) = pair();
        assert_eq!(IntegerBackend::minimum(a, b).lanes(), &IntegerBackend::minimum(A, B));
        assert_eq!(IntegerBackend::maximum(a, b).lanes(), &IntegerBackend::maximum(A, B));
    }
}
