#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::sse::LANE_COUNT;
use crate::simd::traits::{FloatBackend, LaneBackend, NegateBackend};

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct F32x4(__m128);

impl F32x4 {
    #[inline(always)]
    pub fn from_register(elements: __m128) -> Self {
        Self(elements)
    }

    #[inline(always)]
    pub fn register(self) -> __m128 {
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

        Self(unsafe { _mm_loadu_ps(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn make_repeating(value: f32) -> Self {
        Self(unsafe { _mm_set1_ps(value) })
    }

    #[inline(always)]
    fn make_zero() -> Self {
        Self(unsafe { _mm_setzero_ps() })
    }

    #[inline(always)]
    fn lanes(&self) -> &[f32] {
        // SAFETY: `F32x4` is a transparent `__m128`, whose 16 bytes are the 4
        // lanes in ascending order with at least `f32` alignment.
        unsafe { &*(self as *const Self as *const [f32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [f32] {
        // SAFETY: see `lanes`; every bit pattern is a valid `f32`.
        unsafe { &mut *(self as *mut Self as *mut [f32; LANE_COUNT]) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        Self(unsafe { _mm_mul_ps(self.0, rhs.0) })
    }

    // Clears the sign bit of every lane.
    #[inline(always)]
    fn absolute(self) -> Self {
        Self(unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.0) })
    }
}

impl NegateBackend for F32x4 {
    // Flips the sign bit, so -(+0.0) is -0.0 like scalar negation.
    #[inline(always)]
    fn negate(self) -> Self {
        Self(unsafe { _mm_xor_ps(self.0, _mm_set1_ps(-0.0)) })
    }
}

impl FloatBackend for F32x4 {
    #[inline(always)]
    fn divide(self, rhs: Self) -> Self {
        Self(unsafe { _mm_div_ps(self.0, rhs.0) })
    }

    // minps returns the second operand when either lane is NaN.
    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        Self(unsafe { _mm_min_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_ps(self.0, rhs.0) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_f32_slice_eq_bitwise(a: &[f32], b: &[f32]) {
        assert_eq!(a.len(), b.len(), "Slice lengths differ");
        for i in 0..a.len() {
            assert_eq!(
                a[i].to_bits(),
                b[i].to_bits(),
                "Elements at index {} differ: left={}, right={}",
                i,
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn test_load_and_lanes() {
        let v = F32x4::make_load(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.lanes(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "Size must be == 4")]
    fn test_load_incorrect_size_panics() {
        let _ = F32x4::make_load(&[1.0, 2.0]);
    }

    #[test]
    fn test_set_lane_writes_register() {
        let mut v = F32x4::make_zero();
        LaneBackend::set(&mut v, 3, 7.5);
        let doubled = v.add(v);
        assert_eq!(doubled.lanes(), &[0.0, 0.0, 0.0, 15.0]);
    }

    #[test]
    fn test_matches_fallback() {
        let a = [1.5f32, -0.0, 8.0, -3.25];
        let b = [0.5f32, 2.0, -4.0, 0.0];
        let (va, vb) = (F32x4::make_load(&a), F32x4::make_load(&b));

        assert_f32_slice_eq_bitwise(va.add(vb).lanes(), &LaneBackend::add(a, b));
        assert_f32_slice_eq_bitwise(va.subtract(vb).lanes(), &a.subtract(b));
        assert_f32_slice_eq_bitwise(va.multiply(vb).lanes(), &a.multiply(b));
        assert_f32_slice_eq_bitwise(va.divide(vb).lanes(), &a.divide(b));
        assert_f32_slice_eq_bitwise(va.negate().lanes(), &a.negate());
        assert_f32_slice_eq_bitwise(va.absolute().lanes(), &a.absolute());
    }

    #[test]
    fn test_min_max_nan_selects_second_operand() {
        let a = [f32::NAN, 1.0, 2.0, -1.0];
        let b = [1.0f32, f32::NAN, 3.0, -2.0];
        let (va, vb) = (F32x4::make_load(&a), F32x4::make_load(&b));

        assert_f32_slice_eq_bitwise(
            FloatBackend::minimum(va, vb).lanes(),
            &FloatBackend::minimum(a, b),
        );
        assert_f32_slice_eq_bitwise(
            FloatBackend::maximum(va, vb).lanes(),
            &FloatBackend::maximum(a, b),
        );
    }
}
