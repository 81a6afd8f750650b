//! ARM NEON register backend for the 4-lane 32-bit storages.
//!
//! NEON is mandatory on AArch64, so the build script selects this module for
//! every aarch64 target reporting the `neon` feature.
//!
//! # Available Types
//!
//! - [`F32x4`]: `float32x4_t`
//! - [`I32x4`]: `int32x4_t`
//! - [`U32x4`]: `uint32x4_t`
//!
//! Shifts go through `vshlq` with a broadcast count clamped to the lane width,
//! which gives the same saturating behavior as the scalar rules: counts of 32
//! or more clear the lane, or leave the sign fill for signed right shifts.

pub mod f32x4;

pub mod i32x4;

pub mod u32x4;

pub use f32x4::F32x4;
pub use i32x4::I32x4;
pub use u32x4::U32x4;

pub const LANE_COUNT: usize = 4;

/// Per-lane shift count for `vshlq`; negative counts shift right.
#[inline(always)]
pub(crate) fn shift_count(amount: u32, right: bool) -> i32 {
    let clamped = amount.min(32) as i32;
    if right {
        -clamped
    } else {
        clamped
    }
}
