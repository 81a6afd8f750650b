//! SSE2 register backend for the 4-lane 32-bit storages.
//!
//! SSE2 is part of the x86_64 baseline and of every mainstream 32-bit x86
//! target, so the build script selects this module whenever the target reports
//! the `sse2` feature. Integer multiply, minimum and maximum are composed from
//! SSE2 instructions (the single-instruction forms need SSE4.1).
//!
//! # Available Types
//!
//! - [`F32x4`]: `__m128` holding 4 single-precision lanes
//! - [`I32x4`]: `__m128i` holding 4 signed 32-bit lanes
//! - [`U32x4`]: `__m128i` holding 4 unsigned 32-bit lanes
//!
//! All three are `#[repr(transparent)]` over a 16-byte register whose memory
//! image is the lanes in ascending order, which is what `lanes()` borrows.

pub mod f32x4;

pub mod i32x4;

pub mod u32x4;

pub use f32x4::F32x4;
pub use i32x4::I32x4;
pub use u32x4::U32x4;

pub const LANE_COUNT: usize = 4;
