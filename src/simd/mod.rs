//! Native lane representations.
//!
//! [`traits`] defines the primitive table, [`fallback`] implements it for plain
//! arrays, and the architecture modules implement it for SIMD registers. Which
//! architecture module is compiled is decided by `build.rs`, which emits one of
//! the `sse`, `neon` or `fallback` cfg flags.

pub mod fallback;

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

pub mod traits;

/// Name of the backend selected for this build.
pub const BACKEND: &str = if cfg!(sse) {
    "sse2"
} else if cfg!(neon) {
    "neon"
} else {
    "scalar"
};

/// Representations backing the 4-lane 32-bit storages on this build.
pub mod native {
    #[cfg(sse)]
    pub use super::sse::{F32x4, I32x4, U32x4};

    #[cfg(neon)]
    pub use super::neon::{F32x4, I32x4, U32x4};

    #[cfg(not(any(sse, neon)))]
    pub type F32x4 = [f32; 4];

    #[cfg(not(any(sse, neon)))]
    pub type I32x4 = [i32; 4];

    #[cfg(not(any(sse, neon)))]
    pub type U32x4 = [u32; 4];
}
