//! Concrete lane types.
//!
//! Names follow `<Element><Lanes>`: `Int32x4` holds four `i32`, `UInt8x2` two
//! `u8`, `Float32x3` three `f32`. The 4-lane 32-bit types sit on a SIMD
//! register when the build has one; every other type is a plain array.

#[macro_use]
mod macros;

mod convert;
mod float;
mod signed;
mod unsigned;

pub use float::{Float32x2, Float32x3, Float32x4, Float64x2};
pub use signed::{Int16x2, Int16x4, Int32x2, Int32x3, Int32x4, Int64x2, Int8x2, Int8x4};
pub use unsigned::{
    UInt16x2, UInt16x4, UInt32x2, UInt32x3, UInt32x4, UInt64x2, UInt8x2, UInt8x4,
};
