//! Fixed-width lane vectors.
//!
//! Every type in this crate holds a compile-time number of lanes of one
//! primitive element and applies each operation to all lanes at once. The
//! 4-lane 32-bit types are backed by SSE2 or NEON registers when the target
//! has them; everything else falls back to plain arrays with identical results.
//!
//! ```
//! use lanewise::prelude::*;
//!
//! let a = Float32x4::new(1.0, 2.0, 3.0, 4.0);
//! let b = Float32x4::repeating(0.5);
//! assert_eq!(a * b, Float32x4::new(0.5, 1.0, 1.5, 2.0));
//!
//! let x = Int32x2::new(100, -2);
//! assert_eq!(x.magnitude(), UInt32x2::new(100, 2));
//! assert_eq!(Int8x2::exactly(x), Some(Int8x2::new(100, -2)));
//! ```
//!
//! The capability traits live in [`storage`]; [`prelude`] imports them together
//! with all concrete types.

pub mod element;
pub mod error;
pub mod simd;
pub mod storage;
pub mod types;

pub use error::{LaneError, Result};
pub use simd::BACKEND;
pub use types::*;

pub mod prelude {
    pub use crate::storage::{
        AdditiveStorage, FixedWidthIntegerStorage, FloatingPointStorage, NumericStorage,
        RawStorage, SignedIntegerStorage, SignedStorage, UnsignedIntegerStorage,
    };
    pub use crate::types::*;
}
