use crate::simd::native;
use crate::types::{UInt16x2, UInt16x4, UInt32x2, UInt32x3, UInt32x4, UInt64x2, UInt8x2, UInt8x4};

signed_integer_storage! {
    /// Two `i8` lanes.
    Int8x2: [i8; 2] as [i8; 2] => UInt8x2,
    new(x, y)
}

signed_integer_storage! {
    /// Four `i8` lanes.
    Int8x4: [i8; 4] as [i8; 4] => UInt8x4,
    new(x, y, z, w)
}

signed_integer_storage! {
    /// Two `i16` lanes.
    Int16x2: [i16; 2] as [i16; 2] => UInt16x2,
    new(x, y)
}

signed_integer_storage! {
    /// Four `i16` lanes.
    Int16x4: [i16; 4] as [i16; 4] => UInt16x4,
    new(x, y, z, w)
}

signed_integer_storage! {
    /// Two `i32` lanes.
    Int32x2: [i32; 2] as [i32; 2] => UInt32x2,
    new(x, y)
}

signed_integer_storage! {
    /// Three `i32` lanes.
    Int32x3: [i32; 3] as [i32; 3] => UInt32x3,
    new(x, y, z)
}

signed_integer_storage! {
    /// Four `i32` lanes in one 128-bit register.
    Int32x4: [i32; 4] as native::I32x4 => UInt32x4,
    new(x, y, z, w)
}

signed_integer_storage! {
    /// Two `i64` lanes.
    Int64x2: [i64; 2] as [i64; 2] => UInt64x2,
    new(x, y)
}
