use crate::simd::native;

unsigned_integer_storage! {
    /// Two `u8` lanes.
    UInt8x2: [u8; 2] as [u8; 2],
    new(x, y)
}

unsigned_integer_storage! {
    /// Four `u8` lanes.
    UInt8x4: [u8; 4] as [u8; 4],
    new(x, y, z, w)
}

unsigned_integer_storage! {
    /// Two `u16` lanes.
    UInt16x2: [u16; 2] as [u16; 2],
    new(x, y)
}

unsigned_integer_storage! {
    /// Four `u16` lanes.
    UInt16x4: [u16; 4] as [u16; 4],
    new(x, y, z, w)
}

unsigned_integer_storage! {
    /// Two `u32` lanes.
    UInt32x2: [u32; 2] as [u32; 2],
    new(x, y)
}

unsigned_integer_storage! {
    /// Three `u32` lanes.
    UInt32x3: [u32; 3] as [u32; 3],
    new(x, y, z)
}

unsigned_integer_storage! {
    /// Four `u32` lanes in one 128-bit register.
    UInt32x4: [u32; 4] as native::U32x4,
    new(x, y, z, w)
}

unsigned_integer_storage! {
    /// Two `u64` lanes.
    UInt64x2: [u64; 2] as [u64; 2],
    new(x, y)
}
