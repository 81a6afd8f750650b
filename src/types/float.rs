use crate::simd::native;

float_storage! {
    /// Two `f32` lanes.
    Float32x2: [f32; 2] as [f32; 2],
    new(x, y)
}

float_storage! {
    /// Three `f32` lanes.
    Float32x3: [f32; 3] as [f32; 3],
    new(x, y, z)
}

float_storage! {
    /// Four `f32` lanes in one 128-bit register.
    Float32x4: [f32; 4] as native::F32x4,
    new(x, y, z, w)
}

float_storage! {
    /// Two `f64` lanes.
    Float64x2: [f64; 2] as [f64; 2],
    new(x, y)
}
