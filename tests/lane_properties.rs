//! Algebraic properties of lane-wise arithmetic, checked on seeded random
//! inputs for every kind of storage.
//!
//! Integer lanes wrap, so the group laws hold exactly for them. Float lanes are
//! only checked on laws that IEEE-754 keeps exact for finite inputs.

use lanewise::prelude::*;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

const ITERATIONS: usize = 256;

fn samples<S>(seed: u64) -> Vec<(S, S)>
where
    StandardUniform: Distribution<S>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    (0..ITERATIONS)
        .map(|_| (StandardUniform.sample(&mut rng), StandardUniform.sample(&mut rng)))
        .collect()
}

fn check_additive<S: AdditiveStorage>(x: S, y: S) {
    assert_eq!(x + S::zero(), x);
    assert_eq!(S::zero() + x, x);
    assert_eq!(x - x, S::zero());
    assert_eq!(x + y, y + x);

    let mut z = x;
    z += y;
    assert_eq!(z, x + y);
    z -= x;
    assert_eq!(z, (x + y) - x);
}

fn check_signed<S: SignedStorage>(x: S) {
    assert_eq!(-(-x), x);

    let mut y = x;
    y.negate();
    assert_eq!(y, -x);
}

fn check_numeric<S: NumericStorage>(x: S, y: S, scalar: S::Element) {
    assert_eq!(x * y, y * x);
    assert_eq!(x * scalar, x * S::repeating(scalar));
}

fn check_integer<S: FixedWidthIntegerStorage>(x: S, y: S) {
    assert_eq!((x + y) - y, x);
    assert_eq!(!!x, x);
    assert_eq!(x ^ x, S::zero());
    assert_eq!((x & y) | (x & !y), x);
    assert_eq!(x.minimum(y), y.minimum(x));
    assert_eq!(x.maximum(y), y.maximum(x));

    for (lane, (min, max)) in x.minimum(y).iter().zip(x.maximum(y).iter()).enumerate() {
        assert!(min <= max, "lane {lane}: {min:?} > {max:?}");
    }
}

fn check_lane_faithful<S: RawStorage>(
    x: S,
    y: S,
    op: impl Fn(S, S) -> S,
    scalar: impl Fn(S::Element, S::Element) -> S::Element,
) {
    let result = op(x, y);
    for index in x.indices() {
        assert_eq!(result.get(index), scalar(x.get(index), y.get(index)), "lane {index}");
    }
}

macro_rules! integer_properties {
    ($($test:ident: $storage:ident => $elem:ty, seed = $seed:literal;)+) => {$(
        #[test]
        fn $test() {
            for (x, y) in samples::<$storage>($seed) {
                check_additive(x, y);
                check_numeric(x, y, y[0]);
                check_integer(x, y);

                check_lane_faithful(x, y, |a, b| a + b, <$elem>::wrapping_add);
                check_lane_faithful(x, y, |a, b| a - b, <$elem>::wrapping_sub);
                check_lane_faithful(x, y, |a, b| a * b, <$elem>::wrapping_mul);
                check_lane_faithful(x, y, |a, b| a & b, |a, b| a & b);
                check_lane_faithful(x, y, |a, b| a.maximum(b), |a, b| a.max(b));
            }
        }
    )+};
}

integer_properties! {
    int8x2_properties: Int8x2 => i8, seed = 1;
    int8x4_properties: Int8x4 => i8, seed = 2;
    int16x4_properties: Int16x4 => i16, seed = 3;
    int32x2_properties: Int32x2 => i32, seed = 4;
    int32x3_properties: Int32x3 => i32, seed = 5;
    int32x4_properties: Int32x4 => i32, seed = 6;
    int64x2_properties: Int64x2 => i64, seed = 7;
    uint8x4_properties: UInt8x4 => u8, seed = 8;
    uint16x2_properties: UInt16x2 => u16, seed = 9;
    uint32x3_properties: UInt32x3 => u32, seed = 10;
    uint32x4_properties: UInt32x4 => u32, seed = 11;
    uint64x2_properties: UInt64x2 => u64, seed = 12;
}

#[test]
fn signed_integer_negation_round_trips() {
    for (x, _) in samples::<Int32x4>(13) {
        check_signed(x);
    }
    for (x, _) in samples::<Int8x2>(14) {
        check_signed(x);
    }
}

macro_rules! float_properties {
    ($($test:ident: $storage:ident, seed = $seed:literal;)+) => {$(
        #[test]
        fn $test() {
            for (x, y) in samples::<$storage>($seed) {
                check_additive(x, y);
                check_signed(x);
                check_numeric(x, y, y[0]);

                check_lane_faithful(x, y, |a, b| a + b, |a, b| a + b);
                check_lane_faithful(x, y, |a, b| a * b, |a, b| a * b);
                check_lane_faithful(x, y, |a, b| a / b, |a, b| a / b);
                check_lane_faithful(x, y, |a, b| a.minimum(b), |a, b| if a < b { a } else { b });
            }
        }
    )+};
}

float_properties! {
    float32x2_properties: Float32x2, seed = 21;
    float32x3_properties: Float32x3, seed = 22;
    float32x4_properties: Float32x4, seed = 23;
    float64x2_properties: Float64x2, seed = 24;
}

#[test]
fn magnitude_matches_scalar_abs() {
    for (x, _) in samples::<Int32x4>(31) {
        let magnitude = x.magnitude();
        for index in x.indices() {
            assert_eq!(magnitude[index], x[index].unsigned_abs());
        }
    }

    for (x, y) in samples::<Float32x4>(32) {
        let z = x - y;
        assert_eq!(z.magnitude().to_array(), z.to_array().map(f32::abs));
    }
}

#[test]
fn magnitude_example() {
    assert_eq!(Int32x2::new(100, -2).magnitude(), UInt32x2::new(100, 2));
}

#[test]
fn backend_matches_build_configuration() {
    assert!(["sse2", "neon", "scalar"].contains(&lanewise::BACKEND));

    #[cfg(feature = "scalar")]
    assert_eq!(lanewise::BACKEND, "scalar");
}
