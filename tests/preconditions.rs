//! Programmer errors panic with a descriptive message; the fallible
//! constructors report the same conditions as `LaneError` values instead.

use lanewise::prelude::*;
use lanewise::LaneError;

#[test]
#[should_panic(expected = "Lane index 2 out of range for 2 lanes")]
fn index_at_lane_count_panics() {
    let v = Int32x2::new(1, 2);
    let _ = v[2];
}

#[test]
#[should_panic(expected = "out of range for 3 lanes")]
fn index_at_usize_max_panics() {
    let v = Float32x3::new(1.0, 2.0, 3.0);
    let _ = v[usize::MAX];
}

#[test]
#[should_panic(expected = "Lane index 4 out of range for 4 lanes")]
fn index_mut_out_of_range_panics() {
    let mut v = UInt32x4::repeating(0);
    v[4] = 1;
}

#[test]
#[should_panic(expected = "Lane index 2 out of range for 2 lanes")]
fn get_out_of_range_panics() {
    let v = UInt64x2::repeating(0);
    v.get(2);
}

#[test]
#[should_panic(expected = "Lane index 5 out of range for 4 lanes")]
fn set_out_of_range_panics() {
    let mut v = Float32x4::repeating(0.0);
    v.set(5, 1.0);
}

#[test]
#[should_panic(expected = "Expected exactly 4 lanes, got 3")]
fn from_slice_too_short_panics() {
    Int32x4::from_slice(&[1, 2, 3]);
}

#[test]
#[should_panic(expected = "Expected exactly 2 lanes, got 3")]
fn from_slice_too_long_panics() {
    Float64x2::from_slice(&[1.0, 2.0, 3.0]);
}

#[test]
#[should_panic(expected = "Expected exactly 3 lanes, got 2")]
fn from_lanes_too_few_panics() {
    UInt32x3::from_lanes([1, 2]);
}

#[test]
#[should_panic(expected = "Expected exactly 2 lanes, got 5")]
fn collect_too_many_panics() {
    let _: Int8x2 = (0..5).collect();
}

#[test]
fn from_lanes_exact_length() {
    assert_eq!(UInt32x3::from_lanes(1..=3), UInt32x3::new(1, 2, 3));
    assert_eq!(
        (0..4).map(|i| i as f32).collect::<Float32x4>(),
        Float32x4::new(0.0, 1.0, 2.0, 3.0)
    );
}

#[test]
fn try_from_slice_reports_length() {
    let lanes = [1i16, 2, 3];

    assert_eq!(
        Int16x4::try_from(&lanes[..]),
        Err(LaneError::LengthMismatch { expected: 4, actual: 3 })
    );
    assert_eq!(Int16x2::try_from(&lanes[..2]), Ok(Int16x2::new(1, 2)));
}

#[test]
fn try_exactly_error_message() {
    let err = UInt8x2::try_exactly(Int32x2::new(7, -1)).unwrap_err();

    assert_eq!(err, LaneError::InexactConversion { lane: 1, lanes: 2 });
    assert_eq!(
        err.to_string(),
        "Inexact conversion: lane 1 of 2 is not representable in the target type"
    );
}

#[test]
#[should_panic(expected = "Expected exactly 3 lanes, got 2")]
fn exact_conversion_between_lane_counts_panics() {
    let _ = UInt32x3::exactly(Int32x2::new(1, 2));
}
