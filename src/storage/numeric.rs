use std::ops::{Mul, MulAssign};

use crate::element::{IntegerElement, NumericElement};
use crate::error::{inexact_conversion, Result};
use crate::simd::traits::LaneBackend;
use crate::storage::{check_lane_count, AdditiveStorage, RawStorage};

/// Multiplicative storages with a magnitude and exact conversions.
pub trait NumericStorage:
    AdditiveStorage
    + Mul<Output = Self>
    + MulAssign
    + Mul<<Self as RawStorage>::Element, Output = Self>
    + MulAssign<<Self as RawStorage>::Element>
{
    /// Storage able to hold the absolute value of every lane: the unsigned
    /// counterpart for signed integers, `Self` otherwise.
    type Magnitude: NumericStorage<
        Element = <<Self as RawStorage>::Element as NumericElement>::Magnitude,
    >;

    /// Lane-wise absolute value.
    ///
    /// ```
    /// use lanewise::prelude::*;
    ///
    /// let x = Int32x2::new(100, -2);
    /// assert_eq!(x.magnitude(), UInt32x2::new(100, 2));
    /// ```
    fn magnitude(&self) -> Self::Magnitude;

    /// Converts every lane of an integer storage, failing on the first lane
    /// that is not representable in `Self::Element`.
    ///
    /// # Panics
    ///
    /// Panics if `S::LANES != Self::LANES`.
    #[track_caller]
    fn try_exactly<S>(source: S) -> Result<Self>
    where
        S: RawStorage,
        S::Element: IntegerElement,
    {
        check_lane_count(Self::LANES, S::LANES);

        let mut raw = <Self::Raw as LaneBackend>::make_zero();
        for (lane, (slot, value)) in raw.lanes_mut().iter_mut().zip(source.iter()).enumerate() {
            *slot = <<Self as RawStorage>::Element as NumericElement>::from_integer_exactly(value)
                .ok_or_else(|| inexact_conversion(lane, Self::LANES))?;
        }

        Ok(Self::from_raw(raw))
    }

    /// Creates a storage from an integer storage if every lane can be
    /// represented exactly; `None` as soon as one lane cannot.
    ///
    /// ```
    /// use lanewise::prelude::*;
    ///
    /// let x = Int8x2::exactly(Int32x2::new(100, -2));
    /// assert_eq!(x, Some(Int8x2::new(100, -2)));
    ///
    /// let y = Int8x2::exactly(Int32x2::new(1_000, -2));
    /// assert_eq!(y, None);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `S::LANES != Self::LANES`.
    #[inline(always)]
    #[track_caller]
    fn exactly<S>(source: S) -> Option<Self>
    where
        S: RawStorage,
        S::Element: IntegerElement,
    {
        Self::try_exactly(source).ok()
    }
}
