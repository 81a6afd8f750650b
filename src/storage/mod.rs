//! Storage contracts shared by every lane type.
//!
//! A storage is a `Copy` value holding exactly `LANES` scalars of one element
//! type in a native representation. The traits layer capabilities the same
//! way the element traits do:
//!
//! ```text
//! RawStorage
//! └── AdditiveStorage            zero, +, -
//!     ├── SignedStorage          unary -, negate
//!     └── NumericStorage         *, magnitude, exact conversion
//!         ├── FixedWidthIntegerStorage   ! & | ^ << >> minimum maximum
//!         │   ├── SignedIntegerStorage
//!         │   └── UnsignedIntegerStorage
//!         └── FloatingPointStorage       /, minimum, maximum
//! ```
//!
//! Lane indices outside `0..LANES` and sequences of the wrong length are
//! programmer errors: they panic instead of returning an error, because the
//! lane count is a property of the type.

use std::fmt::Debug;
use std::iter::FusedIterator;
use std::ops::Range;

use crate::element::NumericElement;
use crate::simd::traits::LaneBackend;

mod additive;
mod float;
mod integer;
mod numeric;

pub use additive::{AdditiveStorage, SignedStorage};
pub use float::FloatingPointStorage;
pub use integer::{FixedWidthIntegerStorage, SignedIntegerStorage, UnsignedIntegerStorage};
pub use numeric::NumericStorage;

/// Panics unless `index` addresses one of `lanes` lanes.
#[inline(always)]
#[track_caller]
pub fn check_lane(index: usize, lanes: usize) {
    assert!(index < lanes, "Lane index {index} out of range for {lanes} lanes");
}

/// Panics unless exactly `expected` values were supplied.
#[inline(always)]
#[track_caller]
pub fn check_lane_count(expected: usize, actual: usize) {
    assert!(expected == actual, "Expected exactly {expected} lanes, got {actual}");
}

/// A fixed number of lanes of one element type, wrapped around a native
/// representation.
pub trait RawStorage: Copy + PartialEq + Debug {
    type Element: NumericElement;

    type Raw: LaneBackend<Element = <Self as RawStorage>::Element>;

    const LANES: usize;

    /// Wraps a native value without validation.
    fn from_raw(raw: Self::Raw) -> Self;

    fn raw(&self) -> &Self::Raw;

    fn raw_mut(&mut self) -> &mut Self::Raw;

    #[inline(always)]
    fn into_raw(self) -> Self::Raw {
        *self.raw()
    }

    /// Every lane set to `value`.
    #[inline(always)]
    fn repeating(value: Self::Element) -> Self {
        Self::from_raw(<Self::Raw as LaneBackend>::make_repeating(value))
    }

    /// # Panics
    ///
    /// Panics if `lanes.len() != Self::LANES`.
    #[inline(always)]
    #[track_caller]
    fn from_slice(lanes: &[Self::Element]) -> Self {
        check_lane_count(Self::LANES, lanes.len());
        Self::from_raw(<Self::Raw as LaneBackend>::make_load(lanes))
    }

    /// Fills the lanes in order from a finite sequence.
    ///
    /// # Panics
    ///
    /// Panics if the sequence does not yield exactly `Self::LANES` values. The
    /// whole sequence is consumed before panicking so the message reports its
    /// real length.
    #[track_caller]
    fn from_lanes<I>(lanes: I) -> Self
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let mut raw = <Self::Raw as LaneBackend>::make_zero();
        let mut values = lanes.into_iter();
        let mut filled = 0;

        for (slot, value) in raw.lanes_mut().iter_mut().zip(values.by_ref()) {
            *slot = value;
            filled += 1;
        }

        check_lane_count(Self::LANES, filled + values.count());
        Self::from_raw(raw)
    }

    /// # Panics
    ///
    /// Panics if `index >= Self::LANES`.
    #[inline(always)]
    #[track_caller]
    fn get(&self, index: usize) -> Self::Element {
        check_lane(index, Self::LANES);
        self.raw().get(index)
    }

    /// # Panics
    ///
    /// Panics if `index >= Self::LANES`.
    #[inline(always)]
    #[track_caller]
    fn set(&mut self, index: usize, value: Self::Element) {
        check_lane(index, Self::LANES);
        self.raw_mut().set(index, value);
    }

    #[inline(always)]
    fn as_slice(&self) -> &[Self::Element] {
        self.raw().lanes()
    }

    /// Valid lane indices, always `0..Self::LANES`.
    #[inline(always)]
    fn indices(&self) -> Range<usize> {
        0..Self::LANES
    }

    #[inline(always)]
    fn iter(&self) -> LaneIter<Self> {
        LaneIter::new(*self)
    }
}

/// Iterator over the lanes of a storage, in lane order.
///
/// The iterator owns a copy of the storage, so iterating never observes later
/// writes and a storage can be iterated any number of times.
#[derive(Clone, Debug)]
pub struct LaneIter<S> {
    storage: S,
    range: Range<usize>,
}

impl<S: RawStorage> LaneIter<S> {
    #[inline(always)]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            range: 0..S::LANES,
        }
    }
}

impl<S: RawStorage> Iterator for LaneIter<S> {
    type Item = S::Element;

    #[inline(always)]
    fn next(&mut self) -> Option<S::Element> {
        self.range.next().map(|index| self.storage.raw().get(index))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<S: RawStorage> DoubleEndedIterator for LaneIter<S> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<S::Element> {
        self.range.next_back().map(|index| self.storage.raw().get(index))
    }
}

impl<S: RawStorage> ExactSizeIterator for LaneIter<S> {}

impl<S: RawStorage> FusedIterator for LaneIter<S> {}
