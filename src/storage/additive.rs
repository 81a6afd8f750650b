use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::element::SignedElement;
use crate::simd::traits::LaneBackend;
use crate::storage::RawStorage;

/// Lane-wise `+` and `-` with an additive identity.
///
/// Integer lanes wrap on overflow; float lanes follow IEEE-754.
pub trait AdditiveStorage:
    RawStorage + Add<Output = Self> + Sub<Output = Self> + AddAssign + SubAssign
{
    /// Every lane set to the element's additive identity.
    #[inline(always)]
    fn zero() -> Self {
        Self::from_raw(<Self::Raw as LaneBackend>::make_zero())
    }
}

/// Storages whose lanes can be negated: signed integers and floats.
///
/// Unsigned storages never implement this trait, so `-x` on them does not
/// compile.
pub trait SignedStorage: AdditiveStorage<Element: SignedElement> + Neg<Output = Self> {
    /// Replaces every lane with its negation.
    #[inline(always)]
    fn negate(&mut self) {
        *self = -*self;
    }
}
