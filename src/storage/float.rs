use std::ops::{Div, DivAssign};

use crate::element::FloatElement;
use crate::storage::{NumericStorage, RawStorage, SignedStorage};

/// IEEE-754 lanes: division, absolute value and selection.
///
/// Infinities and NaN propagate exactly as the floating-point unit produces
/// them; nothing is validated here.
pub trait FloatingPointStorage:
    SignedStorage<Element: FloatElement>
    + NumericStorage<Magnitude = Self>
    + Div<Output = Self>
    + DivAssign
    + Div<<Self as RawStorage>::Element, Output = Self>
    + DivAssign<<Self as RawStorage>::Element>
{
    /// Lane-wise `if self < rhs { self } else { rhs }`; a NaN lane in either
    /// operand yields the lane of `rhs`.
    fn minimum(self, rhs: Self) -> Self;

    /// Lane-wise `if self > rhs { self } else { rhs }`.
    fn maximum(self, rhs: Self) -> Self;
}
