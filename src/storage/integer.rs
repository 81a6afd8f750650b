use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::element::{IntegerElement, SignedIntegerElement, UnsignedIntegerElement};
use crate::storage::{NumericStorage, SignedStorage};

/// Bitwise operations, shifts and ordering for fixed-width integer lanes.
///
/// Shifts move every lane by the same scalar amount. Amounts of at least the
/// element bit width are allowed: left and logical right shifts produce zero,
/// arithmetic right shifts produce the sign fill.
pub trait FixedWidthIntegerStorage:
    NumericStorage<Element: IntegerElement>
    + Eq
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + ShlAssign<u32>
    + ShrAssign<u32>
{
    /// Lane-wise smaller value.
    fn minimum(self, rhs: Self) -> Self;

    /// Lane-wise larger value.
    fn maximum(self, rhs: Self) -> Self;
}

/// Signed integer lanes; `>>` is arithmetic and the magnitude is the unsigned
/// storage of the same width and lane count.
pub trait SignedIntegerStorage:
    FixedWidthIntegerStorage<Element: SignedIntegerElement>
    + SignedStorage
    + NumericStorage<Magnitude: UnsignedIntegerStorage>
{
}

/// Unsigned integer lanes; `>>` is logical and the magnitude is the identity.
pub trait UnsignedIntegerStorage:
    FixedWidthIntegerStorage<Element: UnsignedIntegerElement> + NumericStorage<Magnitude = Self>
{
}
