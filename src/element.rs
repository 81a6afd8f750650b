//! Scalar element contracts.
//!
//! Every lane of a storage holds one scalar. The traits in this module describe
//! what a scalar must support before a storage may offer a given capability:
//! [`NumericElement`] for additive and multiplicative storages,
//! [`IntegerElement`] for bitwise and shift operations, [`SignedElement`] for
//! negation and [`FloatElement`] for division.
//!
//! Integer lane arithmetic always wraps (two's complement) so that the scalar
//! rules agree with what the vector units compute, independently of the build
//! profile.

use std::fmt::Debug;

use num::traits::{CheckedShl, CheckedShr};
use num::{Float, NumCast, PrimInt, Unsigned, Zero};

/// A marker trait for scalars that may be stored in a lane.
pub trait Element: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static {}

/// Scalars supporting lane-wise `+`, `-`, `*` and an additive identity.
pub trait NumericElement: Element + Zero + NumCast {
    /// The scalar type that can represent the absolute value of any `Self`.
    type Magnitude: NumericElement;

    fn lane_add(self, rhs: Self) -> Self;

    fn lane_sub(self, rhs: Self) -> Self;

    fn lane_mul(self, rhs: Self) -> Self;

    /// Absolute value, widened to [`Self::Magnitude`] so that it never overflows.
    fn lane_magnitude(self) -> Self::Magnitude;

    /// Converts an integer scalar to `Self` only if no information is lost.
    fn from_integer_exactly<I: IntegerElement>(value: I) -> Option<Self>;
}

/// Scalars with a negation that is closed over the type.
pub trait SignedElement: NumericElement {
    fn lane_neg(self) -> Self;
}

/// Fixed-width two's-complement integers.
pub trait IntegerElement: NumericElement + PrimInt + CheckedShl + CheckedShr {
    /// Shifts toward the most significant bit. Amounts of at least the bit
    /// width clear every bit.
    #[inline(always)]
    fn lane_shl(self, amount: u32) -> Self {
        self.checked_shl(amount).unwrap_or_else(Self::zero)
    }

    /// Shifts toward the least significant bit; arithmetic for signed types,
    /// logical for unsigned ones. Amounts of at least the bit width leave only
    /// the sign fill.
    #[inline(always)]
    fn lane_shr(self, amount: u32) -> Self {
        match self.checked_shr(amount) {
            Some(shifted) => shifted,
            None if self < Self::zero() => !Self::zero(),
            None => Self::zero(),
        }
    }
}

pub trait SignedIntegerElement: IntegerElement + SignedElement {}

pub trait UnsignedIntegerElement: IntegerElement + Unsigned + NumericElement<Magnitude = Self> {}

/// IEEE-754 binary floating point scalars.
pub trait FloatElement: SignedElement + Float + NumericElement<Magnitude = Self> {
    #[inline(always)]
    fn lane_div(self, rhs: Self) -> Self {
        self / rhs
    }

    /// Returns `rhs` unless `self` is strictly smaller, so a NaN in either
    /// operand selects `rhs`.
    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        if self < rhs {
            self
        } else {
            rhs
        }
    }

    /// Returns `rhs` unless `self` is strictly larger.
    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        if self > rhs {
            self
        } else {
            rhs
        }
    }
}

macro_rules! signed_integer_element {
    ($($ty:ty => $magnitude:ty),+ $(,)?) => {$(
        impl Element for $ty {}

        impl NumericElement for $ty {
            type Magnitude = $magnitude;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_magnitude(self) -> $magnitude {
                self.unsigned_abs()
            }

            #[inline(always)]
            fn from_integer_exactly<I: IntegerElement>(value: I) -> Option<Self> {
                <Self as NumCast>::from(value)
            }
        }

        impl SignedElement for $ty {
            #[inline(always)]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }
        }

        impl IntegerElement for $ty {}

        impl SignedIntegerElement for $ty {}
    )+};
}

macro_rules! unsigned_integer_element {
    ($($ty:ty),+ $(,)?) => {$(
        impl Element for $ty {}

        impl NumericElement for $ty {
            type Magnitude = Self;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_magnitude(self) -> Self {
                self
            }

            #[inline(always)]
            fn from_integer_exactly<I: IntegerElement>(value: I) -> Option<Self> {
                <Self as NumCast>::from(value)
            }
        }

        impl IntegerElement for $ty {}

        impl UnsignedIntegerElement for $ty {}
    )+};
}

macro_rules! float_element {
    ($($ty:ty),+ $(,)?) => {$(
        impl Element for $ty {}

        impl NumericElement for $ty {
            type Magnitude = Self;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn lane_magnitude(self) -> Self {
                self.abs()
            }

            // The integer is exact in the float iff converting back yields it again.
            #[inline(always)]
            fn from_integer_exactly<I: IntegerElement>(value: I) -> Option<Self> {
                let converted = <Self as NumCast>::from(value)?;
                let round_trip = <I as NumCast>::from(converted)?;
                (round_trip == value).then_some(converted)
            }
        }

        impl SignedElement for $ty {
            #[inline(always)]
            fn lane_neg(self) -> Self {
                -self
            }
        }

        impl FloatElement for $ty {}
    )+};
}

signed_integer_element!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
unsigned_integer_element!(u8, u16, u32, u64);
float_element!(f32, f64);
