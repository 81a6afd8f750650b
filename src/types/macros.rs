//! Generators for the concrete lane types.
//!
//! Each concrete type is a transparent wrapper around its native
//! representation; every operator forwards to one primitive of
//! [`crate::simd::traits`]. `lane_storage!` emits what all storages share,
//! the kind-specific macros add negation, integer or floating point operators
//! on top of it.

macro_rules! binary_operator {
    ($name:ident, $trait:ident :: $method:ident, $assign_trait:ident :: $assign_method:ident, $backend:path) => {
        impl ::std::ops::$trait for $name {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self { raw: $backend(self.raw, rhs.raw) }
            }
        }

        impl ::std::ops::$assign_trait for $name {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = ::std::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! scalar_operator {
    ($name:ident, $elem:ty, $trait:ident :: $method:ident, $assign_trait:ident :: $assign_method:ident) => {
        // The scalar is broadcast through the same repeating constructor as
        // any other storage.
        impl ::std::ops::$trait<$elem> for $name {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: $elem) -> Self {
                ::std::ops::$trait::$method(
                    self,
                    <Self as $crate::storage::RawStorage>::repeating(rhs),
                )
            }
        }

        impl ::std::ops::$assign_trait<$elem> for $name {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: $elem) {
                *self = ::std::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! lane_storage {
    (
        $(#[$meta:meta])*
        $name:ident: [$elem:ty; $lanes:literal] as $raw:ty => $magnitude:ty,
        new($($lane:ident),+)
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name {
            raw: $raw,
        }

        impl $name {
            pub const LANES: usize = $lanes;

            /// Creates a storage from one scalar per lane, lane 0 first.
            #[inline(always)]
            pub fn new($($lane: $elem),+) -> Self {
                Self::from_array([$($lane),+])
            }

            #[inline(always)]
            pub fn from_array(lanes: [$elem; $lanes]) -> Self {
                Self {
                    raw: <$raw as $crate::simd::traits::LaneBackend>::make_load(&lanes),
                }
            }

            #[inline(always)]
            pub fn to_array(self) -> [$elem; $lanes] {
                let lanes = $crate::simd::traits::LaneBackend::lanes(&self.raw);
                ::std::array::from_fn(|index| lanes[index])
            }
        }

        impl $crate::storage::RawStorage for $name {
            type Element = $elem;
            type Raw = $raw;

            const LANES: usize = $lanes;

            #[inline(always)]
            fn from_raw(raw: $raw) -> Self {
                Self { raw }
            }

            #[inline(always)]
            fn raw(&self) -> &$raw {
                &self.raw
            }

            #[inline(always)]
            fn raw_mut(&mut self) -> &mut $raw {
                &mut self.raw
            }
        }

        impl ::std::ops::Index<usize> for $name {
            type Output = $elem;

            #[inline(always)]
            #[track_caller]
            fn index(&self, index: usize) -> &$elem {
                $crate::storage::check_lane(index, $lanes);
                &$crate::simd::traits::LaneBackend::lanes(&self.raw)[index]
            }
        }

        impl ::std::ops::IndexMut<usize> for $name {
            #[inline(always)]
            #[track_caller]
            fn index_mut(&mut self, index: usize) -> &mut $elem {
                $crate::storage::check_lane(index, $lanes);
                &mut $crate::simd::traits::LaneBackend::lanes_mut(&mut self.raw)[index]
            }
        }

        impl PartialEq for $name {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                $crate::simd::traits::LaneBackend::lanes(&self.raw)
                    == $crate::simd::traits::LaneBackend::lanes(&other.raw)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut tuple = f.debug_tuple(stringify!($name));
                for lane in $crate::simd::traits::LaneBackend::lanes(&self.raw) {
                    tuple.field(lane);
                }
                tuple.finish()
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                <Self as $crate::storage::AdditiveStorage>::zero()
            }
        }

        impl From<[$elem; $lanes]> for $name {
            #[inline(always)]
            fn from(lanes: [$elem; $lanes]) -> Self {
                Self::from_array(lanes)
            }
        }

        impl From<$name> for [$elem; $lanes] {
            #[inline(always)]
            fn from(storage: $name) -> Self {
                storage.to_array()
            }
        }

        impl TryFrom<&[$elem]> for $name {
            type Error = $crate::error::LaneError;

            #[inline(always)]
            fn try_from(lanes: &[$elem]) -> $crate::error::Result<Self> {
                if lanes.len() != $lanes {
                    return Err($crate::error::length_mismatch($lanes, lanes.len()));
                }

                Ok(<Self as $crate::storage::RawStorage>::from_slice(lanes))
            }
        }

        impl FromIterator<$elem> for $name {
            #[track_caller]
            fn from_iter<I: IntoIterator<Item = $elem>>(lanes: I) -> Self {
                <Self as $crate::storage::RawStorage>::from_lanes(lanes)
            }
        }

        impl IntoIterator for $name {
            type Item = $elem;
            type IntoIter = $crate::storage::LaneIter<Self>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter {
                $crate::storage::LaneIter::new(self)
            }
        }

        impl IntoIterator for &$name {
            type Item = $elem;
            type IntoIter = $crate::storage::LaneIter<$name>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter {
                $crate::storage::LaneIter::new(*self)
            }
        }

        binary_operator!($name, Add::add, AddAssign::add_assign, $crate::simd::traits::LaneBackend::add);
        binary_operator!($name, Sub::sub, SubAssign::sub_assign, $crate::simd::traits::LaneBackend::subtract);
        binary_operator!($name, Mul::mul, MulAssign::mul_assign, $crate::simd::traits::LaneBackend::multiply);
        scalar_operator!($name, $elem, Mul::mul, MulAssign::mul_assign);

        impl ::std::ops::Mul<$name> for $elem {
            type Output = $name;

            #[inline(always)]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl $crate::storage::AdditiveStorage for $name {}

        impl $crate::storage::NumericStorage for $name {
            type Magnitude = $magnitude;

            #[inline(always)]
            fn magnitude(&self) -> $magnitude {
                <$magnitude as $crate::storage::RawStorage>::from_raw(
                    $crate::simd::traits::LaneBackend::absolute(self.raw),
                )
            }
        }

        impl ::rand::distr::Distribution<$name> for ::rand::distr::StandardUniform {
            fn sample<R: ::rand::Rng + ?Sized>(&self, rng: &mut R) -> $name {
                $name::from_array(::std::array::from_fn(|_| {
                    <Self as ::rand::distr::Distribution<$elem>>::sample(self, rng)
                }))
            }
        }
    };
}

macro_rules! negate_storage {
    ($name:ident) => {
        impl ::std::ops::Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self {
                    raw: $crate::simd::traits::NegateBackend::negate(self.raw),
                }
            }
        }

        impl $crate::storage::SignedStorage for $name {}
    };
}

macro_rules! integer_storage {
    ($name:ident) => {
        impl Eq for $name {}

        impl ::std::ops::Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self {
                    raw: $crate::simd::traits::IntegerBackend::bitwise_not(self.raw),
                }
            }
        }

        binary_operator!($name, BitAnd::bitand, BitAndAssign::bitand_assign, $crate::simd::traits::IntegerBackend::bitwise_and);
        binary_operator!($name, BitOr::bitor, BitOrAssign::bitor_assign, $crate::simd::traits::IntegerBackend::bitwise_or);
        binary_operator!($name, BitXor::bitxor, BitXorAssign::bitxor_assign, $crate::simd::traits::IntegerBackend::bitwise_xor);

        impl ::std::ops::Shl<u32> for $name {
            type Output = Self;

            #[inline(always)]
            fn shl(self, amount: u32) -> Self {
                Self {
                    raw: $crate::simd::traits::IntegerBackend::shift_left(self.raw, amount),
                }
            }
        }

        impl ::std::ops::Shr<u32> for $name {
            type Output = Self;

            #[inline(always)]
            fn shr(self, amount: u32) -> Self {
                Self {
                    raw: $crate::simd::traits::IntegerBackend::shift_right(self.raw, amount),
                }
            }
        }

        impl ::std::ops::ShlAssign<u32> for $name {
            #[inline(always)]
            fn shl_assign(&mut self, amount: u32) {
                *self = *self << amount;
            }
        }

        impl ::std::ops::ShrAssign<u32> for $name {
            #[inline(always)]
            fn shr_assign(&mut self, amount: u32) {
                *self = *self >> amount;
            }
        }

        impl $crate::storage::FixedWidthIntegerStorage for $name {
            #[inline(always)]
            fn minimum(self, rhs: Self) -> Self {
                Self {
                    raw: $crate::simd::traits::IntegerBackend::minimum(self.raw, rhs.raw),
                }
            }

            #[inline(always)]
            fn maximum(self, rhs: Self) -> Self {
                Self {
                    raw: $crate::simd::traits::IntegerBackend::maximum(self.raw, rhs.raw),
                }
            }
        }
    };
}

macro_rules! signed_integer_storage {
    (
        $(#[$meta:meta])*
        $name:ident: [$elem:ty; $lanes:literal] as $raw:ty => $magnitude:ty,
        new($($lane:ident),+)
    ) => {
        lane_storage! {
            $(#[$meta])*
            $name: [$elem; $lanes] as $raw => $magnitude,
            new($($lane),+)
        }

        negate_storage!($name);

        integer_storage!($name);

        impl $crate::storage::SignedIntegerStorage for $name {}
    };
}

macro_rules! unsigned_integer_storage {
    (
        $(#[$meta:meta])*
        $name:ident: [$elem:ty; $lanes:literal] as $raw:ty,
        new($($lane:ident),+)
    ) => {
        lane_storage! {
            $(#[$meta])*
            $name: [$elem; $lanes] as $raw => $name,
            new($($lane),+)
        }

        integer_storage!($name);

        impl $crate::storage::UnsignedIntegerStorage for $name {}
    };
}

macro_rules! float_storage {
    (
        $(#[$meta:meta])*
        $name:ident: [$elem:ty; $lanes:literal] as $raw:ty,
        new($($lane:ident),+)
    ) => {
        lane_storage! {
            $(#[$meta])*
            $name: [$elem; $lanes] as $raw => $name,
            new($($lane),+)
        }

        negate_storage!($name);

        binary_operator!($name, Div::div, DivAssign::div_assign, $crate::simd::traits::FloatBackend::divide);
        scalar_operator!($name, $elem, Div::div, DivAssign::div_assign);

        impl $crate::storage::FloatingPointStorage for $name {
            #[inline(always)]
            fn minimum(self, rhs: Self) -> Self {
                Self {
                    raw: $crate::simd::traits::FloatBackend::minimum(self.raw, rhs.raw),
                }
            }

            #[inline(always)]
            fn maximum(self, rhs: Self) -> Self {
                Self {
                    raw: $crate::simd::traits::FloatBackend::maximum(self.raw, rhs.raw),
                }
            }
        }
    };
}
