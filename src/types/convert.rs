//! Lossless conversions between storages of the same lane count.
//!
//! Only pairs whose element conversion can never lose information get a
//! `From` impl; everything else goes through
//! [`NumericStorage::exactly`](crate::storage::NumericStorage::exactly).

use crate::types::*;

macro_rules! widening {
    ($from:ident => $($to:ident),+ $(,)?) => {
        $(
            impl From<$from> for $to {
                #[inline(always)]
                fn from(source: $from) -> Self {
                    source.into_iter().map(Into::into).collect()
                }
            }
        )+
    };
}

widening!(Int8x2 => Int16x2, Int32x2, Int64x2, Float32x2, Float64x2);
widening!(
    UInt8x2 => UInt16x2, UInt32x2, UInt64x2, Int16x2, Int32x2, Int64x2, Float32x2, Float64x2,
);
widening!(Int16x2 => Int32x2, Int64x2, Float32x2, Float64x2);
widening!(UInt16x2 => UInt32x2, UInt64x2, Int32x2, Int64x2, Float32x2, Float64x2);
widening!(Int32x2 => Int64x2, Float64x2);
widening!(UInt32x2 => UInt64x2, Int64x2, Float64x2);
widening!(Float32x2 => Float64x2);

widening!(Int8x4 => Int16x4, Int32x4, Float32x4);
widening!(UInt8x4 => UInt16x4, UInt32x4, Int16x4, Int32x4, Float32x4);
widening!(Int16x4 => Int32x4, Float32x4);
widening!(UInt16x4 => UInt32x4, Int32x4, Float32x4);
