use crate::{CompoundValue, ListValue, TagID, TagValue};

mod private {
    pub trait Sealed {}
}

/// A Rust payload type that corresponds to exactly one tag kind.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `Vec<i8>`,
/// `String`, [`ListValue`], [`CompoundValue`], `Vec<i32>` and `Vec<i64>`.
/// Drives the typed accessors such as [`TagValue::get`].
pub trait NBTBase: private::Sealed + Sized + Into<TagValue> {
    const TAG_ID: TagID;

    #[doc(hidden)]
    fn from_ref(value: &TagValue) -> Option<&Self>;

    #[doc(hidden)]
    fn from_mut(value: &mut TagValue) -> Option<&mut Self>;

    #[doc(hidden)]
    fn from_owned(value: TagValue) -> Result<Self, TagValue>;
}

macro_rules! nbt_base {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl NBTBase for $ty {
                const TAG_ID: TagID = TagID::$variant;

                #[inline]
                fn from_ref(value: &TagValue) -> Option<&Self> {
                    match value {
                        TagValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[inline]
                fn from_mut(value: &mut TagValue) -> Option<&mut Self> {
                    match value {
                        TagValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[inline]
                fn from_owned(value: TagValue) -> Result<Self, TagValue> {
                    match value {
                        TagValue::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }

            impl From<$ty> for TagValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    TagValue::$variant(value)
                }
            }
        )*
    };
}

nbt_base!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    ListValue => List,
    CompoundValue => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
);

/// Target types of [`TagValue::get_num_as`].
pub trait NumericTag: private::Sealed + Copy {
    #[doc(hidden)]
    fn from_byte(value: i8) -> Self;
    #[doc(hidden)]
    fn from_short(value: i16) -> Self;
    #[doc(hidden)]
    fn from_int(value: i32) -> Self;
    #[doc(hidden)]
    fn from_long(value: i64) -> Self;
    #[doc(hidden)]
    fn from_float(value: f32) -> Self;
    #[doc(hidden)]
    fn from_double(value: f64) -> Self;
}

macro_rules! numeric_tag {
    ($($ty:ty),* $(,)?) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl NumericTag for $ty {
                #[inline]
                fn from_byte(value: i8) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_short(value: i16) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_int(value: i32) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_long(value: i64) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_float(value: f32) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_double(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

numeric_tag!(i8, i16, i32, i64, f32, f64);
