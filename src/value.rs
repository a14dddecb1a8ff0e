//! The in-memory tag tree.
//!
//! [`TagValue`] is a closed sum type over the 13 tag kinds. Containers own
//! their children outright: a [`ListValue`] holds elements that all share
//! one [`TagID`], a [`CompoundValue`] maps unique names to values in key
//! order. [`Nbt`] pairs a root value with its name.
//!
//! Every accessor comes in two flavours:
//!
//! - the strict family (`get`, `get_at`, `get_as`, ...) returns
//!   [`Result`] and fails on a kind mismatch, a missing name or an index
//!   out of bounds;
//! - the `get_if` family returns [`Option`] instead, and [`Navigate`] lets
//!   the same calls continue on an `Option`, so a chain of lookups stops at
//!   the first absent step:
//!
//! ```
//! use lite_nbt::{CompoundValue, ListValue, Navigate, TagValue};
//!
//! let mut player = CompoundValue::new();
//! player.insert("Pos", ListValue::from_iter([1.5f64, 64.0, -3.25]));
//! let mut data = CompoundValue::new();
//! data.insert("Player", player);
//! let mut root = CompoundValue::new();
//! root.insert("Data", data);
//! let root = TagValue::from(root);
//!
//! let y = root
//!     .get_if_at("Data")
//!     .get_if_at("Player")
//!     .get_if_as::<ListValue>("Pos")
//!     .get_if_as::<f64>(1);
//! assert_eq!(y, Some(&64.0));
//!
//! let missing = root.get_if_at("Data").get_if_at("Nope").get_if_as::<f64>(0);
//! assert_eq!(missing, None);
//! ```

mod compound;
mod document;
mod list;
mod navigate;
mod typed;

pub use compound::*;
pub use document::*;
pub use list::*;
pub use navigate::*;
pub use typed::*;

use crate::{Error, Index, Key, Result, TagID, cold_path};

/// A single unnamed tag.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TagValue {
    /// Carries no data. Terminates compounds on the wire and stands in for
    /// the element kind of an empty list.
    #[default]
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(ListValue),
    Compound(CompoundValue),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl TagValue {
    /// Returns the kind of the active variant.
    pub const fn tag_id(&self) -> TagID {
        match self {
            TagValue::End => TagID::End,
            TagValue::Byte(_) => TagID::Byte,
            TagValue::Short(_) => TagID::Short,
            TagValue::Int(_) => TagID::Int,
            TagValue::Long(_) => TagID::Long,
            TagValue::Float(_) => TagID::Float,
            TagValue::Double(_) => TagID::Double,
            TagValue::ByteArray(_) => TagID::ByteArray,
            TagValue::String(_) => TagID::String,
            TagValue::List(_) => TagID::List,
            TagValue::Compound(_) => TagID::Compound,
            TagValue::IntArray(_) => TagID::IntArray,
            TagValue::LongArray(_) => TagID::LongArray,
        }
    }

    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self, TagValue::End)
    }

    #[inline]
    pub const fn is_compound(&self) -> bool {
        matches!(self, TagValue::Compound(_))
    }

    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, TagValue::List(_))
    }

    /// Borrows the payload as `T`, failing if the kind is not `T::TAG_ID`.
    ///
    /// ```
    /// use lite_nbt::{Error, TagValue};
    ///
    /// let value = TagValue::from(7i32);
    /// assert_eq!(value.get::<i32>().unwrap(), &7);
    /// assert!(matches!(value.get::<i64>(), Err(Error::TagMismatch { .. })));
    /// ```
    #[inline]
    pub fn get<T: NBTBase>(&self) -> Result<&T> {
        T::from_ref(self).ok_or(Error::TagMismatch {
            expected: T::TAG_ID,
            actual: self.tag_id(),
        })
    }

    #[inline]
    pub fn get_mut<T: NBTBase>(&mut self) -> Result<&mut T> {
        let actual = self.tag_id();
        T::from_mut(self).ok_or(Error::TagMismatch {
            expected: T::TAG_ID,
            actual,
        })
    }

    /// Borrows the payload as `T`, or `None` on a kind mismatch.
    #[inline]
    pub fn get_if<T: NBTBase>(&self) -> Option<&T> {
        T::from_ref(self)
    }

    #[inline]
    pub fn get_if_mut<T: NBTBase>(&mut self) -> Option<&mut T> {
        T::from_mut(self)
    }

    /// Moves the payload out as `T`.
    pub fn into_payload<T: NBTBase>(self) -> Result<T> {
        T::from_owned(self).map_err(|value| Error::TagMismatch {
            expected: T::TAG_ID,
            actual: value.tag_id(),
        })
    }

    /// Looks up a compound entry by name or a list element by position.
    pub fn get_at(&self, index: impl Index) -> Result<&TagValue> {
        let by_name = matches!(index.key(), Key::Name(_));
        match self {
            TagValue::Compound(compound) if by_name => compound.get_at(index),
            TagValue::List(list) if !by_name => list.get_at(index),
            _ => Err(Error::TagMismatch {
                expected: if by_name { TagID::Compound } else { TagID::List },
                actual: self.tag_id(),
            }),
        }
    }

    pub fn get_if_at(&self, index: impl Index) -> Option<&TagValue> {
        match self {
            TagValue::Compound(compound) => compound.get_if_at(index),
            TagValue::List(list) => list.get_if_at(index),
            _ => None,
        }
    }

    /// [`get_at`](Self::get_at) followed by [`get`](Self::get).
    pub fn get_as<T: NBTBase>(&self, index: impl Index) -> Result<&T> {
        self.get_at(index)?.get::<T>()
    }

    pub fn get_if_as<T: NBTBase>(&self, index: impl Index) -> Option<&T> {
        self.get_if_at(index)?.get_if::<T>()
    }

    /// Mutably borrows a child payload as `T`.
    ///
    /// Only same-kind access is offered so list homogeneity is preserved.
    pub fn get_as_mut<T: NBTBase>(&mut self, index: impl Index) -> Result<&mut T> {
        let by_name = matches!(index.key(), Key::Name(_));
        let actual = self.tag_id();
        match self {
            TagValue::Compound(compound) if by_name => compound.get_as_mut(index),
            TagValue::List(list) if !by_name => list.get_as_mut(index),
            _ => {
                cold_path();
                Err(Error::TagMismatch {
                    expected: if by_name { TagID::Compound } else { TagID::List },
                    actual,
                })
            }
        }
    }

    /// Reads one element of a `ByteArray` (`E = i8`), `IntArray` (`i32`) or
    /// `LongArray` (`i64`).
    pub fn get_element<E>(&self, index: usize) -> Result<&E>
    where
        Vec<E>: NBTBase,
    {
        let array = self.get::<Vec<E>>()?;
        array.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: array.len(),
        })
    }

    pub fn get_if_element<E>(&self, index: usize) -> Option<&E>
    where
        Vec<E>: NBTBase,
    {
        self.get_if::<Vec<E>>()?.get(index)
    }

    /// Converts any of the six numeric kinds to `T` with `as` semantics.
    ///
    /// ```
    /// use lite_nbt::TagValue;
    ///
    /// assert_eq!(TagValue::from(3i8).get_num_as::<f64>().unwrap(), 3.0);
    /// assert_eq!(TagValue::from(2.9f32).get_num_as::<i32>().unwrap(), 2);
    /// assert!(TagValue::from("3").get_num_as::<i32>().is_err());
    /// ```
    pub fn get_num_as<T: NumericTag>(&self) -> Result<T> {
        Ok(match *self {
            TagValue::Byte(value) => T::from_byte(value),
            TagValue::Short(value) => T::from_short(value),
            TagValue::Int(value) => T::from_int(value),
            TagValue::Long(value) => T::from_long(value),
            TagValue::Float(value) => T::from_float(value),
            TagValue::Double(value) => T::from_double(value),
            _ => return Err(Error::NotANumber(self.tag_id())),
        })
    }
}

impl From<()> for TagValue {
    fn from(_: ()) -> Self {
        TagValue::End
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        TagValue::Byte(value as i8)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::String(value.to_owned())
    }
}

impl<const N: usize> From<[i8; N]> for TagValue {
    fn from(value: [i8; N]) -> Self {
        TagValue::ByteArray(value.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for TagValue {
    fn from(value: [i32; N]) -> Self {
        TagValue::IntArray(value.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for TagValue {
    fn from(value: [i64; N]) -> Self {
        TagValue::LongArray(value.to_vec())
    }
}
