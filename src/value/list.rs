use std::slice;

use crate::{Error, Index, Key, NBTBase, Result, TagID, TagValue, cold_path};

/// An ordered sequence of tags that all share one kind.
///
/// The element kind is stored with the sequence, so an empty list still
/// has one. A list created without a kind uses [`TagID::End`] and adopts
/// the kind of the first element pushed into it.
///
/// Two empty lists compare equal whatever their element kinds, since the
/// text form `[]` cannot carry a kind.
#[derive(Clone, Debug, Default)]
pub struct ListValue {
    element_id: TagID,
    items: Vec<TagValue>,
}

impl PartialEq for ListValue {
    fn eq(&self, other: &Self) -> bool {
        if self.items.is_empty() && other.items.is_empty() {
            return true;
        }
        self.element_id == other.element_id && self.items == other.items
    }
}

impl ListValue {
    /// Creates an empty list of the given element kind.
    #[inline]
    pub const fn new(element_id: TagID) -> Self {
        Self {
            element_id,
            items: Vec::new(),
        }
    }

    pub fn with_capacity(element_id: TagID, capacity: usize) -> Self {
        Self {
            element_id,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Builds a list from untyped values; the first value fixes the kind.
    ///
    /// ```
    /// use lite_nbt::{Error, ListValue, TagID, TagValue};
    ///
    /// let list = ListValue::try_from_values(vec![1i32.into(), 2i32.into()]).unwrap();
    /// assert_eq!(list.element_id(), TagID::Int);
    ///
    /// let mixed = ListValue::try_from_values(vec![1i32.into(), TagValue::from("x")]);
    /// assert!(matches!(mixed, Err(Error::ListMismatch { .. })));
    /// ```
    pub fn try_from_values(values: Vec<TagValue>) -> Result<Self> {
        let element_id = values.first().map_or(TagID::End, TagValue::tag_id);
        if element_id == TagID::End && !values.is_empty() {
            cold_path();
            return Err(Error::EndListNotEmpty(values.len()));
        }
        if let Some(value) = values.iter().find(|value| value.tag_id() != element_id) {
            cold_path();
            return Err(Error::ListMismatch {
                expected: element_id,
                actual: value.tag_id(),
            });
        }
        Ok(Self {
            element_id,
            items: values,
        })
    }

    /// Assembles a list whose elements are already known to be `element_id`.
    pub(crate) fn from_parts(element_id: TagID, items: Vec<TagValue>) -> Self {
        debug_assert!(items.iter().all(|item| item.tag_id() == element_id));
        Self { element_id, items }
    }

    #[inline]
    pub const fn element_id(&self) -> TagID {
        self.element_id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element of the list's kind. End tags are never elements.
    pub fn push(&mut self, value: impl Into<TagValue>) -> Result<()> {
        let value = value.into();
        let actual = value.tag_id();
        if actual == TagID::End {
            cold_path();
            return Err(Error::EndListNotEmpty(self.items.len() + 1));
        }
        if actual != self.element_id {
            if self.element_id == TagID::End && self.items.is_empty() {
                self.element_id = actual;
            } else {
                cold_path();
                return Err(Error::ListMismatch {
                    expected: self.element_id,
                    actual,
                });
            }
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<TagValue> {
        self.items.pop()
    }

    pub fn remove(&mut self, index: usize) -> Result<TagValue> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    #[inline]
    pub fn as_slice(&self) -> &[TagValue] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, TagValue> {
        self.items.iter()
    }

    /// Iterates the payloads as `T`, or `None` if the elements are not `T`.
    ///
    /// An empty list yields an empty iterator for every `T`.
    pub fn iter_as<'a, T: NBTBase + 'a>(&'a self) -> Option<impl Iterator<Item = &'a T>> {
        if !self.items.is_empty() && self.element_id != T::TAG_ID {
            return None;
        }
        Some(self.items.iter().filter_map(T::from_ref))
    }

    /// Looks up an element by position.
    ///
    /// A name index is a [`Error::TagMismatch`]; a position past the end is
    /// [`Error::IndexOutOfBounds`].
    pub fn get_at(&self, index: impl Index) -> Result<&TagValue> {
        match index.key() {
            Key::Position(position) => {
                self.items
                    .get(position)
                    .ok_or(Error::IndexOutOfBounds {
                        index: position,
                        len: self.items.len(),
                    })
            }
            Key::Name(_) => Err(Error::TagMismatch {
                expected: TagID::Compound,
                actual: TagID::List,
            }),
        }
    }

    pub fn get_if_at(&self, index: impl Index) -> Option<&TagValue> {
        match index.key() {
            Key::Position(position) => self.items.get(position),
            Key::Name(_) => None,
        }
    }

    pub fn get_as<T: NBTBase>(&self, index: impl Index) -> Result<&T> {
        self.get_at(index)?.get::<T>()
    }

    pub fn get_if_as<T: NBTBase>(&self, index: impl Index) -> Option<&T> {
        self.get_if_at(index)?.get_if::<T>()
    }

    /// Mutably borrows an element's payload. The kind cannot change through
    /// the returned reference.
    pub fn get_as_mut<T: NBTBase>(&mut self, index: impl Index) -> Result<&mut T> {
        match index.key() {
            Key::Position(position) => {
                let len = self.items.len();
                self.items
                    .get_mut(position)
                    .ok_or(Error::IndexOutOfBounds {
                        index: position,
                        len,
                    })?
                    .get_mut::<T>()
            }
            Key::Name(_) => Err(Error::TagMismatch {
                expected: TagID::Compound,
                actual: TagID::List,
            }),
        }
    }
}

impl<'a> IntoIterator for &'a ListValue {
    type Item = &'a TagValue;
    type IntoIter = slice::Iter<'a, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ListValue {
    type Item = TagValue;
    type IntoIter = std::vec::IntoIter<TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Collects typed payloads; the element kind is `T::TAG_ID` even when the
/// iterator is empty.
impl<T: NBTBase> FromIterator<T> for ListValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            element_id: T::TAG_ID,
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}
