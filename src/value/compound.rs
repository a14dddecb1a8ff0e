use std::collections::{BTreeMap, btree_map};

use crate::{Error, Index, Key, NBTBase, Result, TagID, TagValue};

/// Named entries, unique by name and iterated in key order.
///
/// Re-serializing a compound therefore writes entries sorted by name,
/// whatever order they were read in.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CompoundValue {
    entries: BTreeMap<String, TagValue>,
}

impl CompoundValue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Option<TagValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Inserts an entry only if the name is not taken yet.
    ///
    /// Returns `false` and drops `value` when an entry already exists. This
    /// is the duplicate-name policy of both decoders: the first entry wins.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, value: impl Into<TagValue>) -> bool {
        match self.entries.entry(name.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value.into());
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<TagValue> {
        self.entries.remove(name)
    }

    /// Mutable access to an entry. Unlike list elements, compound entries may
    /// change kind freely.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut TagValue> {
        self.entries.get_mut(name)
    }

    /// Looks up an entry by name.
    ///
    /// A position index is a [`Error::TagMismatch`]; a missing name is
    /// [`Error::KeyNotFound`].
    pub fn get_at(&self, index: impl Index) -> Result<&TagValue> {
        match index.key() {
            Key::Name(name) => self
                .entries
                .get(name)
                .ok_or_else(|| Error::KeyNotFound(name.to_owned())),
            Key::Position(_) => Err(Error::TagMismatch {
                expected: TagID::List,
                actual: TagID::Compound,
            }),
        }
    }

    pub fn get_if_at(&self, index: impl Index) -> Option<&TagValue> {
        match index.key() {
            Key::Name(name) => self.entries.get(name),
            Key::Position(_) => None,
        }
    }

    pub fn get_as<T: NBTBase>(&self, index: impl Index) -> Result<&T> {
        self.get_at(index)?.get::<T>()
    }

    pub fn get_if_as<T: NBTBase>(&self, index: impl Index) -> Option<&T> {
        self.get_if_at(index)?.get_if::<T>()
    }

    pub fn get_as_mut<T: NBTBase>(&mut self, index: impl Index) -> Result<&mut T> {
        match index.key() {
            Key::Name(name) => self
                .entries
                .get_mut(name)
                .ok_or_else(|| Error::KeyNotFound(name.to_owned()))?
                .get_mut::<T>(),
            Key::Position(_) => Err(Error::TagMismatch {
                expected: TagID::List,
                actual: TagID::Compound,
            }),
        }
    }

    /// Entries in ascending name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, TagValue> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, TagValue> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, TagValue> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a CompoundValue {
    type Item = (&'a String, &'a TagValue);
    type IntoIter = btree_map::Iter<'a, String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for CompoundValue {
    type Item = (String, TagValue);
    type IntoIter = btree_map::IntoIter<String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Collects entries; on duplicate names the first one is kept.
impl<K: Into<String>, V: Into<TagValue>> FromIterator<(K, V)> for CompoundValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut compound = CompoundValue::new();
        for (name, value) in iter {
            compound.insert_if_absent(name, value);
        }
        compound
    }
}

impl<K: Into<String>, V: Into<TagValue>> Extend<(K, V)> for CompoundValue {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
