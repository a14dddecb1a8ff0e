use std::ops::{Deref, DerefMut};

use crate::TagValue;

/// A named root tag: the unit read and written by the binary codec.
///
/// The name may be empty and the root may be of any kind, although
/// documents conventionally use a compound.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Nbt {
    pub name: String,
    pub tag: TagValue,
}

impl Nbt {
    pub fn new(name: impl Into<String>, tag: impl Into<TagValue>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }

    pub fn into_parts(self) -> (String, TagValue) {
        (self.name, self.tag)
    }
}

impl From<TagValue> for Nbt {
    fn from(tag: TagValue) -> Self {
        Self {
            name: String::new(),
            tag,
        }
    }
}

impl<S: Into<String>> From<(S, TagValue)> for Nbt {
    fn from((name, tag): (S, TagValue)) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }
}

impl Deref for Nbt {
    type Target = TagValue;

    fn deref(&self) -> &TagValue {
        &self.tag
    }
}

impl DerefMut for Nbt {
    fn deref_mut(&mut self) -> &mut TagValue {
        &mut self.tag
    }
}
