use crate::{CompoundValue, Index, ListValue, NBTBase, TagValue};

/// Continues a `get_if` lookup on a possibly absent container.
///
/// Each call on `None` yields `None`, so a lookup chain needs no
/// intermediate checks and stops at the first missing step.
pub trait Navigate<'a> {
    fn get_if_at(self, index: impl Index) -> Option<&'a TagValue>;

    fn get_if_as<T: NBTBase>(self, index: impl Index) -> Option<&'a T>;
}

macro_rules! navigate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> Navigate<'a> for Option<&'a $ty> {
                #[inline]
                fn get_if_at(self, index: impl Index) -> Option<&'a TagValue> {
                    self?.get_if_at(index)
                }

                #[inline]
                fn get_if_as<T: NBTBase>(self, index: impl Index) -> Option<&'a T> {
                    self?.get_if_as::<T>(index)
                }
            }
        )*
    };
}

navigate!(TagValue, CompoundValue, ListValue);
