use std::fmt;

use crate::Error;

/// The type ID of a tag, as written on the wire.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum TagID {
    #[default]
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagID {
    /// Returns `true` if this is a primitive tag type.
    ///
    /// Primitive tags are: End, Byte, Short, Int, Long, Float, Double.
    /// These tags store their values directly without additional structure.
    ///
    /// # Example
    ///
    /// ```
    /// use lite_nbt::TagID;
    ///
    /// assert!(TagID::Int.is_primitive());
    /// assert!(TagID::Double.is_primitive());
    /// assert!(!TagID::List.is_primitive());
    /// assert!(!TagID::ByteArray.is_primitive());
    /// ```
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::End
                | Self::Byte
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::Float
                | Self::Double
        )
    }

    /// Returns `true` for the six kinds accepted by
    /// [`TagValue::get_num_as`](crate::TagValue::get_num_as).
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }

    /// Returns `true` if this is an array tag type.
    ///
    /// Array tags are: ByteArray, IntArray, LongArray.
    ///
    /// # Example
    ///
    /// ```
    /// use lite_nbt::TagID;
    ///
    /// assert!(TagID::ByteArray.is_array());
    /// assert!(TagID::LongArray.is_array());
    /// assert!(!TagID::List.is_array());
    /// ```
    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
    }

    /// Returns `true` if this is a composite tag type.
    ///
    /// Composite tags are: List, Compound.
    /// These contain other NBT values as children.
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::End => "End",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::ByteArray => "ByteArray",
            Self::String => "String",
            Self::List => "List",
            Self::Compound => "Compound",
            Self::IntArray => "IntArray",
            Self::LongArray => "LongArray",
        }
    }
}

impl TryFrom<u8> for TagID {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::End,
            1 => Self::Byte,
            2 => Self::Short,
            3 => Self::Int,
            4 => Self::Long,
            5 => Self::Float,
            6 => Self::Double,
            7 => Self::ByteArray,
            8 => Self::String,
            9 => Self::List,
            10 => Self::Compound,
            11 => Self::IntArray,
            12 => Self::LongArray,
            _ => return Err(Error::InvalidTagType(value)),
        })
    }
}

impl From<TagID> for u8 {
    #[inline]
    fn from(value: TagID) -> Self {
        value as u8
    }
}

impl fmt::Display for TagID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
