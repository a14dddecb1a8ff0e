//! The SNBT text codec.
//!
//! SNBT is the human-readable form of a tag tree. Unlike the binary form it
//! carries no root name: parsing yields a bare [`TagValue`].
//!
//! ```
//! use lite_nbt::{ListValue, TagValue, snbt};
//!
//! let value = snbt::parse("{foo: 1b, bar: [1, 2, 3]}").unwrap();
//! assert_eq!(value.get_at("foo").unwrap(), &TagValue::Byte(1));
//! assert_eq!(
//!     value.get_as::<ListValue>("bar").unwrap(),
//!     &ListValue::from_iter([1i32, 2, 3])
//! );
//! assert_eq!(snbt::to_string(&value).unwrap(), "{\n    bar: [1, 2, 3],\n    foo: 1b\n}");
//! ```

mod parse;
mod write;

use std::io::Read;

use crate::{Error, NBTBase, Result, TagValue, cold_path};

use self::parse::Parser;

pub use self::write::{EndTagBehavior, FloatFormat, SnbtWriter};

/// Parses one value that must span the whole input, up to surrounding
/// whitespace.
pub fn parse(input: &str) -> Result<TagValue> {
    let mut parser = Parser::new(input);
    let value = parser.parse_value()?;
    parser.finish()?;
    Ok(value)
}

/// Reads the stream to its end as UTF-8 and parses it.
pub fn from_reader(mut reader: impl Read) -> Result<TagValue> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse(&input)
}

/// Parses a value and requires it to be of kind `T`.
///
/// ```
/// use lite_nbt::{Error, TagID, snbt};
///
/// assert_eq!(snbt::parse_as::<i16>("12s").unwrap(), 12);
/// assert!(matches!(
///     snbt::parse_as::<i16>("12"),
///     Err(Error::TagMismatch { expected: TagID::Short, actual: TagID::Int })
/// ));
/// ```
pub fn parse_as<T: NBTBase>(input: &str) -> Result<T> {
    T::from_owned(parse(input)?).map_err(|value| {
        cold_path();
        Error::TagMismatch {
            expected: T::TAG_ID,
            actual: value.tag_id(),
        }
    })
}

/// Prints with [`SnbtWriter::PRETTY`].
pub fn to_string(value: &TagValue) -> Result<String> {
    SnbtWriter::PRETTY.to_string(value)
}
