//! Reading and writing NBT, the tagged binary tree format of Minecraft save
//! data, plus its SNBT text form and the region files that bundle chunks.
//!
//! - [`binary`] encodes and decodes named documents ([`Nbt`]) in either
//!   byte order.
//! - [`snbt`] parses and prints the text form of a [`TagValue`].
//! - [`region`] reads chunks out of region files.
//!
//! ```
//! use lite_nbt::{Nbt, TagValue, binary, snbt};
//!
//! let value = snbt::parse("{name: \"Steve\", health: 20.0f}").unwrap();
//! let bytes = binary::to_vec_be(&Nbt::new("", value.clone())).unwrap();
//! let back = binary::from_slice_be(&bytes).unwrap();
//! assert_eq!(back.tag, value);
//! assert_eq!(back.get_as::<f32>("health").unwrap(), &20.0);
//! assert_eq!(value.to_string(), "{health: 20.0f, name: \"Steve\"}");
//! # let _: &TagValue = &back;
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NativeEndian;

pub mod binary;
mod error;
mod index;
pub mod region;
#[cfg(feature = "serde")]
mod ser;
pub mod snbt;
mod tag;
mod util;
mod value;

pub use error::*;
pub use index::*;
pub use tag::*;
pub use util::{ByteOrder, MAX_DEPTH};
pub use value::*;

pub(crate) use util::cold_path;
