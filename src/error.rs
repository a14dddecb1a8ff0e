//! Error types for NBT reading, writing, SNBT parsing and region access.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur in this crate. Lookups through the `get_if` family never
//! produce an error; absence is reported as `None`.
//!
//! # Example
//!
//! ```
//! use lite_nbt::{Error, Result, binary};
//!
//! fn try_parse(data: &[u8]) -> Result<()> {
//!     match binary::from_slice_be(data) {
//!         Ok(_) => Ok(()),
//!         Err(Error::EndOfFile) => {
//!             println!("Data was truncated");
//!             Err(Error::EndOfFile)
//!         }
//!         Err(Error::InvalidTagType(tag)) => {
//!             println!("Unknown tag type: {:#04x}", tag);
//!             Err(Error::InvalidTagType(tag))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert!(try_parse(&[0x0a, 0x00, 0x00, 0x00]).is_ok());
//! assert!(matches!(try_parse(&[0x0a, 0x00]), Err(Error::EndOfFile)));
//! ```

use crate::{TagID, region::CompressionScheme};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    ///
    /// This typically happens when writing to a [`std::io::Write`] implementation
    /// or reading from a [`std::io::Read`] implementation that encounters an error.
    #[error("{0}")]
    IO(std::io::Error),

    /// The input ended unexpectedly.
    ///
    /// This error occurs when the NBT data is truncated or incomplete,
    /// including when a declared length exceeds the bytes actually present.
    #[error("unexpected end of input")]
    EndOfFile,

    /// Extra bytes remain after parsing the NBT data.
    ///
    /// Only slice-based reads check for this; stream reads stop after the
    /// root tag.
    #[error("trailing data after end of input: {0} bytes remaining")]
    TrailingData(usize),

    /// An invalid NBT tag type was encountered.
    ///
    /// NBT defines tag types 0-12. If a byte outside this range is found
    /// where a tag type is expected, this error is returned with the
    /// invalid byte value.
    #[error("invalid NBT tag type: {0:#04x}")]
    InvalidTagType(u8),

    /// An array or list declared a negative element count.
    #[error("negative length: {0}")]
    NegativeLength(i32),

    /// Nesting exceeded the maximum supported depth.
    #[error("nesting depth exceeds {0}")]
    DepthLimit(usize),

    /// A string does not fit into the 16-bit length prefix.
    #[error("string too long: {0} bytes")]
    StringTooLong(usize),

    /// A list or array does not fit into the 32-bit length prefix.
    #[error("list length too long: {0}")]
    ListTooLong(usize),

    /// A string payload is not valid MUTF-8.
    #[error("invalid MUTF-8 string")]
    InvalidString,

    /// A list declared `End` elements together with a non-zero length.
    #[error("list of End tags with length {0}")]
    EndListNotEmpty(usize),

    /// SNBT input violates the grammar.
    #[error("syntax error at {position}: {message}")]
    Syntax { position: usize, message: String },

    /// An End tag was reached while printing with
    /// [`EndTagBehavior::Fail`](crate::snbt::EndTagBehavior::Fail).
    #[error("reached end tag")]
    EndTag,

    /// A printed numeric literal did not fit the configured buffer size.
    #[error("numeric literal of {len} characters exceeds buffer size {limit}")]
    NumericOverflow { len: usize, limit: usize },

    /// The character sink given to the SNBT printer reported an error.
    #[error("formatter error")]
    Fmt(#[from] std::fmt::Error),

    /// A list element kind differs from the list's element kind.
    #[error("tag in list mismatch: expected {expected}, got {actual}")]
    ListMismatch { expected: TagID, actual: TagID },

    /// A strict accessor was used with the wrong payload type.
    #[error("tag mismatch: expected {expected}, got {actual}")]
    TagMismatch { expected: TagID, actual: TagID },

    /// A strict accessor looked up a missing compound entry.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// A strict accessor indexed past the end of a list or array.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// [`get_num_as`](crate::TagValue::get_num_as) was used on a non-numeric tag.
    #[error("not a number: {0}")]
    NotANumber(TagID),

    /// A region location entry points into the two header sectors.
    #[error("sector offset {offset} overlaps with header")]
    SectorOverlapsHeader { offset: u32 },

    /// A region location entry has a sector offset but no sectors.
    #[error("sector count must be > 0")]
    EmptySector,

    /// A chunk declares a compression scheme id this crate does not know.
    #[error("unknown compression scheme: {0}")]
    UnknownCompression(u8),

    /// A known compression scheme was met without a decompressor for it.
    #[error("unsupported compression scheme: {0:?}")]
    UnsupportedCompression(CompressionScheme),

    /// Region chunk coordinates must be within `0..32`.
    #[error("chunk coordinates out of bounds: ({x}, {z})")]
    ChunkOutOfBounds { x: usize, z: usize },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::EndOfFile
        } else {
            Error::IO(error)
        }
    }
}

impl Error {
    pub(crate) fn syntax(position: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            position,
            message: message.into(),
        }
    }
}
