//! The binary NBT codec.
//!
//! A document is `TagId Name Payload`, recursively:
//!
//! - strings are a `u16` byte count followed by modified UTF-8;
//! - arrays are an `i32` count followed by the elements;
//! - lists are an element tag id, an `i32` count and bare payloads;
//! - compounds are `TagId Name Payload` entries closed by a lone End id.
//!
//! Multi-byte fields use the byte order `O`: [`BigEndian`] for Java Edition
//! files, [`LittleEndian`] for Bedrock Edition ones. The `_be`/`_le`
//! functions fix the order.
//!
//! ```
//! use lite_nbt::{CompoundValue, Nbt, binary};
//!
//! let bytes = [0x0a, 0x00, 0x00, 0x00];
//! let nbt = binary::from_slice_be(&bytes).unwrap();
//! assert_eq!(nbt, Nbt::new("", CompoundValue::new()));
//! assert_eq!(binary::to_vec_be(&nbt).unwrap(), bytes);
//! ```

mod read;
mod write;

use std::io::{Read, Write};

use crate::{BigEndian, ByteOrder, Error, LittleEndian, Nbt, Result, TagID, TagValue, cold_path};

use self::{read::Decoder, write::Encoder};

/// Reads one document from a stream.
///
/// Reading stops right after the root payload; anything that follows is
/// left in the stream.
pub fn read<O: ByteOrder>(reader: impl Read) -> Result<Nbt> {
    let (name, tag) = Decoder::<_, O>::new(reader).read_document()?;
    Ok(Nbt { name, tag })
}

#[inline]
pub fn read_be(reader: impl Read) -> Result<Nbt> {
    read::<BigEndian>(reader)
}

#[inline]
pub fn read_le(reader: impl Read) -> Result<Nbt> {
    read::<LittleEndian>(reader)
}

/// Reads one document that must span the whole slice.
///
/// # Errors
///
/// Besides the errors of [`read`], returns [`Error::TrailingData`] if bytes
/// remain after the root payload.
pub fn from_slice<O: ByteOrder>(data: &[u8]) -> Result<Nbt> {
    let mut input = data;
    let nbt = read::<O>(&mut input)?;
    if !input.is_empty() {
        cold_path();
        return Err(Error::TrailingData(input.len()));
    }
    Ok(nbt)
}

#[inline]
pub fn from_slice_be(data: &[u8]) -> Result<Nbt> {
    from_slice::<BigEndian>(data)
}

#[inline]
pub fn from_slice_le(data: &[u8]) -> Result<Nbt> {
    from_slice::<LittleEndian>(data)
}

/// Reads a bare payload of a known kind, with no tag id or name in front.
pub fn read_payload<O: ByteOrder>(reader: impl Read, tag_id: TagID) -> Result<TagValue> {
    Decoder::<_, O>::new(reader).read_payload(tag_id)
}

/// Writes one document.
///
/// # Errors
///
/// Fails only on I/O errors, or when a string or list is too long for its
/// length prefix ([`Error::StringTooLong`], [`Error::ListTooLong`]).
pub fn write<O: ByteOrder>(writer: impl Write, nbt: &Nbt) -> Result<()> {
    Encoder::<_, O>::new(writer).write_document(&nbt.name, &nbt.tag)
}

#[inline]
pub fn write_be(writer: impl Write, nbt: &Nbt) -> Result<()> {
    write::<BigEndian>(writer, nbt)
}

#[inline]
pub fn write_le(writer: impl Write, nbt: &Nbt) -> Result<()> {
    write::<LittleEndian>(writer, nbt)
}

/// Writes a bare payload, with no tag id or name in front.
pub fn write_payload<O: ByteOrder>(writer: impl Write, value: &TagValue) -> Result<()> {
    Encoder::<_, O>::new(writer).write_payload(value)
}

pub fn to_vec<O: ByteOrder>(nbt: &Nbt) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write::<O>(&mut buf, nbt)?;
    Ok(buf)
}

#[inline]
pub fn to_vec_be(nbt: &Nbt) -> Result<Vec<u8>> {
    to_vec::<BigEndian>(nbt)
}

#[inline]
pub fn to_vec_le(nbt: &Nbt) -> Result<Vec<u8>> {
    to_vec::<LittleEndian>(nbt)
}
