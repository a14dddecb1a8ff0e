use std::{io::Read, marker::PhantomData};

use zerocopy::{FromBytes, byteorder};

use crate::{
    ByteOrder, CompoundValue, Error, ListValue, MAX_DEPTH, Result, TagID, TagValue, cold_path,
};

/// Upper bound on elements reserved ahead of reading them; larger counts
/// grow as the bytes actually arrive.
const PREALLOC_LIMIT: usize = 4096;

macro_rules! read_scalar {
    ($($name:ident => $ty:ident, $out:ty, $size:literal);* $(;)?) => {
        $(
            #[inline]
            fn $name(&mut self) -> Result<$out> {
                let bytes = self.read_bytes::<$size>()?;
                Ok(byteorder::$ty::<O>::from_bytes(bytes).get())
            }
        )*
    };
}

pub(crate) struct Decoder<R, O> {
    reader: R,
    depth: usize,
    _marker: PhantomData<O>,
}

impl<R: Read, O: ByteOrder> Decoder<R, O> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            depth: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes::<1>()?[0])
    }

    read_scalar! {
        read_u16 => U16, u16, 2;
        read_i16 => I16, i16, 2;
        read_i32 => I32, i32, 4;
        read_i64 => I64, i64, 8;
        read_f32 => F32, f32, 4;
        read_f64 => F64, f64, 8;
    }

    #[inline]
    fn read_tag_id(&mut self) -> Result<TagID> {
        TagID::try_from(self.read_u8()?)
    }

    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32()?;
        if len < 0 {
            cold_path();
            return Err(Error::NegativeLength(len));
        }
        Ok(len as usize)
    }

    /// Reads exactly `len` bytes without trusting `len` for the allocation.
    fn read_raw(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;
        if buf.len() < len {
            cold_path();
            return Err(Error::EndOfFile);
        }
        Ok(buf)
    }

    pub(crate) fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let raw = self.read_raw(len)?;
        match simd_cesu8::mutf8::decode_strict(&raw) {
            Ok(text) => Ok(text.into_owned()),
            Err(_) => {
                cold_path();
                Err(Error::InvalidString)
            }
        }
    }

    fn read_byte_array(&mut self) -> Result<Vec<i8>> {
        let len = self.read_len()?;
        let raw = self.read_raw(len)?;
        Ok(raw.into_iter().map(|byte| byte as i8).collect())
    }

    fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.read_len()?;
        let raw = self.read_raw(len.checked_mul(4).ok_or(Error::ListTooLong(len))?)?;
        let values =
            <[byteorder::I32<O>]>::ref_from_bytes(&raw).map_err(|_| Error::EndOfFile)?;
        Ok(values.iter().map(|value| value.get()).collect())
    }

    fn read_long_array(&mut self) -> Result<Vec<i64>> {
        let len = self.read_len()?;
        let raw = self.read_raw(len.checked_mul(8).ok_or(Error::ListTooLong(len))?)?;
        let values =
            <[byteorder::I64<O>]>::ref_from_bytes(&raw).map_err(|_| Error::EndOfFile)?;
        Ok(values.iter().map(|value| value.get()).collect())
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            cold_path();
            return Err(Error::DepthLimit(MAX_DEPTH));
        }
        Ok(())
    }

    fn read_list(&mut self) -> Result<ListValue> {
        let element_id = self.read_tag_id()?;
        let len = self.read_len()?;
        // End elements carry no bytes, so the count alone would drive the allocation.
        if element_id == TagID::End && len > 0 {
            cold_path();
            return Err(Error::EndListNotEmpty(len));
        }
        self.enter()?;
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            items.push(self.read_payload(element_id)?);
        }
        self.depth -= 1;
        Ok(ListValue::from_parts(element_id, items))
    }

    fn read_compound(&mut self) -> Result<CompoundValue> {
        self.enter()?;
        let mut compound = CompoundValue::new();
        loop {
            let tag_id = self.read_tag_id()?;
            if tag_id == TagID::End {
                break;
            }
            let name = self.read_string()?;
            let value = self.read_payload(tag_id)?;
            compound.insert_if_absent(name, value);
        }
        self.depth -= 1;
        Ok(compound)
    }

    /// Reads the payload of a tag whose id was already consumed.
    pub(crate) fn read_payload(&mut self, tag_id: TagID) -> Result<TagValue> {
        Ok(match tag_id {
            TagID::End => TagValue::End,
            TagID::Byte => TagValue::Byte(self.read_u8()? as i8),
            TagID::Short => TagValue::Short(self.read_i16()?),
            TagID::Int => TagValue::Int(self.read_i32()?),
            TagID::Long => TagValue::Long(self.read_i64()?),
            TagID::Float => TagValue::Float(self.read_f32()?),
            TagID::Double => TagValue::Double(self.read_f64()?),
            TagID::ByteArray => TagValue::ByteArray(self.read_byte_array()?),
            TagID::String => TagValue::String(self.read_string()?),
            TagID::List => TagValue::List(self.read_list()?),
            TagID::Compound => TagValue::Compound(self.read_compound()?),
            TagID::IntArray => TagValue::IntArray(self.read_int_array()?),
            TagID::LongArray => TagValue::LongArray(self.read_long_array()?),
        })
    }

    /// Reads `TagId Name Payload`.
    pub(crate) fn read_document(&mut self) -> Result<(String, TagValue)> {
        let tag_id = self.read_tag_id()?;
        let name = self.read_string()?;
        let tag = self.read_payload(tag_id)?;
        Ok((name, tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BigEndian;

    fn decoder(data: &[u8]) -> Decoder<&[u8], BigEndian> {
        Decoder::new(data)
    }

    #[test]
    fn string_length_is_unsigned() {
        let mut data = vec![0x80, 0x00];
        data.extend(std::iter::repeat_n(b'a', 0x8000));
        let value = decoder(&data).read_string().unwrap();
        assert_eq!(value.len(), 0x8000);
    }

    #[test]
    fn huge_declared_count_is_end_of_file() {
        let data = [0x7f, 0xff, 0xff, 0xff, 1, 2, 3];
        assert!(matches!(
            decoder(&data).read_payload(TagID::LongArray),
            Err(Error::EndOfFile)
        ));
    }

    #[test]
    fn end_list_with_elements_is_rejected() {
        let data = [TagID::End as u8, 0x7f, 0xff, 0xff, 0xff];
        assert!(matches!(
            decoder(&data).read_payload(TagID::List),
            Err(Error::EndListNotEmpty(0x7fff_ffff))
        ));
        let empty = decoder(&[TagID::End as u8, 0, 0, 0, 0])
            .read_payload(TagID::List)
            .unwrap();
        assert_eq!(empty, TagValue::List(ListValue::default()));
    }

    #[test]
    fn malformed_string_is_rejected() {
        let mut data = vec![0x75, 0x30];
        data.extend(std::iter::repeat_n(0xff, 30_000));
        assert!(matches!(
            decoder(&data).read_string(),
            Err(Error::InvalidString)
        ));
        // raw NUL and four-byte sequences are UTF-8 but not MUTF-8
        assert!(matches!(
            decoder(&[0x00, 0x01, 0x00]).read_string(),
            Err(Error::InvalidString)
        ));
        assert!(matches!(
            decoder(&[0x00, 0x04, 0xf0, 0x9f, 0x98, 0x80]).read_string(),
            Err(Error::InvalidString)
        ));
        assert_eq!(decoder(&[0x00, 0x02, 0xc0, 0x80]).read_string().unwrap(), "\0");
    }

    #[test]
    fn negative_count_is_rejected() {
        let data = [0xff, 0xff, 0xff, 0xfe];
        assert!(matches!(
            decoder(&data).read_payload(TagID::ByteArray),
            Err(Error::NegativeLength(-2))
        ));
    }

    #[test]
    fn nesting_is_capped() {
        let mut data = Vec::new();
        for _ in 0..=MAX_DEPTH {
            data.extend([TagID::List as u8, 0, 0, 0, 1]);
        }
        data.extend([TagID::End as u8, 0, 0, 0, 0]);
        assert!(matches!(
            decoder(&data).read_payload(TagID::List),
            Err(Error::DepthLimit(MAX_DEPTH))
        ));
    }
}
