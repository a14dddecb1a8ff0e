use std::{io::Write, marker::PhantomData};

use zerocopy::{IntoBytes, byteorder};

use crate::{ByteOrder, CompoundValue, Error, ListValue, Result, TagID, TagValue, cold_path};

macro_rules! write_array {
    ($($name:ident => $ty:ident, $elem:ty);* $(;)?) => {
        $(
            fn $name(&mut self, values: &[$elem]) -> Result<()> {
                self.write_len(values.len())?;
                let encoded: Vec<byteorder::$ty<O>> =
                    values.iter().map(|value| byteorder::$ty::<O>::new(*value)).collect();
                self.write_raw(encoded.as_bytes())
            }
        )*
    };
}

pub(crate) struct Encoder<W, O> {
    writer: W,
    _marker: PhantomData<O>,
}

impl<W: Write, O: ByteOrder> Encoder<W, O> {
    pub(crate) fn new(writer: W) -> Self {
        Self {
            writer,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(Error::IO)
    }

    #[inline]
    fn write_tag_id(&mut self, tag_id: TagID) -> Result<()> {
        self.write_raw(&[tag_id as u8])
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        if len > i32::MAX as usize {
            cold_path();
            return Err(Error::ListTooLong(len));
        }
        self.write_raw(&byteorder::I32::<O>::new(len as i32).to_bytes())
    }

    pub(crate) fn write_string(&mut self, value: &str) -> Result<()> {
        let encoded = simd_cesu8::mutf8::encode(value);
        if encoded.len() > u16::MAX as usize {
            cold_path();
            return Err(Error::StringTooLong(encoded.len()));
        }
        self.write_raw(&byteorder::U16::<O>::new(encoded.len() as u16).to_bytes())?;
        self.write_raw(&encoded)
    }

    fn write_byte_array(&mut self, values: &[i8]) -> Result<()> {
        self.write_len(values.len())?;
        self.write_raw(values.as_bytes())
    }

    write_array! {
        write_int_array => I32, i32;
        write_long_array => I64, i64;
    }

    fn write_list(&mut self, list: &ListValue) -> Result<()> {
        self.write_tag_id(list.element_id())?;
        self.write_len(list.len())?;
        for item in list {
            self.write_payload(item)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &CompoundValue) -> Result<()> {
        for (name, value) in compound {
            self.write_tag_id(value.tag_id())?;
            self.write_string(name)?;
            self.write_payload(value)?;
        }
        self.write_tag_id(TagID::End)
    }

    /// Writes a payload without its tag id.
    pub(crate) fn write_payload(&mut self, value: &TagValue) -> Result<()> {
        match value {
            TagValue::End => Ok(()),
            TagValue::Byte(value) => self.write_raw(&[*value as u8]),
            TagValue::Short(value) => self.write_raw(&byteorder::I16::<O>::new(*value).to_bytes()),
            TagValue::Int(value) => self.write_raw(&byteorder::I32::<O>::new(*value).to_bytes()),
            TagValue::Long(value) => self.write_raw(&byteorder::I64::<O>::new(*value).to_bytes()),
            TagValue::Float(value) => self.write_raw(&byteorder::F32::<O>::new(*value).to_bytes()),
            TagValue::Double(value) => {
                self.write_raw(&byteorder::F64::<O>::new(*value).to_bytes())
            }
            TagValue::ByteArray(values) => self.write_byte_array(values),
            TagValue::String(value) => self.write_string(value),
            TagValue::List(list) => self.write_list(list),
            TagValue::Compound(compound) => self.write_compound(compound),
            TagValue::IntArray(values) => self.write_int_array(values),
            TagValue::LongArray(values) => self.write_long_array(values),
        }
    }

    /// Writes `TagId Name Payload`.
    pub(crate) fn write_document(&mut self, name: &str, tag: &TagValue) -> Result<()> {
        self.write_tag_id(tag.tag_id())?;
        self.write_string(name)?;
        self.write_payload(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigEndian, LittleEndian};

    fn encode<O: ByteOrder>(value: &TagValue) -> Vec<u8> {
        let mut out = Vec::new();
        Encoder::<_, O>::new(&mut out).write_payload(value).unwrap();
        out
    }

    #[test]
    fn scalars_follow_byte_order() {
        assert_eq!(encode::<BigEndian>(&TagValue::Short(0x0102)), [1, 2]);
        assert_eq!(encode::<LittleEndian>(&TagValue::Short(0x0102)), [2, 1]);
        assert_eq!(encode::<LittleEndian>(&TagValue::Byte(-1)), [0xff]);
    }

    #[test]
    fn int_array_has_count_prefix() {
        assert_eq!(
            encode::<BigEndian>(&TagValue::IntArray(vec![1, -1])),
            [0, 0, 0, 2, 0, 0, 0, 1, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn string_length_limit() {
        let long = "x".repeat(u16::MAX as usize + 1);
        let mut out = Vec::new();
        let result = Encoder::<_, BigEndian>::new(&mut out).write_string(&long);
        assert!(matches!(result, Err(Error::StringTooLong(65536))));
    }

    #[test]
    fn nul_is_two_bytes_in_modified_utf8() {
        assert_eq!(
            encode::<BigEndian>(&TagValue::from("a\0")),
            [0, 3, b'a', 0xc0, 0x80]
        );
    }
}
