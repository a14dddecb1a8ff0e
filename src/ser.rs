//! Serde support for the value model.
//!
//! Values map onto the serde data model the obvious way: numbers to the
//! matching primitive, strings to strings, lists and arrays to sequences,
//! compounds to maps and End to unit. Going the other way, integers take the
//! width the format reports (so self-describing formats like JSON produce
//! `Long`), and a sequence becomes a list that must be homogeneous.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
};

use crate::{CompoundValue, ListValue, NBTBase, TagValue};

impl Serialize for TagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TagValue::End => serializer.serialize_unit(),
            TagValue::Byte(value) => serializer.serialize_i8(*value),
            TagValue::Short(value) => serializer.serialize_i16(*value),
            TagValue::Int(value) => serializer.serialize_i32(*value),
            TagValue::Long(value) => serializer.serialize_i64(*value),
            TagValue::Float(value) => serializer.serialize_f32(*value),
            TagValue::Double(value) => serializer.serialize_f64(*value),
            TagValue::ByteArray(values) => values.serialize(serializer),
            TagValue::String(value) => serializer.serialize_str(value),
            TagValue::List(list) => list.serialize(serializer),
            TagValue::Compound(compound) => compound.serialize(serializer),
            TagValue::IntArray(values) => values.serialize(serializer),
            TagValue::LongArray(values) => values.serialize(serializer),
        }
    }
}

impl Serialize for ListValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl Serialize for CompoundValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct TagValueVisitor;

impl<'de> Visitor<'de> for TagValueVisitor {
    type Value = TagValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an NBT value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<TagValue, E> {
        Ok(TagValue::from(v))
    }

    fn visit_i8<E: de::Error>(self, v: i8) -> Result<TagValue, E> {
        Ok(TagValue::Byte(v))
    }

    fn visit_i16<E: de::Error>(self, v: i16) -> Result<TagValue, E> {
        Ok(TagValue::Short(v))
    }

    fn visit_i32<E: de::Error>(self, v: i32) -> Result<TagValue, E> {
        Ok(TagValue::Int(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TagValue, E> {
        Ok(TagValue::Long(v))
    }

    // Unsigned values widen to the next signed kind when they do not fit.
    fn visit_u8<E: de::Error>(self, v: u8) -> Result<TagValue, E> {
        Ok(i8::try_from(v).map_or(TagValue::Short(v.into()), TagValue::Byte))
    }

    fn visit_u16<E: de::Error>(self, v: u16) -> Result<TagValue, E> {
        Ok(i16::try_from(v).map_or(TagValue::Int(v.into()), TagValue::Short))
    }

    fn visit_u32<E: de::Error>(self, v: u32) -> Result<TagValue, E> {
        Ok(i32::try_from(v).map_or(TagValue::Long(v.into()), TagValue::Int))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TagValue, E> {
        i64::try_from(v)
            .map(TagValue::Long)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f32<E: de::Error>(self, v: f32) -> Result<TagValue, E> {
        Ok(TagValue::Float(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<TagValue, E> {
        Ok(TagValue::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TagValue, E> {
        Ok(TagValue::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<TagValue, E> {
        Ok(TagValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<TagValue, E> {
        Ok(TagValue::End)
    }

    fn visit_none<E: de::Error>(self) -> Result<TagValue, E> {
        Ok(TagValue::End)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<TagValue, D::Error> {
        TagValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TagValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = seq.next_element::<TagValue>()? {
            items.push(item);
        }
        ListValue::try_from_values(items)
            .map(TagValue::List)
            .map_err(de::Error::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TagValue, A::Error> {
        let mut compound = CompoundValue::new();
        while let Some((name, value)) = map.next_entry::<String, TagValue>()? {
            compound.insert_if_absent(name, value);
        }
        Ok(TagValue::Compound(compound))
    }
}

impl<'de> Deserialize<'de> for TagValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TagValueVisitor)
    }
}

fn deserialize_payload<'de, D: Deserializer<'de>, T: NBTBase>(deserializer: D) -> Result<T, D::Error> {
    TagValue::deserialize(deserializer)?
        .into_payload::<T>()
        .map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for ListValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_payload(deserializer)
    }
}

impl<'de> Deserialize<'de> for CompoundValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_payload(deserializer)
    }
}
