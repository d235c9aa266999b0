//! Watson value -> host value conversion.
//!
//! A serde `Deserializer` over [`Value`]. Byte strings that hold valid
//! UTF-8 surface as text, others as byte buffers; objects drive struct and
//! map visitors; enum payloads follow the externally tagged convention.
//! Derived struct impls ignore unknown object keys, and absent keys take
//! effect through `#[serde(default)]`.

use std::collections::btree_map;

use core_types::Value;
use serde::de::{self, DeserializeOwned, Visitor};
use serde::forward_to_deserialize_any;

use crate::error::Error;

/// Convert a Watson value into any deserializable host value.
///
/// # Errors
///
/// Returns [`Error::Message`] when the value's shape does not match the
/// target type, carrying serde's description of the mismatch.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use serializer::from_value;
///
/// let n: i32 = from_value(Value::Int(7)).unwrap();
/// assert_eq!(n, 7);
///
/// let missing: Option<String> = from_value(Value::Nil).unwrap();
/// assert_eq!(missing, None);
/// ```
pub fn from_value<T>(value: Value) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer { value })
}

/// Deserializer walking an owned [`Value`].
struct ValueDeserializer {
    value: Value,
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Int(n) => visitor.visit_i64(n),
            Value::Uint(n) => visitor.visit_u64(n),
            Value::Float(x) => visitor.visit_f64(x),
            Value::String(bytes) => match String::from_utf8(bytes) {
                Ok(text) => visitor.visit_string(text),
                Err(raw) => visitor.visit_byte_buf(raw.into_bytes()),
            },
            Value::Object(entries) => visitor.visit_map(MapDeserializer {
                iter: entries.into_iter(),
                pending_value: None,
            }),
            Value::Array(elements) => visitor.visit_seq(SeqDeserializer {
                iter: elements.into_iter(),
            }),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Nil => visitor.visit_unit(),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Nil => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Nil => visitor.visit_unit(),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"nil",
            )),
        }
    }

    fn deserialize_unit_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::String(bytes) => visitor.visit_byte_buf(bytes),
            other => ValueDeserializer { value: other }.deserialize_any(visitor),
        }
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(EnumDeserializer {
                variant,
                value: None,
            }),
            Value::Object(entries) => {
                let mut iter = entries.into_iter();
                let (variant, value) = iter
                    .next()
                    .ok_or_else(|| de::Error::custom("expected a single-entry object for an enum"))?;
                if iter.next().is_some() {
                    return Err(de::Error::custom(
                        "expected a single-entry object for an enum",
                    ));
                }
                visitor.visit_enum(EnumDeserializer {
                    variant,
                    value: Some(value),
                })
            }
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a string or a single-entry object",
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        seq tuple tuple_struct map struct identifier ignored_any
    }
}

/// Describe a value for serde's type-mismatch errors.
fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Int(n) => de::Unexpected::Signed(*n),
        Value::Uint(n) => de::Unexpected::Unsigned(*n),
        Value::Float(x) => de::Unexpected::Float(*x),
        Value::String(bytes) => de::Unexpected::Bytes(bytes),
        Value::Object(_) => de::Unexpected::Map,
        Value::Array(_) => de::Unexpected::Seq,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Nil => de::Unexpected::Unit,
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Error>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer { value }).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: btree_map::IntoIter<Vec<u8>, Value>,
    pending_value: Option<Value>,
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Error>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.pending_value = Some(value);
                seed.deserialize(ValueDeserializer {
                    value: Value::String(key),
                })
                .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Error>
    where
        V: de::DeserializeSeed<'de>,
    {
        let value = self
            .pending_value
            .take()
            .ok_or_else(|| de::Error::custom("map value requested before its key"))?;
        seed.deserialize(ValueDeserializer { value })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: Vec<u8>,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, VariantDeserializer), Error>
    where
        V: de::DeserializeSeed<'de>,
    {
        let tag = seed.deserialize(ValueDeserializer {
            value: Value::String(self.variant),
        })?;
        Ok((tag, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<(), Error> {
        match self.value {
            None | Some(Value::Nil) => Ok(()),
            Some(other) => Err(de::Error::invalid_type(
                unexpected(&other),
                &"unit variant",
            )),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value, Error>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer { value }),
            None => Err(de::Error::custom("missing payload for newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(elements)) => visitor.visit_seq(SeqDeserializer {
                iter: elements.into_iter(),
            }),
            Some(other) => Err(de::Error::invalid_type(
                unexpected(&other),
                &"tuple variant payload",
            )),
            None => Err(de::Error::custom("missing payload for tuple variant")),
        }
    }

    fn struct_variant<V>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(entries)) => visitor.visit_map(MapDeserializer {
                iter: entries.into_iter(),
                pending_value: None,
            }),
            Some(other) => Err(de::Error::invalid_type(
                unexpected(&other),
                &"struct variant payload",
            )),
            None => Err(de::Error::custom("missing payload for struct variant")),
        }
    }
}
