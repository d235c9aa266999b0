//! Host value -> Watson value conversion.
//!
//! A serde `Serializer` whose output type is [`Value`]. Signed integers of
//! any width become `Int`, unsigned become `Uint`, floats widen to `Float`,
//! text and bytes become byte strings, sequences become `Array`, and maps
//! and structs become `Object`. Enum variants follow the externally tagged
//! convention.

use std::collections::BTreeMap;

use core_types::Value;
use serde::ser::{self, Serialize};

use crate::error::Error;

/// Convert any serializable host value into a Watson value.
///
/// # Errors
///
/// Returns [`Error::Unconvertible`] for host shapes with no Watson kind
/// (128-bit integers, map keys that are not strings or bytes).
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use serializer::to_value;
///
/// assert_eq!(to_value(&-3i32).unwrap(), Value::Int(-3));
/// assert_eq!(to_value(&"hi").unwrap(), Value::String(b"hi".to_vec()));
/// assert_eq!(to_value(&Option::<bool>::None).unwrap(), Value::Nil);
/// ```
pub fn to_value<T>(value: &T) -> Result<Value, Error>
where
    T: Serialize + ?Sized,
{
    value.serialize(ValueSerializer)
}

/// Serializer producing [`Value`].
struct ValueSerializer;

/// Serialize a map key, which must come out as a byte string.
fn key_bytes<T>(key: &T) -> Result<Vec<u8>, Error>
where
    T: Serialize + ?Sized,
{
    match to_value(key)? {
        Value::String(bytes) => Ok(bytes),
        other => Err(Error::unconvertible(format!(
            "map key of kind {}",
            other.kind()
        ))),
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeArray;
    type SerializeTuple = SerializeArray;
    type SerializeTupleStruct = SerializeArray;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeObject;
    type SerializeStruct = SerializeObject;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value, Error> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, Error> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, Error> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, Error> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, Error> {
        Ok(Value::Int(v))
    }

    fn serialize_i128(self, _v: i128) -> Result<Value, Error> {
        Err(Error::unconvertible("i128"))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, Error> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, Error> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, Error> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, Error> {
        Ok(Value::Uint(v))
    }

    fn serialize_u128(self, _v: u128) -> Result<Value, Error> {
        Err(Error::unconvertible("u128"))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, Error> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, Error> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, Error> {
        let mut buf = [0u8; 4];
        Ok(Value::String(v.encode_utf8(&mut buf).as_bytes().to_vec()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, Error> {
        Ok(Value::String(v.as_bytes().to_vec()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, Error> {
        Ok(Value::String(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value, Error> {
        Ok(Value::Nil)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, Error> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, Error> {
        Ok(Value::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, Error> {
        Ok(Value::String(variant.as_bytes().to_vec()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let mut entries = BTreeMap::new();
        entries.insert(variant.as_bytes().to_vec(), to_value(value)?);
        Ok(Value::Object(entries))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeArray, Error> {
        Ok(SerializeArray {
            elements: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeArray, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SerializeArray, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant, Error> {
        Ok(SerializeTupleVariant {
            variant,
            elements: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeObject, Error> {
        Ok(SerializeObject {
            entries: BTreeMap::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<SerializeObject, Error> {
        self.serialize_map(None)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant, Error> {
        Ok(SerializeStructVariant {
            variant,
            entries: BTreeMap::new(),
        })
    }
}

/// Builds an `Array` from a sequence, tuple, or tuple struct.
struct SerializeArray {
    elements: Vec<Value>,
}

impl ser::SerializeSeq for SerializeArray {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.elements.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Array(self.elements))
    }
}

impl ser::SerializeTuple for SerializeArray {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Error> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeArray {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Error> {
        ser::SerializeSeq::end(self)
    }
}

/// Builds the single-entry `Object` of an externally tagged tuple variant.
struct SerializeTupleVariant {
    variant: &'static str,
    elements: Vec<Value>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.elements.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        let mut entries = BTreeMap::new();
        entries.insert(
            self.variant.as_bytes().to_vec(),
            Value::Array(self.elements),
        );
        Ok(Value::Object(entries))
    }
}

/// Builds an `Object` from a map or a struct.
///
/// Struct fields arrive through `SerializeStruct`; flattened fields arrive
/// through `SerializeMap`, which is why one builder backs both.
struct SerializeObject {
    entries: BTreeMap<Vec<u8>, Value>,
    pending_key: Option<Vec<u8>>,
}

impl ser::SerializeMap for SerializeObject {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.pending_key = Some(key_bytes(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| ser::Error::custom("map value serialized before its key"))?;
        self.entries.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Object(self.entries))
    }
}

impl ser::SerializeStruct for SerializeObject {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.entries.insert(key.as_bytes().to_vec(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Object(self.entries))
    }
}

/// Builds the single-entry `Object` of an externally tagged struct variant.
struct SerializeStructVariant {
    variant: &'static str,
    entries: BTreeMap<Vec<u8>, Value>,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        self.entries.insert(key.as_bytes().to_vec(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        let mut outer = BTreeMap::new();
        outer.insert(self.variant.as_bytes().to_vec(), Value::Object(self.entries));
        Ok(Value::Object(outer))
    }
}
