//! Full Pipeline Integration Tests
//!
//! Exercises the complete loop: value -> encoder -> unlexer -> bytes ->
//! lexer -> machine -> value, and checks the loop is the identity.

use core_types::Value;
use integration_tests::{decode, encode_to_bytes};
use std::collections::BTreeMap;

fn round_trip(value: Value) {
    let bytes = encode_to_bytes(&value);
    let decoded = decode(&bytes);
    assert_eq!(decoded, value, "bytes: {:?}", bytes);
}

#[test]
fn test_integer_round_trips() {
    for n in [
        0i64,
        1,
        2,
        5,
        97,
        255,
        256,
        -1,
        -2,
        -97,
        i64::MAX,
        i64::MIN,
        i64::MIN + 1,
    ] {
        round_trip(Value::Int(n));
    }
}

#[test]
fn test_uint_round_trips() {
    for n in [0u64, 1, 255, 1 << 63, u64::MAX] {
        round_trip(Value::Uint(n));
    }
}

#[test]
fn test_float_round_trips() {
    for x in [
        0.0f64,
        -0.0,
        1.0,
        -1.5,
        0.1,
        f64::MIN_POSITIVE,
        f64::MAX,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ] {
        round_trip(Value::Float(x));
    }
}

#[test]
fn test_float_bits_survive_the_loop() {
    let x = 1.23456789e300;
    let bytes = encode_to_bytes(&Value::Float(x));
    match decode(&bytes) {
        Value::Float(back) => assert_eq!(back.to_bits(), x.to_bits()),
        other => panic!("expected float, got {:?}", other),
    }
}

#[test]
fn test_string_round_trips() {
    round_trip(Value::String(vec![]));
    round_trip(Value::String(b"hello".to_vec()));
    round_trip(Value::String(vec![0x00, 0x01, 0xfe, 0xff]));
    round_trip(Value::String("日本語".as_bytes().to_vec()));
}

#[test]
fn test_container_round_trips() {
    round_trip(Value::Array(vec![]));
    round_trip(Value::Array(vec![
        Value::Int(1),
        Value::Bool(true),
        Value::Nil,
        Value::Array(vec![Value::Uint(2)]),
    ]));

    let mut entries = BTreeMap::new();
    entries.insert(b"name".to_vec(), Value::String(b"Taro".to_vec()));
    entries.insert(b"age".to_vec(), Value::Int(25));
    entries.insert(b"tags".to_vec(), Value::Array(vec![Value::Nil]));
    let mut nested = BTreeMap::new();
    nested.insert(b"inner".to_vec(), Value::Object(entries.clone()));
    round_trip(Value::Object(entries));
    round_trip(Value::Object(nested));
}

#[test]
fn test_bool_and_nil_round_trip() {
    round_trip(Value::Bool(true));
    round_trip(Value::Bool(false));
    round_trip(Value::Nil);
}

#[test]
fn test_encoding_is_a_fixed_point() {
    // Re-encoding a decoded value reproduces the byte stream exactly.
    let mut entries = BTreeMap::new();
    entries.insert(b"b".to_vec(), Value::Float(2.5));
    entries.insert(b"a".to_vec(), Value::Array(vec![Value::Int(-7)]));
    let value = Value::Object(entries);

    let first = encode_to_bytes(&value);
    let second = encode_to_bytes(&decode(&first));
    assert_eq!(first, second);
}

#[test]
fn test_filler_bytes_are_ignored() {
    let value = Value::Int(5);
    let bytes = encode_to_bytes(&value);
    let mut padded = Vec::new();
    for b in bytes {
        padded.push(b);
        padded.extend_from_slice(b" \n");
    }
    assert_eq!(decode(&padded), value);
}

#[test]
fn test_object_keys_spell_the_alternate_alphabet() {
    // {"a": 1, "b": "x"}: every key's bytes use the S alphabet, every
    // value's bytes use the enclosing A alphabet, for each entry in turn.
    let mut entries = BTreeMap::new();
    entries.insert(vec![0x61], Value::Int(1));
    entries.insert(vec![0x62], Value::String(vec![0x78]));
    let value = Value::Object(entries);
    let bytes = encode_to_bytes(&value);

    let expected: &[u8] = b"~\
        ?Shahaaaaah-:%\
        BuM\
        ?Shahaaaaha-:%\
        ?Bububububbb!M";
    assert_eq!(bytes, expected);
    assert_eq!(decode(&bytes), value);
}

#[test]
fn test_value_strings_spell_the_enclosing_alphabet() {
    // A string as an entry value is context, not a key: its Snew, digits,
    // and Sadd all use the A alphabet ('?', 'B'/'u'/'b', '!'), while the
    // key's digits and Sadd use the S alphabet.
    let mut entries = BTreeMap::new();
    entries.insert(vec![0x01], Value::String(vec![0x01]));
    let value = Value::Object(entries);
    let bytes = encode_to_bytes(&value);

    assert_eq!(bytes, b"~?Sh-:%?Bu!M");
    assert_eq!(decode(&bytes), value);
}
