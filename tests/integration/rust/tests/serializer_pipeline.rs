//! Serializer <-> Notation Integration Tests
//!
//! Drives host values through the whole stack: bridge to a machine value,
//! encode to bytes, decode on a fresh machine, bridge back to the host.

use core_types::Value;
use integration_tests::{decode, encode_to_bytes};
use serde::{Deserialize, Serialize};
use serializer::{from_value, to_value};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Account {
    #[serde(rename = "fullName")]
    name: String,
    age: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    email: Option<String>,
    active: bool,
    scores: Vec<u32>,
}

fn pipeline<T>(host: &T) -> T
where
    T: Serialize + serde::de::DeserializeOwned,
{
    let value = to_value(host).expect("bridge to value");
    let bytes = encode_to_bytes(&value);
    let decoded = decode(&bytes);
    assert_eq!(decoded, value);
    from_value(decoded).expect("bridge from value")
}

#[test]
fn test_struct_through_the_full_stack() {
    let host = Account {
        name: "Tanaka Taro".to_string(),
        age: 25,
        email: None,
        active: true,
        scores: vec![70, 80, 90],
    };
    assert_eq!(pipeline(&host), host);
}

#[test]
fn test_omitted_field_is_absent_from_the_wire() {
    let host = Account {
        name: "x".to_string(),
        age: 0,
        email: None,
        active: false,
        scores: vec![],
    };
    let value = to_value(&host).unwrap();
    let obj = value.as_object().unwrap();
    assert!(!obj.contains_key(&b"email"[..].to_vec()));
}

#[test]
fn test_enum_through_the_full_stack() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Event {
        Started,
        Progress { done: u64, total: u64 },
        Failed(String),
    }

    for event in [
        Event::Started,
        Event::Progress { done: 3, total: 10 },
        Event::Failed("disk".to_string()),
    ] {
        assert_eq!(pipeline(&event), event);
    }
}

#[test]
fn test_untyped_document_through_the_full_stack() {
    let host = serde_json::json!({
        "records": [
            { "id": 1, "label": "first" },
            { "id": 2, "label": null },
        ],
        "count": 2,
    });
    assert_eq!(pipeline(&host), host);
}

#[test]
fn test_decoded_wire_document_into_typed_host() {
    // A document arriving as bytes, decoded and bridged into a struct.
    let value = to_value(&serde_json::json!({
        "fullName": "Sato",
        "age": 30,
        "active": false,
        "scores": [],
        "ignored": "extra keys are fine",
    }))
    .unwrap();
    let bytes = encode_to_bytes(&value);

    let account: Account = from_value(decode(&bytes)).unwrap();
    assert_eq!(
        account,
        Account {
            name: "Sato".to_string(),
            age: 30,
            email: None,
            active: false,
            scores: vec![],
        }
    );
}

#[test]
fn test_nil_round_trip_at_every_layer() {
    let value = to_value(&Option::<i32>::None).unwrap();
    assert_eq!(value, Value::Nil);
    let bytes = encode_to_bytes(&value);
    assert_eq!(bytes, b".");
    let back: Option<i32> = from_value(decode(&bytes)).unwrap();
    assert_eq!(back, None);
}
