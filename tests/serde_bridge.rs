//! Integration tests for the serde bridge.

use base64url_codec::Base64UrlBytes;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Token {
    kid: String,
    #[serde(with = "base64url_codec::serde_base64url")]
    signature: Vec<u8>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Envelope {
    nonce: Base64UrlBytes,
}

#[test]
fn field_serializes_as_base64url_string() {
    let token = Token {
        kid: "k1".into(),
        signature: vec![0xFF, 0xFE, 0xFD],
    };
    let value = serde_json::to_value(&token).unwrap();
    assert_eq!(value, json!({ "kid": "k1", "signature": "__79" }));

    let back: Token = serde_json::from_value(value).unwrap();
    assert_eq!(back, token);
}

#[test]
fn empty_field_fails_to_serialize() {
    let token = Token {
        kid: "k1".into(),
        signature: Vec::new(),
    };
    let err = serde_json::to_string(&token).unwrap_err();
    assert!(err.to_string().contains("cannot be null or empty"), "{err}");
}

#[test]
fn padded_field_fails_to_deserialize() {
    let err = serde_json::from_value::<Token>(json!({ "kid": "k1", "signature": "invalid==" }))
        .unwrap_err();
    assert!(
        err.to_string().contains("not a valid Base64Url string"),
        "{err}"
    );
}

#[test]
fn non_string_field_fails_to_deserialize() {
    assert!(serde_json::from_value::<Token>(json!({ "kid": "k1", "signature": [1, 2] })).is_err());
}

#[test]
fn newtype_round_trips() {
    let envelope = Envelope {
        nonce: Base64UrlBytes(b"hello".to_vec()),
    };
    let text = serde_json::to_string(&envelope).unwrap();
    assert_eq!(text, r#"{"nonce":"aGVsbG8"}"#);

    let back: Envelope = serde_json::from_str(&text).unwrap();
    assert_eq!(back, envelope);
    assert_eq!(&*back.nonce, b"hello");
}
