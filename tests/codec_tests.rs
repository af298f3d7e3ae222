//! Tests for the key codec
//!
//! These tests verify:
//! - Encode/decode round-trips, including hostile key content
//! - Filesystem safety of encoded names
//! - Injectivity (distinct keys never collide)
//! - Typed key reconstruction via StorageKey

use shelfdb::codec::{decode_key, encode_key, StorageKey};
use shelfdb::ShelfError;

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_round_trip_simple() {
    let encoded = encode_key("user:1");
    assert_eq!(decode_key(&encoded).unwrap(), "user:1");
}

#[test]
fn test_round_trip_empty() {
    let encoded = encode_key("");
    assert_eq!(decode_key(&encoded).unwrap(), "");
}

#[test]
fn test_round_trip_path_separators() {
    // Keys containing separators must not be able to escape the table dir
    for key in ["a/b/c", "..", "../../etc/passwd", "C:\\windows\\system32"] {
        let encoded = encode_key(key);
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('\\'));
        assert_eq!(decode_key(&encoded).unwrap(), key);
    }
}

#[test]
fn test_round_trip_non_ascii() {
    for key in ["café", "日本語キー", "ключ", "🔑"] {
        let encoded = encode_key(key);
        assert!(encoded.is_ascii());
        assert_eq!(decode_key(&encoded).unwrap(), key);
    }
}

// =============================================================================
// Filesystem Safety Tests
// =============================================================================

#[test]
fn test_encoded_names_are_filesystem_safe() {
    let hostile = ["a b", "a\nb", "a\0b", "*?<>|\"", "./hidden"];
    for key in hostile {
        let encoded = encode_key(key);
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "unsafe character in encoding of {:?}: {}",
            key,
            encoded
        );
    }
}

#[test]
fn test_distinct_keys_distinct_encodings() {
    let keys = ["a", "b", "ab", "a/b", "a\\b", "A", ""];
    for (i, k1) in keys.iter().enumerate() {
        for k2 in &keys[i + 1..] {
            assert_ne!(encode_key(k1), encode_key(k2), "{} vs {}", k1, k2);
        }
    }
}

// =============================================================================
// Decode Failure Tests
// =============================================================================

#[test]
fn test_decode_rejects_invalid_base64() {
    let result = decode_key("not base64!!");
    assert!(matches!(result.unwrap_err(), ShelfError::KeyCodec(_)));
}

#[test]
fn test_decode_rejects_non_utf8_payload() {
    // Valid base64, but decodes to bytes that are not UTF-8
    let encoded = {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine as _;
        URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd])
    };
    let result = decode_key(&encoded);
    assert!(matches!(result.unwrap_err(), ShelfError::KeyCodec(_)));
}

// =============================================================================
// StorageKey Tests
// =============================================================================

#[test]
fn test_string_key_round_trip() {
    let key = "user:1".to_string();
    let canonical = key.as_key_str().into_owned();
    assert_eq!(String::from_key_str(&canonical).unwrap(), key);
}

#[test]
fn test_integer_key_round_trip() {
    let key: u64 = 42;
    let canonical = key.as_key_str().into_owned();
    assert_eq!(canonical, "42");
    assert_eq!(u64::from_key_str(&canonical).unwrap(), 42);

    let key: i32 = -7;
    assert_eq!(i32::from_key_str(&key.as_key_str()).unwrap(), -7);
}

#[test]
fn test_integer_key_rejects_garbage() {
    let result = u64::from_key_str("not a number");
    assert!(matches!(result.unwrap_err(), ShelfError::KeyCodec(_)));
}

#[test]
fn test_codec_contract_through_encoding() {
    // decode(encode(k)) == canonical form of k, for typed keys too
    let key: u32 = 1234;
    let encoded = encode_key(&key.as_key_str());
    let canonical = decode_key(&encoded).unwrap();
    assert_eq!(canonical, "1234");
    assert_eq!(u32::from_key_str(&canonical).unwrap(), key);
}
