// tests/key_tests.rs
use aes_cbc_helper::consts::{IV_LEN, KEY_LEN, KEY_MATERIAL_LEN};
use aes_cbc_helper::error::CoreError;
use aes_cbc_helper::key_ops::{key_representations, KeyMaterial};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

fn sequential_material() -> KeyMaterial {
    let mut bytes = [0u8; KEY_MATERIAL_LEN];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }
    KeyMaterial::from_bytes(bytes)
}

#[test]
fn test_generate_is_random_and_48_bytes() {
    let a = KeyMaterial::generate();
    let b = KeyMaterial::generate();
    assert_eq!(a.as_bytes().len(), KEY_MATERIAL_LEN);
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn test_split_is_iv_then_key() {
    let material = sequential_material();
    assert_eq!(material.iv().len(), IV_LEN);
    assert_eq!(material.key().len(), KEY_LEN);
    assert_eq!(material.iv()[0], 0);
    assert_eq!(material.iv()[15], 15);
    assert_eq!(material.key()[0], 16);
    assert_eq!(material.key()[31], 47);
}

#[test]
fn test_base64_transport_roundtrip() {
    let material = KeyMaterial::generate();
    let encoded = material.to_base64();
    assert_eq!(encoded.len(), 64); // 48 bytes → 64 chars, no padding needed

    let decoded = KeyMaterial::from_base64(&encoded).unwrap();
    assert_eq!(material.as_bytes(), decoded.as_bytes());
    assert_eq!(material.fingerprint(), decoded.fingerprint());
}

#[test]
fn test_from_base64_rejects_wrong_length() {
    let short = STANDARD.encode([7u8; 32]);
    let result = KeyMaterial::from_base64(&short);
    assert!(matches!(
        result,
        Err(CoreError::InvalidKeyMaterial {
            expected: 48,
            actual: 32
        })
    ));
}

#[test]
fn test_from_base64_rejects_garbage() {
    let result = KeyMaterial::from_base64("not base64 at all!");
    assert!(matches!(result, Err(CoreError::Base64(_))));
}

#[test]
fn test_debug_does_not_leak_key_bytes() {
    let material = KeyMaterial::from_bytes([0xAB; KEY_MATERIAL_LEN]);
    let shown = format!("{material:?}");
    assert!(shown.contains(&material.fingerprint()));
    assert!(!shown.contains("171, 171"));
    assert!(!shown.contains(&key_representations(&material).hex));
    assert!(!shown.contains(&material.to_base64()));
}

#[test]
fn test_fingerprint_is_short_hex() {
    let fp = sequential_material().fingerprint();
    assert_eq!(fp.len(), 16);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_key_representations_are_correct_and_consistent() {
    let material = KeyMaterial::from_bytes([0x42; KEY_MATERIAL_LEN]);
    let repr = key_representations(&material);

    assert_eq!(repr.hex, "42".repeat(48));
    assert_eq!(repr.base64, "QkJC".repeat(16));
    assert_eq!(repr.base64url_no_pad, "QkJC".repeat(16));
    assert_eq!(repr.base64, material.to_base64());
}

#[test]
fn test_to_hex_is_lowercase_and_matches_bytes() {
    let mut bytes = [0u8; KEY_MATERIAL_LEN];
    bytes[0] = 0xAB;
    bytes[47] = 0x0F;
    let material = KeyMaterial::from_bytes(bytes);

    let encoded = material.to_hex();
    assert_eq!(encoded.len(), 96);
    assert!(encoded.starts_with("ab00"));
    assert!(encoded.ends_with("000f"));
    assert_eq!(encoded, key_representations(&material).hex);
}
