//! The password encoding is obfuscation only: these tests pin down the
//! format, and `plaintext_is_recoverable_without_a_key` documents that it
//! provides no confidentiality.

use storefront_cipher::{
    CipherError, PREFIX, SUFFIX, decode_password, encode_password, encoded_len, is_encoded,
};

// ── Encode ───────────────────────────────────────────────────────

#[test]
fn encode_pw1234_has_expected_shape() {
    let enc = encode_password("pw1234").unwrap();
    assert_eq!(enc.chars().count(), 2 + 3 * 6 + 2);
    assert_eq!(enc.len(), 22);
    assert!(enc.starts_with("^^"));
    assert!(enc.ends_with("$$"));
    assert_eq!(decode_password(&enc).unwrap(), "pw1234");
}

#[test]
fn encode_empty_is_not_applicable() {
    assert_eq!(encode_password(""), None);
}

#[test]
fn encode_single_char() {
    let enc = encode_password("x").unwrap();
    assert_eq!(enc.len(), encoded_len(1));
    assert_eq!(decode_password(&enc).unwrap(), "x");
}

#[test]
fn encode_twenty_chars() {
    let plain = "abcdefghij0123456789";
    let enc = encode_password(plain).unwrap();
    assert_eq!(enc.len(), encoded_len(20));
    assert_eq!(decode_password(&enc).unwrap(), plain);
}

#[test]
fn encode_is_randomized() {
    let a = encode_password("admin123").unwrap();
    let b = encode_password("admin123").unwrap();
    // 16 random alphanumerics colliding is practically impossible.
    assert_ne!(a, b);
    assert_eq!(decode_password(&a).unwrap(), decode_password(&b).unwrap());
}

#[test]
fn encode_non_ascii_roundtrips() {
    let plain = "pässwörd✓1";
    let enc = encode_password(plain).unwrap();
    assert_eq!(enc.chars().count(), encoded_len(plain.chars().count()));
    assert_eq!(decode_password(&enc).unwrap(), plain);
}

#[test]
fn encode_plaintext_containing_markers() {
    let plain = "^^$$^$";
    let enc = encode_password(plain).unwrap();
    assert_eq!(decode_password(&enc).unwrap(), plain);
}

#[test]
fn plaintext_is_recoverable_without_a_key() {
    let enc = encode_password("secret9").unwrap();
    let body: String = enc[PREFIX.len()..enc.len() - SUFFIX.len()]
        .chars()
        .skip(2)
        .step_by(3)
        .collect();
    assert_eq!(body, "secret9");
}

// ── Decode errors ────────────────────────────────────────────────

#[test]
fn decode_too_short() {
    assert_eq!(decode_password(""), Err(CipherError::TooShort { len: 0 }));
    assert_eq!(decode_password("^^$$"), Err(CipherError::TooShort { len: 4 }));
    assert_eq!(decode_password("^^ab$$"), Err(CipherError::TooShort { len: 6 }));
}

#[test]
fn decode_missing_prefix() {
    assert_eq!(decode_password("xxabc$$"), Err(CipherError::MissingPrefix));
}

#[test]
fn decode_missing_suffix() {
    assert_eq!(decode_password("^^abcxx"), Err(CipherError::MissingSuffix));
}

#[test]
fn decode_misaligned_body() {
    assert_eq!(
        decode_password("^^abcd$$"),
        Err(CipherError::MisalignedBody { len: 4 })
    );
}

#[test]
fn decode_legacy_plaintext_is_format_error() {
    assert!(decode_password("admin123").is_err());
    assert!(!is_encoded("admin123"));
}

#[test]
fn decode_well_formed_value() {
    assert_eq!(decode_password("^^XYaQRb$$").unwrap(), "ab");
    assert!(is_encoded("^^XYaQRb$$"));
}

// ── Error display ────────────────────────────────────────────────

#[test]
fn error_display_mentions_lengths() {
    let msg = CipherError::MisalignedBody { len: 4 }.to_string();
    assert!(msg.contains('4'));
    let msg = CipherError::TooShort { len: 2 }.to_string();
    assert!(msg.contains("too short"));
}

#[test]
fn error_display_markers() {
    assert!(CipherError::MissingPrefix.to_string().contains("leading"));
    assert!(CipherError::MissingSuffix.to_string().contains("trailing"));
}
