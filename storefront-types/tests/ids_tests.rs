use rand::SeedableRng;
use rand::rngs::StdRng;
use storefront_types::{OrderId, ProductId, UserId};
use std::collections::HashSet;
use std::str::FromStr;

// ── Generation ───────────────────────────────────────────────────

#[test]
fn user_id_generate_has_prefix_and_ten_digits() {
    let id = UserId::generate();
    let s = id.as_str();
    assert!(s.starts_with("u_"));
    assert_eq!(s.len(), 2 + 10);
    assert!(s[2..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn order_id_generate_has_prefix_and_five_digits() {
    let id = OrderId::generate();
    let s = id.as_str();
    assert!(s.starts_with("o_"));
    assert_eq!(s.len(), 2 + 5);
    assert!(s[2..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn generate_with_seeded_rng_is_deterministic() {
    let a = UserId::generate_with(&mut StdRng::seed_from_u64(7));
    let b = UserId::generate_with(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn generated_user_ids_rarely_collide() {
    let ids: HashSet<UserId> = (0..200).map(|_| UserId::generate()).collect();
    assert!(ids.len() > 190);
}

#[test]
fn from_number_zero_pads() {
    assert_eq!(UserId::from_number(2).as_str(), "u_0000000002");
    assert_eq!(OrderId::from_number(42).as_str(), "o_00042");
    assert_eq!(ProductId::from_number(1).as_str(), "p_0001");
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_accepts_prefixed_values() {
    assert!(UserId::parse("u_1712345678901").is_ok());
    assert!(ProductId::parse("p_dummy").is_ok());
    assert!(OrderId::from_str("o_00001").is_ok());
}

#[test]
fn parse_rejects_wrong_prefix() {
    assert!(UserId::parse("p_0001").is_err());
    assert!(OrderId::parse("u_0000000001").is_err());
}

#[test]
fn parse_rejects_empty_suffix_and_whitespace() {
    assert!(UserId::parse("u_").is_err());
    assert!(UserId::parse("").is_err());
    assert!(ProductId::parse("p_12 34").is_err());
}

#[test]
fn parse_error_names_kind() {
    let err = ProductId::parse("nope").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("product"));
    assert!(msg.contains("nope"));
}

#[test]
fn display_matches_as_str() {
    let id = OrderId::from_number(9);
    assert_eq!(id.to_string(), id.as_str());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serde_is_a_plain_string() {
    let id = UserId::from_number(5);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"u_0000000005\"");
    let back: UserId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn serde_rejects_malformed_id() {
    let res: Result<UserId, _> = serde_json::from_str("\"x_1\"");
    assert!(res.is_err());
}
