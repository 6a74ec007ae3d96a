use storefront_model::{CUSTOMER_SCHEMA, ORDER_SCHEMA, PRODUCT_SCHEMA, Record, USER_SCHEMA, keys};

// ── Required keys ────────────────────────────────────────────────

#[test]
fn customer_schema_extends_user_schema() {
    assert!(CUSTOMER_SCHEMA.required.starts_with(USER_SCHEMA.required));
    assert!(CUSTOMER_SCHEMA.is_required(keys::user::EMAIL));
    assert!(!USER_SCHEMA.is_required(keys::user::EMAIL));
}

#[test]
fn id_keys() {
    assert_eq!(USER_SCHEMA.id_key, "user_id");
    assert_eq!(PRODUCT_SCHEMA.id_key, "pro_id");
    assert_eq!(ORDER_SCHEMA.id_key, "order_id");
}

#[test]
fn missing_keys_lists_in_schema_order() {
    let record = Record::new().with(keys::order::USER_ID, "u_1");
    assert_eq!(
        ORDER_SCHEMA.missing_keys(&record),
        vec!["order_id", "pro_id", "order_time"]
    );
}

#[test]
fn check_passes_with_extra_keys() {
    let record = Record::new()
        .with(keys::order::ID, "o_00001")
        .with(keys::order::USER_ID, "u_1")
        .with(keys::order::PRODUCT_ID, "p_1")
        .with(keys::order::TIME, "01-01-2024_00:00:00")
        .with("note", "gift");
    assert!(ORDER_SCHEMA.check(&record).is_ok());
}

#[test]
fn check_reports_first_missing_key() {
    let err = PRODUCT_SCHEMA.check(&Record::new()).unwrap_err();
    assert_eq!(err.to_string(), r#"product record is missing field "pro_id""#);
}
