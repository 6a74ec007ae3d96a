use std::fs;
use storefront_cipher::{decode_password, is_encoded};
use storefront_ops::{BOOTSTRAP_ADMIN_NAME, BOOTSTRAP_ADMIN_PASSWORD, Shop, ShopConfig};
use storefront_model::Role;
use tempfile::TempDir;

fn shop() -> (TempDir, Shop) {
    let dir = tempfile::tempdir().unwrap();
    let shop = Shop::open(ShopConfig::in_dir(dir.path()));
    (dir, shop)
}

// ── Bootstrap admin ──────────────────────────────────────────────

#[test]
fn register_admin_once() {
    let (_dir, shop) = shop();
    let admin = shop.admins().register_admin().unwrap().unwrap();
    assert_eq!(admin.name, BOOTSTRAP_ADMIN_NAME);
    assert_eq!(admin.role, Role::Admin);
    assert!(is_encoded(&admin.password));
    assert_eq!(decode_password(&admin.password).unwrap(), BOOTSTRAP_ADMIN_PASSWORD);

    assert!(shop.admins().register_admin().unwrap().is_none());
    assert!(shop.admins().admin_exists().unwrap());
}

#[test]
fn existing_admin_in_any_case_blocks_bootstrap() {
    let (_dir, shop) = shop();
    fs::write(
        shop.config().users_path(),
        "{\"user_id\":\"u_0000000001\",\"user_name\":\"root_admin\",\"user_password\":\"x\",\"user_register_time\":\"01-01-2024_00:00:00\",\"user_role\":\"Admin\"}\n",
    )
    .unwrap();
    assert!(shop.admins().register_admin().unwrap().is_none());
}

// ── Login ────────────────────────────────────────────────────────

#[test]
fn login_with_encoded_password() {
    let (_dir, shop) = shop();
    shop.admins().register_admin().unwrap();
    let customer = shop
        .customers()
        .register_customer("alice_w", "secret1", "alice@example.com", "0412345678")
        .unwrap();

    let found = shop.identity().login("alice_w", "secret1").unwrap().unwrap();
    assert_eq!(found.user_id, customer.id.as_str());
    assert_eq!(found.name, "alice_w");
    assert_eq!(found.role, Role::Customer);

    let admin = shop.identity().login("admin", "admin123").unwrap().unwrap();
    assert!(admin.is_admin());
}

#[test]
fn login_rejects_wrong_password_and_unknown_user() {
    let (_dir, shop) = shop();
    shop.customers()
        .register_customer("alice_w", "secret1", "alice@example.com", "0412345678")
        .unwrap();
    assert!(shop.identity().login("alice_w", "secret2").unwrap().is_none());
    assert!(shop.identity().login("nobody", "secret1").unwrap().is_none());
    assert!(shop.identity().login("", "").unwrap().is_none());
}

#[test]
fn login_is_case_sensitive_for_encoded_accounts() {
    let (_dir, shop) = shop();
    shop.customers()
        .register_customer("alice_w", "secret1", "alice@example.com", "0412345678")
        .unwrap();
    assert!(shop.identity().login("ALICE_W", "secret1").unwrap().is_none());
}

#[test]
fn login_on_missing_users_file() {
    let (_dir, shop) = shop();
    assert!(shop.identity().login("admin", "admin123").unwrap().is_none());
}

#[test]
fn legacy_admin_password_falls_back_to_bootstrap() {
    let (_dir, shop) = shop();
    fs::write(
        shop.config().users_path(),
        "{\"user_id\":\"u_0000000001\",\"user_name\":\"Admin\",\"user_password\":\"admin123\",\"user_register_time\":\"01-01-2024_00:00:00\",\"user_role\":\"admin\"}\n",
    )
    .unwrap();

    let admin = shop.identity().login("admin", "admin123").unwrap().unwrap();
    assert_eq!(admin.name, "Admin");
    assert!(shop.identity().login("admin", "wrong123").unwrap().is_none());
}

#[test]
fn legacy_admin_with_malformed_fields_still_logs_in() {
    let (_dir, shop) = shop();
    fs::write(
        shop.config().users_path(),
        "{\"user_id\":\"u_0000000001\",\"user_name\":\"admin\",\"user_password\":\"admin123\",\"user_register_time\":\"2024-01-01 10:00:00\",\"user_role\":\"admin\"}\n",
    )
    .unwrap();

    assert!(shop.admins().admin_exists().unwrap());
    let admin = shop.identity().login("admin", "admin123").unwrap().unwrap();
    assert_eq!(admin.user_id, "u_0000000001");
    assert!(admin.is_admin());
}

#[test]
fn legacy_fallback_never_applies_to_other_accounts() {
    let (_dir, shop) = shop();
    fs::write(
        shop.config().users_path(),
        "{\"user_id\":\"u_0000000002\",\"user_name\":\"bobby\",\"user_password\":\"admin123\",\"user_register_time\":\"01-01-2024_00:00:00\",\"user_role\":\"customer\",\"user_email\":\"b@c.d\",\"user_mobile\":\"0412345678\"}\n",
    )
    .unwrap();

    assert!(shop.identity().login("bobby", "admin123").unwrap().is_none());
}

// ── Ids and names ────────────────────────────────────────────────

#[test]
fn username_exists_sees_registered_names() {
    let (_dir, shop) = shop();
    assert!(!shop.identity().username_exists("alice_w").unwrap());
    shop.customers()
        .register_customer("alice_w", "secret1", "alice@example.com", "0412345678")
        .unwrap();
    assert!(shop.identity().username_exists("alice_w").unwrap());
    assert!(!shop.identity().username_exists("Alice_W").unwrap());
}

#[test]
fn generated_user_ids_are_well_formed() {
    let (_dir, shop) = shop();
    let id = shop.identity().generate_user_id().unwrap();
    assert!(id.as_str().starts_with("u_"));
    assert_eq!(id.as_str().len(), 12);
}
