use std::fs;
use std::path::PathBuf;
use storefront_ops::ShopConfig;

// ── Loading ──────────────────────────────────────────────────────

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ShopConfig::load_from(&dir.path().join("absent.toml"));
    assert_eq!(config, ShopConfig::default());
    assert_eq!(config.page_size, 10);
    assert_eq!(config.users_path(), PathBuf::from("data").join("users.txt"));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop.toml");
    fs::write(&path, "page_size = 5\norders_file = \"purchases.txt\"\n").unwrap();

    let config = ShopConfig::load_from(&path);
    assert_eq!(config.page_size, 5);
    assert_eq!(config.orders_file, "purchases.txt");
    assert_eq!(config.users_file, "users.txt");
}

#[test]
fn malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop.toml");
    fs::write(&path, "page_size = \"many\"").unwrap();
    assert_eq!(ShopConfig::load_from(&path), ShopConfig::default());
}

// ── Paths ────────────────────────────────────────────────────────

#[test]
fn data_dir_override() {
    let config = ShopConfig::default().with_data_dir("/tmp/shop");
    assert_eq!(config.products_path(), PathBuf::from("/tmp/shop/products.txt"));
    assert_eq!(ShopConfig::in_dir("x").orders_path(), PathBuf::from("x/orders.txt"));
}

#[test]
fn zero_page_size_is_one() {
    let config = ShopConfig {
        page_size: 0,
        ..ShopConfig::default()
    };
    assert_eq!(config.effective_page_size(), 1);
}
