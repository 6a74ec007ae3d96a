use clap::Parser;
use pretty_assertions::assert_eq;
use std::path::Path;
use storefront_cli::{Cli, Command, load_config, run};

fn cli(dir: &Path, args: &[&str]) -> Cli {
    let mut argv = vec!["storefront", "--data-dir", dir.to_str().unwrap()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn exec(dir: &Path, args: &[&str]) -> anyhow::Result<Vec<String>> {
    run(&cli(dir, args))
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_global_flags_after_subcommand() {
    let parsed = Cli::try_parse_from(["storefront", "customers", "--page", "3", "--verbose"]).unwrap();
    assert!(parsed.verbose);
    assert!(matches!(parsed.command, Command::Customers { page: 3 }));
}

#[test]
fn rejects_malformed_ids_and_prices() {
    assert!(Cli::try_parse_from(["storefront", "delete-customer", "x_123"]).is_err());
    assert!(
        Cli::try_parse_from([
            "storefront", "add-product", "--id", "p_0001", "--model", "m", "--category", "c", "--name", "n",
            "--price", "cheap", "--raw-price", "1",
        ])
        .is_err()
    );
    assert!(
        Cli::try_parse_from([
            "storefront", "update-profile", "--id", "u_0000000002", "--field", "user_role", "--value", "admin",
        ])
        .is_err()
    );
}

#[test]
fn data_dir_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("shop.toml");
    std::fs::write(&config_path, "data_dir = \"elsewhere\"\npage_size = 4\n").unwrap();

    let parsed = Cli::try_parse_from([
        "storefront",
        "--config",
        config_path.to_str().unwrap(),
        "--data-dir",
        "here",
        "customers",
    ])
    .unwrap();
    let config = load_config(&parsed);
    assert_eq!(config.data_dir, Path::new("here"));
    assert_eq!(config.page_size, 4);
}

// ── Accounts ─────────────────────────────────────────────────────

#[test]
fn init_register_and_login() {
    let dir = tempfile::tempdir().unwrap();
    let out = exec(dir.path(), &["init"]).unwrap();
    assert!(out[0].starts_with("registered admin admin (u_"));
    assert_eq!(exec(dir.path(), &["init"]).unwrap(), vec!["admin account already exists"]);

    let out = exec(
        dir.path(),
        &[
            "register", "--name", "alice_w", "--password", "secret1", "--email", "a@b.c", "--mobile", "0412345678",
        ],
    )
    .unwrap();
    assert!(out[0].starts_with("registered customer alice_w"));

    let out = exec(dir.path(), &["login", "--name", "alice_w", "--password", "secret1"]).unwrap();
    assert!(out[0].starts_with("logged in as alice_w"));
    assert!(out[0].ends_with(", customer)"));

    let err = exec(dir.path(), &["login", "--name", "alice_w", "--password", "nope123"]).unwrap_err();
    assert_eq!(err.to_string(), "invalid user name or password");
}

#[test]
fn register_validation_error_surfaces() {
    let dir = tempfile::tempdir().unwrap();
    let err = exec(
        dir.path(),
        &["register", "--name", "al", "--password", "secret1", "--email", "a@b.c", "--mobile", "0412345678"],
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("invalid user_name"));
}

#[test]
fn customers_listing_header() {
    let dir = tempfile::tempdir().unwrap();
    exec(dir.path(), &["init"]).unwrap();
    let out = exec(dir.path(), &["customers"]).unwrap();
    assert_eq!(out, vec!["page 1 of 1 (0 customer(s))"]);
}

// ── Catalogue and orders ─────────────────────────────────────────

#[test]
fn add_search_and_order_products() {
    let dir = tempfile::tempdir().unwrap();
    exec(
        dir.path(),
        &[
            "add-product", "--id", "p_0007", "--model", "TR-1", "--category", "Shoes", "--name", "Trail Runner",
            "--price", "59.9", "--raw-price", "79.90", "--discount", "25", "--likes", "4",
        ],
    )
    .unwrap();

    let out = exec(dir.path(), &["products", "--search", "trail"]).unwrap();
    assert_eq!(
        out,
        vec![
            "1 product(s) matching \"trail\"".to_string(),
            "p_0007  Trail Runner  [Shoes / TR-1]  59.90 (was 79.90, -25.00%)  4 likes".to_string(),
        ]
    );

    let out = exec(
        dir.path(),
        &["order", "--customer", "u_0000000002", "--product", "p_0007", "--time", "14-02-2024_10:30:00"],
    )
    .unwrap();
    assert!(out[0].ends_with(" at 14-02-2024_10:30:00"));

    let out = exec(dir.path(), &["orders", "--customer", "u_0000000002"]).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out[1].ends_with("u_0000000002  p_0007  14-02-2024_10:30:00"));
}

#[test]
fn stats_json_report() {
    let dir = tempfile::tempdir().unwrap();
    exec(dir.path(), &["init", "--sample-products"]).unwrap();
    exec(dir.path(), &["order", "--customer", "u_0000000002", "--product", "p_0001", "--time", "01-03-2024_09:00:00"]).unwrap();

    let out = exec(dir.path(), &["stats", "--json"]).unwrap();
    let report: serde_json::Value = serde_json::from_str(&out[0]).unwrap();
    assert_eq!(report["categories"][0]["category"], "Electronics");
    assert_eq!(report["top_sellers"][0]["product"], "Smartphone");
    assert_eq!(report["monthly_consumption"][2], 699.99);
    assert_eq!(report["discounts"]["below_30"], 1);
}

#[test]
fn stats_overflow_reports_context() {
    let dir = tempfile::tempdir().unwrap();
    exec(
        dir.path(),
        &[
            "add-product", "--id", "p_0001", "--model", "Y-1", "--category", "Boats", "--name", "Yacht",
            "--price", "70000000000000000000000000000", "--raw-price", "1",
        ],
    )
    .unwrap();
    for customer in ["u_0000000002", "u_0000000003"] {
        exec(dir.path(), &["order", "--customer", customer, "--product", "p_0001", "--time", "01-04-2024_09:00:00"])
            .unwrap();
    }

    let err = exec(dir.path(), &["stats"]).unwrap_err();
    assert_eq!(err.to_string(), "computing statistics");
    assert_eq!(err.root_cause().to_string(), "monthly consumption total is too large to represent");
}

#[test]
fn generate_orders_is_reproducible() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let first = exec(a.path(), &["generate-orders", "--seed", "9"]).unwrap();
    let second = exec(b.path(), &["generate-orders", "--seed", "9"]).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        std::fs::read_to_string(a.path().join("orders.txt")).unwrap(),
        std::fs::read_to_string(b.path().join("orders.txt")).unwrap()
    );
}

#[test]
fn reset_requires_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    exec(dir.path(), &["init", "--sample-products"]).unwrap();
    assert!(exec(dir.path(), &["reset"]).is_err());
    assert_eq!(exec(dir.path(), &["products"]).unwrap()[0], "page 1 of 1 (1 product(s))");

    let out = exec(dir.path(), &["reset", "--yes"]).unwrap();
    assert_eq!(out, vec!["reset complete, 1 admin account(s) kept"]);
    assert_eq!(exec(dir.path(), &["products"]).unwrap(), vec!["page 1 of 1 (0 product(s))"]);
}
