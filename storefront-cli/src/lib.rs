//! Command definitions and handlers for the `storefront` binary.
//!
//! Handlers return the lines to print instead of writing to stdout, so the
//! whole command surface can be driven from tests.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::PathBuf;
use storefront_model::{FixedPoint, Order, Product, User};
use storefront_ops::{DEFAULT_TOP_SELLERS, OrderScope, ProfileField, Shop, ShopConfig};
use storefront_storage::Page;
use storefront_types::{OrderId, ProductId, RecordTime, UserId};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Manage storefront users, products and orders kept in JSON-lines files")]
pub struct Cli {
    /// Directory holding the record files
    #[arg(long, global = true, env = "STOREFRONT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the bootstrap admin account if no admin exists
    Init {
        /// Also replace the catalogue with the sample product
        #[arg(long)]
        sample_products: bool,
    },
    /// Register a customer account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        mobile: String,
    },
    /// Check a user name and password
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },
    /// Change one profile field of a customer
    UpdateProfile {
        #[arg(long)]
        id: UserId,
        /// user_name, user_password, user_email or user_mobile
        #[arg(long)]
        field: ProfileField,
        #[arg(long)]
        value: String,
    },
    /// List customers, ten per page
    Customers {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    DeleteCustomer {
        id: UserId,
    },
    /// List products, or search them by name
    Products {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Case-insensitive name fragment; lists every match
        #[arg(long)]
        search: Option<String>,
    },
    AddProduct {
        #[arg(long)]
        id: ProductId,
        #[arg(long)]
        model: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: FixedPoint,
        #[arg(long)]
        raw_price: FixedPoint,
        /// Discount in percent
        #[arg(long, default_value = "0")]
        discount: FixedPoint,
        #[arg(long, default_value_t = 0)]
        likes: u64,
    },
    DeleteProduct {
        id: ProductId,
    },
    /// Record a purchase
    Order {
        #[arg(long)]
        customer: UserId,
        #[arg(long)]
        product: ProductId,
        /// dd-mm-yyyy_HH:MM:SS, defaults to now
        #[arg(long)]
        time: Option<RecordTime>,
    },
    /// List orders for everyone or one customer
    Orders {
        #[arg(long)]
        customer: Option<UserId>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    DeleteOrder {
        id: OrderId,
    },
    /// Replace all orders with random test data
    GenerateOrders {
        /// Seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print catalogue and sales aggregates
    Stats {
        /// Restrict monthly consumption to one customer
        #[arg(long)]
        customer: Option<UserId>,
        #[arg(long, default_value_t = DEFAULT_TOP_SELLERS)]
        top: usize,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete all customers, products and orders (admins are kept)
    Reset {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatsReport {
    pub categories: Vec<CategoryCount>,
    pub discounts: DiscountReport,
    pub likes_by_category: Vec<CategoryLikes>,
    pub discount_likes: Vec<(f64, u64)>,
    /// January first.
    pub monthly_consumption: Vec<f64>,
    pub top_sellers: Vec<TopSeller>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub products: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DiscountReport {
    pub below_30: usize,
    pub from_30_to_60: usize,
    pub above_60: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryLikes {
    pub category: String,
    pub likes: u64,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TopSeller {
    pub product: String,
    pub orders: usize,
}

/// Config file (if any) with the data directory flag applied on top.
pub fn load_config(cli: &Cli) -> ShopConfig {
    let config = match &cli.config {
        Some(path) => ShopConfig::load_from(path),
        None => ShopConfig::default(),
    };
    match &cli.data_dir {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    }
}

/// Opens the shop described by `cli` and runs its command.
pub fn run(cli: &Cli) -> Result<Vec<String>> {
    let shop = Shop::open(load_config(cli));
    debug!(data_dir = %shop.config().data_dir.display(), "opened shop");
    execute(&shop, &cli.command)
}

pub fn execute(shop: &Shop, command: &Command) -> Result<Vec<String>> {
    let mut out = Vec::new();
    match command {
        Command::Init { sample_products } => {
            match shop.admins().register_admin()? {
                Some(admin) => out.push(format!("registered admin {} ({})", admin.name, admin.id)),
                None => out.push("admin account already exists".to_string()),
            }
            if *sample_products {
                let count = shop.products().load_sample_catalogue()?;
                out.push(format!("loaded {count} sample product(s)"));
            }
        }
        Command::Register {
            name,
            password,
            email,
            mobile,
        } => {
            let customer = shop.customers().register_customer(name, password, email, mobile)?;
            out.push(format!("registered customer {} ({})", customer.name, customer.id));
        }
        Command::Login { name, password } => match shop.identity().login(name, password)? {
            Some(session) => out.push(format!(
                "logged in as {} ({}, {})",
                session.name, session.user_id, session.role
            )),
            None => bail!("invalid user name or password"),
        },
        Command::UpdateProfile { id, field, value } => {
            shop.customers().update_profile(id, *field, value)?;
            out.push(format!("updated {field} of {id}"));
        }
        Command::Customers { page } => {
            let page = shop.customers().list_customers(*page)?;
            push_page(&mut out, &page, "customer(s)", format_user);
        }
        Command::DeleteCustomer { id } => {
            shop.customers().delete_customer(id)?;
            out.push(format!("deleted customer {id}"));
        }
        Command::Products { page, search } => match search {
            Some(keyword) => {
                let matches = shop.products().search(keyword)?;
                out.push(format!("{} product(s) matching {keyword:?}", matches.len()));
                out.extend(matches.iter().map(format_product));
            }
            None => {
                let page = shop.products().list_products(*page)?;
                push_page(&mut out, &page, "product(s)", format_product);
            }
        },
        Command::AddProduct {
            id,
            model,
            category,
            name,
            price,
            raw_price,
            discount,
            likes,
        } => {
            let product = Product {
                id: id.clone(),
                model: model.clone(),
                category: category.clone(),
                name: name.clone(),
                current_price: *price,
                raw_price: *raw_price,
                discount: *discount,
                likes_count: *likes,
            };
            shop.products().add_product(&product)?;
            out.push(format!("added product {id}"));
        }
        Command::DeleteProduct { id } => {
            shop.products().delete_product(id)?;
            out.push(format!("deleted product {id}"));
        }
        Command::Order {
            customer,
            product,
            time,
        } => {
            let order = shop.orders().create_order(customer, product, *time)?;
            out.push(format!("created order {} at {}", order.id, order.time));
        }
        Command::Orders { customer, page } => {
            let scope = scope_for(customer.as_ref());
            let page = shop.orders().list_orders(&scope, *page)?;
            push_page(&mut out, &page, "order(s)", format_order);
        }
        Command::DeleteOrder { id } => {
            shop.orders().delete_order(id)?;
            out.push(format!("deleted order {id}"));
        }
        Command::GenerateOrders { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let count = shop
                .orders()
                .generate_test_orders(&mut rng)
                .with_context(|| format!("generating test orders in {}", shop.config().orders_path().display()))?;
            out.push(format!("generated {count} test orders"));
        }
        Command::Stats { customer, top, json } => {
            let report = stats_report(shop, customer.as_ref(), *top).context("computing statistics")?;
            if *json {
                out.push(serde_json::to_string_pretty(&report).context("serializing statistics")?);
            } else {
                push_stats(&mut out, &report);
            }
        }
        Command::Reset { yes } => {
            if !*yes {
                bail!("reset deletes every customer, product and order; pass --yes to confirm");
            }
            let summary = shop
                .reset()
                .with_context(|| format!("resetting shop data in {}", shop.config().data_dir.display()))?;
            out.push(format!("reset complete, {} admin account(s) kept", summary.admins_kept));
        }
    }
    Ok(out)
}

pub fn stats_report(shop: &Shop, customer: Option<&UserId>, top: usize) -> Result<StatsReport> {
    let stats = shop.stats();
    let buckets = stats.discount_buckets()?;
    Ok(StatsReport {
        categories: stats
            .category_counts()?
            .into_iter()
            .map(|(category, products)| CategoryCount { category, products })
            .collect(),
        discounts: DiscountReport {
            below_30: buckets.below_30,
            from_30_to_60: buckets.from_30_to_60,
            above_60: buckets.above_60,
        },
        likes_by_category: stats
            .likes_by_category()?
            .into_iter()
            .map(|(category, likes)| CategoryLikes { category, likes })
            .collect(),
        discount_likes: stats
            .discount_likes_points()?
            .into_iter()
            .map(|(discount, likes)| (discount.to_f64(), likes))
            .collect(),
        monthly_consumption: stats
            .monthly_consumption(&scope_for(customer))?
            .iter()
            .map(|total| total.to_f64())
            .collect(),
        top_sellers: stats
            .top_sellers(top)?
            .into_iter()
            .map(|seller| TopSeller {
                product: seller.label,
                orders: seller.orders,
            })
            .collect(),
    })
}

fn scope_for(customer: Option<&UserId>) -> OrderScope {
    match customer {
        Some(id) => OrderScope::Customer(id.clone()),
        None => OrderScope::All,
    }
}

fn push_page<T>(out: &mut Vec<String>, page: &Page<T>, noun: &str, format: impl Fn(&T) -> String) {
    out.push(format!(
        "page {} of {} ({} {noun})",
        page.page, page.total_pages, page.total_count
    ));
    out.extend(page.items.iter().map(format));
}

fn push_stats(out: &mut Vec<String>, report: &StatsReport) {
    out.push("products per category:".to_string());
    for c in &report.categories {
        out.push(format!("  {:<20} {}", c.category, c.products));
    }
    out.push(format!(
        "discounts: <30: {}  30-60: {}  >60: {}",
        report.discounts.below_30, report.discounts.from_30_to_60, report.discounts.above_60
    ));
    out.push("likes per category:".to_string());
    for c in &report.likes_by_category {
        out.push(format!("  {:<20} {}", c.category, c.likes));
    }
    out.push("monthly consumption:".to_string());
    for (month, total) in report.monthly_consumption.iter().enumerate() {
        out.push(format!("  {:>2}  {total:.2}", month + 1));
    }
    out.push("top sellers:".to_string());
    for seller in &report.top_sellers {
        out.push(format!("  {:<20} {}", seller.product, seller.orders));
    }
}

fn format_user(user: &User) -> String {
    format!(
        "{}  {}  {}  {}  registered {}",
        user.id,
        user.name,
        user.email.as_deref().unwrap_or("-"),
        user.mobile.as_deref().unwrap_or("-"),
        user.register_time
    )
}

fn format_product(product: &Product) -> String {
    format!(
        "{}  {}  [{} / {}]  {} (was {}, -{}%)  {} likes",
        product.id,
        product.name,
        product.category,
        product.model,
        product.current_price,
        product.raw_price,
        product.discount,
        product.likes_count
    )
}

fn format_order(order: &Order) -> String {
    format!(
        "{}  {}  {}  {}",
        order.id, order.user_id, order.product_id, order.time
    )
}
