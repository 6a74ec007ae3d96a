//! Shop configuration.
//!
//! Loaded from an optional TOML file. Every key has a default, so a missing
//! or partial file still yields a usable configuration:
//!
//! ```toml
//! data_dir = "data"
//! users_file = "users.txt"
//! products_file = "products.txt"
//! orders_file = "orders.txt"
//! page_size = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_storage::DEFAULT_PAGE_SIZE;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Directory holding the three record files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_users_file")]
    pub users_file: String,
    #[serde(default = "default_products_file")]
    pub products_file: String,
    #[serde(default = "default_orders_file")]
    pub orders_file: String,
    /// Records per listed page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_users_file() -> String {
    "users.txt".to_string()
}

fn default_products_file() -> String {
    "products.txt".to_string()
}

fn default_orders_file() -> String {
    "orders.txt".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_file: default_users_file(),
            products_file: default_products_file(),
            orders_file: default_orders_file(),
            page_size: default_page_size(),
        }
    }
}

impl ShopConfig {
    /// Defaults rooted at `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Falls back to defaults when the file is absent or cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "no config file found, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ShopConfig>(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded shop config");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config file, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config file, using defaults");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(&self.orders_file)
    }

    /// Page size with zero mapped to one.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
