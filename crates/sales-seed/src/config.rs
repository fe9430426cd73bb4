//! Configuration types for the seeding run.

use std::fmt;

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;
use time::Duration;

/// Number of customers inserted per run.
pub const NUM_CUSTOMERS: usize = 50;
/// Number of distinct products inserted per run.
pub const NUM_PRODUCTS: usize = 20;
/// Number of sales inserted per run.
pub const NUM_SALES: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid DB_PORT value {0:?}")]
    InvalidPort(String),
}

/// Connection parameters for the target database.
#[derive(Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl DbSettings {
    /// Reads `DB_NAME`, `DB_USER`, `DB_PASSWORD`, `DB_HOST` and `DB_PORT`
    /// from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let name = require("DB_NAME")?;
        let user = require("DB_USER")?;
        let password = require("DB_PASSWORD")?;
        let host = require("DB_HOST")?;
        let port_raw = require("DB_PORT")?;
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        Ok(Self {
            name,
            user,
            password,
            host,
            port,
        })
    }

    /// Connection options for a single Postgres session.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Fixed parameters of a seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Number of customers to insert.
    pub customer_count: usize,

    /// Number of distinct products to insert.
    pub product_count: usize,

    /// Number of sales to insert.
    pub sale_count: usize,

    /// Inclusive product price bounds, in cents.
    pub price_cents: (i64, i64),

    /// Inclusive sale quantity bounds.
    pub quantity: (i32, i32),

    /// How far back from now sale timestamps may fall.
    pub sale_window: Duration,

    /// Upper bound on sampling attempts for values that must be unique.
    pub max_attempts: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            customer_count: NUM_CUSTOMERS,
            product_count: NUM_PRODUCTS,
            sale_count: NUM_SALES,
            price_cents: (1_500, 35_000),
            quantity: (1, 5),
            sale_window: Duration::days(2 * 365),
            max_attempts: 10_000,
        }
    }
}

impl SeedConfig {
    pub fn with_customers(mut self, count: usize) -> Self {
        self.customer_count = count;
        self
    }

    pub fn with_products(mut self, count: usize) -> Self {
        self.product_count = count;
        self
    }

    pub fn with_sales(mut self, count: usize) -> Self {
        self.sale_count = count;
        self
    }
}
