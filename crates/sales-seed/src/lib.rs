//! Seed data for the customers, products, and sales tables.
//!
//! A run opens one Postgres session, truncates the three tables, and inserts
//! synthetic customers, uniquely named products, and sales linking the two,
//! all inside a single transaction.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sales_seed::prelude::*;
//!
//! let settings = DbSettings::from_env()?;
//! let summary = populate(
//!     &settings.connect_options(),
//!     SeedConfig::default(),
//!     &mut rand::thread_rng(),
//! )
//! .await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{
        ConfigError, DbSettings, NUM_CUSTOMERS, NUM_PRODUCTS, NUM_SALES, SeedConfig,
    };
    pub use crate::db::{RunError, SeedError, SeedSummary, Seeder, acquire, populate};
    pub use crate::generators::{
        CustomerGenerator, GenerationError, ProductGenerator, SaleGenerator,
    };
}
