//! Database integration for seeding.
//!
//! [`acquire`] opens the single session a run uses; the [`Seeder`] clears and
//! repopulates the tables inside one transaction on that session.

mod connection;
mod seeder;

pub use connection::acquire;
pub use seeder::{
    RunError, SeedError, SeedSummary, Seeder, clear_tables, populate, seed_customers,
    seed_products, seed_sales,
};
