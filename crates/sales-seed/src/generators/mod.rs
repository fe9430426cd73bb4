//! Entity generators for seed data.
//!
//! Generators are pure: they draw from the supplied RNG and never touch the
//! database.
//! - [`CustomerGenerator`]: customers with run-unique emails
//! - [`ProductGenerator`]: products with distinct descriptor + noun names
//! - [`SaleGenerator`]: sales linking existing customers and products

pub mod customer;
pub mod product;
pub mod sale;

use thiserror::Error;

pub use customer::{CustomerGenerator, GeneratedCustomer};
pub use product::{GeneratedProduct, PRODUCT_DESCRIPTORS, PRODUCT_NOUNS, ProductGenerator};
pub use sale::{GeneratedSale, SaleGenerator};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("cannot generate {requested} unique product names from {available} combinations")]
    NameSpaceExhausted { requested: usize, available: usize },
    #[error("gave up generating unique {what} after {attempts} attempts")]
    AttemptsExhausted { what: &'static str, attempts: usize },
}
