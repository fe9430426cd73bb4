//! Clear-and-repopulate seeding over a single transaction.

use rand::Rng;
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{error, info, warn};

use super::acquire;
use crate::config::SeedConfig;
use crate::generators::{CustomerGenerator, GenerationError, ProductGenerator, SaleGenerator};

const PROGRESS_INTERVAL: usize = 50;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Could not connect to the database")]
    ConnectionFailure,
    #[error("Seeding failed: {0}")]
    OperationFailure(#[from] SeedError),
}

/// Rows inserted by a committed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub products: usize,
    pub sales: usize,
}

/// Connects and runs one seeding pass.
///
/// Returns [`RunError::ConnectionFailure`] without touching the database if no
/// session can be opened.
pub async fn populate(
    options: &PgConnectOptions,
    config: SeedConfig,
    rng: &mut impl Rng,
) -> Result<SeedSummary, RunError> {
    let Some(conn) = acquire(options).await else {
        return Err(RunError::ConnectionFailure);
    };

    Ok(Seeder::new(conn, config).run(rng).await?)
}

/// Owns the run's connection and closes it once the run finishes.
pub struct Seeder {
    conn: PgConnection,
    config: SeedConfig,
}

impl Seeder {
    pub fn new(conn: PgConnection, config: SeedConfig) -> Self {
        Self { conn, config }
    }

    /// Clears and repopulates all tables, then closes the connection.
    ///
    /// Either every step commits or the transaction is rolled back.
    pub async fn run(mut self, rng: &mut impl Rng) -> Result<SeedSummary, SeedError> {
        let outcome = self.populate_in_transaction(rng).await;

        match self.conn.close().await {
            Ok(()) => info!("Database connection closed."),
            Err(e) => warn!("Failed to close database connection: {e}"),
        }

        outcome
    }

    async fn populate_in_transaction(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<SeedSummary, SeedError> {
        let mut tx = self.conn.begin().await?;

        let summary = match repopulate(&mut tx, &self.config, rng).await {
            Ok(summary) => summary,
            Err(e) => {
                error!("An error occurred: {e}");
                match tx.rollback().await {
                    Ok(()) => info!("Transaction rolled back."),
                    Err(rollback_err) => error!("Rollback failed: {rollback_err}"),
                }
                return Err(e);
            }
        };

        if let Err(e) = tx.commit().await {
            error!("An error occurred while committing: {e}");
            return Err(e.into());
        }

        info!("All data committed successfully");
        Ok(summary)
    }
}

async fn repopulate(
    conn: &mut PgConnection,
    config: &SeedConfig,
    rng: &mut impl Rng,
) -> Result<SeedSummary, SeedError> {
    clear_tables(conn).await?;
    let customers = seed_customers(conn, config, rng).await?;
    let products = seed_products(conn, config, rng).await?;
    let sales = seed_sales(conn, config, rng).await?;

    Ok(SeedSummary {
        customers,
        products,
        sales,
    })
}

/// Empties all three tables and resets their identity sequences.
pub async fn clear_tables(conn: &mut PgConnection) -> Result<(), SeedError> {
    info!("Cleaning old data...");

    sqlx::query("TRUNCATE TABLE sales, customers, products RESTART IDENTITY CASCADE")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// Seeds customers, returning the number inserted.
pub async fn seed_customers(
    conn: &mut PgConnection,
    config: &SeedConfig,
    rng: &mut impl Rng,
) -> Result<usize, SeedError> {
    info!("Populating customers table...");

    let customers = CustomerGenerator::new(config.max_attempts)
        .generate_batch(config.customer_count, rng)?;

    for customer in &customers {
        sqlx::query("INSERT INTO customers (first_name, last_name, email) VALUES ($1, $2, $3)")
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.email)
            .execute(&mut *conn)
            .await?;
    }

    info!("Customers table populated");
    Ok(customers.len())
}

/// Seeds products with distinct names, returning the number inserted.
pub async fn seed_products(
    conn: &mut PgConnection,
    config: &SeedConfig,
    rng: &mut impl Rng,
) -> Result<usize, SeedError> {
    info!("Populating products table...");

    let products = ProductGenerator::new(config.price_cents, config.max_attempts)
        .generate_batch(config.product_count, rng)?;

    for product in &products {
        sqlx::query("INSERT INTO products (product_name, price) VALUES ($1, $2)")
            .bind(&product.name)
            .bind(product.price)
            .execute(&mut *conn)
            .await?;
    }

    info!("Products table populated.");
    Ok(products.len())
}

/// Seeds sales against the customers and products currently visible.
///
/// Skips the step, inserting nothing, when either table is empty.
pub async fn seed_sales(
    conn: &mut PgConnection,
    config: &SeedConfig,
    rng: &mut impl Rng,
) -> Result<usize, SeedError> {
    info!("Fetching existing customer and product IDs...");

    let customer_ids: Vec<i32> = sqlx::query_scalar("SELECT customer_id FROM customers")
        .fetch_all(&mut *conn)
        .await?;
    let product_ids: Vec<i32> = sqlx::query_scalar("SELECT product_id FROM products")
        .fetch_all(&mut *conn)
        .await?;

    if customer_ids.is_empty() || product_ids.is_empty() {
        warn!("Cannot populate sales. Customers or products table is empty.");
        return Ok(0);
    }

    info!("Populating sales table...");

    let sales = SaleGenerator::new(config.quantity, config.sale_window, OffsetDateTime::now_utc())
        .generate_batch(config.sale_count, &customer_ids, &product_ids, rng);

    for (i, sale) in sales.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO sales (customer_id, product_id, quantity, sale_date)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(sale.customer_id)
        .bind(sale.product_id)
        .bind(sale.quantity)
        .bind(sale.sale_date)
        .execute(&mut *conn)
        .await?;

        if (i + 1) % PROGRESS_INTERVAL == 0 {
            info!("  Inserted {}/{} sales", i + 1, sales.len());
        }
    }

    info!("Sales table populated.");
    Ok(sales.len())
}
