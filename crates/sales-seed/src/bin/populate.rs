//! Clears and repopulates the customers, products, and sales tables.
//!
//! Reads `DB_NAME`, `DB_USER`, `DB_PASSWORD`, `DB_HOST` and `DB_PORT` from
//! the environment or a `.env` file. Run with:
//! ```
//! cargo run -p sales-seed --bin populate-db
//! ```

use sales_seed::config::{DbSettings, SeedConfig};
use sales_seed::db;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match DbSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Error connecting to the database: {e}");
            return Ok(());
        }
    };

    let mut rng = rand::thread_rng();

    match db::populate(&settings.connect_options(), SeedConfig::default(), &mut rng).await {
        Ok(summary) => {
            tracing::info!("Seed completed!");
            tracing::info!("  Customers: {}", summary.customers);
            tracing::info!("  Products: {}", summary.products);
            tracing::info!("  Sales: {}", summary.sales);
        }
        Err(e) => tracing::error!("{e}. No changes were made."),
    }

    Ok(())
}
