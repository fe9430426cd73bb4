//! Single-session connection provider.

use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use tracing::{error, info};

/// Opens one database session.
///
/// Connection errors are logged and reported as `None`; they never propagate
/// past this boundary.
pub async fn acquire(options: &PgConnectOptions) -> Option<PgConnection> {
    match PgConnection::connect_with(options).await {
        Ok(conn) => {
            info!("Database connection successful.");
            Some(conn)
        }
        Err(e) => {
            error!("Error connecting to the database: {e}");
            None
        }
    }
}
