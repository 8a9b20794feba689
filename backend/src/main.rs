//! Backend entry-point: wires configuration, storage, and the HTTP server.

mod server;

use std::sync::Arc;
use std::time::Duration;

use backend::outbound::persistence::{DbPool, DieselItemStore, PoolConfig};
use clap::Parser;
use server::Config;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = Config::parse();

    let Some(dsn) = config.dsn() else {
        return Err(std::io::Error::other(
            "database DSN missing: pass --db-dsn or set TODOLIST_DB_DSN",
        ));
    };

    let pool_config = PoolConfig::new(dsn)
        .with_max_size(config.db_max_conns)
        .with_idle_timeout(Duration::from_secs(config.db_idle_timeout_secs));
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!("database connection pool established");

    server::run(config, Arc::new(DieselItemStore::new(pool))).await
}
