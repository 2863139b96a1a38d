//! biztime server binary
//!
//! Usage: `biztime [CONFIG.yaml]`
//!
//! Without a database URL (from the config file or `DATABASE_URL`) the server
//! runs on the in-memory store and loses its data on restart.

use anyhow::Result;
use biztime::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1);
    let config = ServerConfig::load(config_path.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    let builder = ServerBuilder::new();
    let builder = if config.database.url.is_some() {
        with_database(builder, &config.database).await?
    } else {
        tracing::warn!(
            "No database URL configured, running on the in-memory store. \
             Data will not survive restarts."
        );
        builder.with_store(InMemoryStore::new())
    };

    builder.serve(&config.bind_addr).await
}

#[cfg(feature = "postgres")]
async fn with_database(
    builder: ServerBuilder,
    database: &DatabaseConfig,
) -> Result<ServerBuilder> {
    let store = PostgresStore::connect(database).await?;
    Ok(builder.with_store(store))
}

#[cfg(not(feature = "postgres"))]
async fn with_database(
    _builder: ServerBuilder,
    _database: &DatabaseConfig,
) -> Result<ServerBuilder> {
    anyhow::bail!(
        "a database URL is configured but biztime was built without the `postgres` feature"
    )
}
