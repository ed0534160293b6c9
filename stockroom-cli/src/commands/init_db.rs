//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use stockroom_server::db::{create_pool, ensure_schema};

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the items table if missing, then exit
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let config = args.db.into_config()?;

    let pool = create_pool(&config)
        .await
        .context("Failed to create database pool")?;
    ensure_schema(&pool)
        .await
        .context("Failed to create items table")?;

    tracing::info!(database = %config.database, "Schema ready");
    pool.close().await;
    Ok(())
}
