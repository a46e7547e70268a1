use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

use crate::config::DatabaseConfig;

pub mod migration;
mod plant;

pub use plant::*;

/// Opens the pool and establishes the first connection, so an unreachable
/// store fails the boot instead of the first request.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
	let options = PgConnectOptions::from_str(&config.uri)?.disable_statement_logging();

	let pool = PgPoolOptions::new()
		.max_connections(config.max_connections)
		.connect_with(options)
		.await?;

	tracing::info!("connected to database");

	Ok(pool)
}
