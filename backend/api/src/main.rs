use std::sync::Arc;

use anyhow::{Context as _, Result};
use common::context::Context;
use common::{logging, signal};
use tokio::signal::unix::SignalKind;
use tokio::{select, time};

mod api;
mod config;
mod database;
mod global;
mod repository;
mod usecase;


#[tokio::main]
async fn main() -> Result<()> {
	let config = config::AppConfig::parse()?;
	logging::init(&config.logging.level, config.logging.mode)?;

	if let Some(file) = &config.config_file {
		tracing::info!(file = file, "loaded config from file");
	}

	tracing::info!(name = %config.name, "starting");

	let db = database::connect(&config.database)
		.await
		.context("failed to connect to database")?;

	if config.database.migrate {
		database::migration::run(&db).await.context("failed to run migrations")?;
	}

	let shutdown_timeout = config.api.shutdown_timeout();

	let (ctx, handler) = Context::new();

	let global = Arc::new(global::GlobalState::new(config, db, ctx));

	let api_future = tokio::spawn(api::run(global.clone()));

	// Listen on both sigint and sigterm and cancel the context when either is received
	let mut signal_handler = signal::SignalHandler::new()
		.with_signal(SignalKind::interrupt())?
		.with_signal(SignalKind::terminate())?;

	let mut api_error = None;

	select! {
		r = api_future => {
			tracing::error!("api stopped unexpectedly: {:?}", r);
			api_error = Some(match r {
				Ok(Ok(())) => anyhow::anyhow!("api stopped"),
				Ok(Err(err)) => err,
				Err(err) => err.into(),
			});
		},
		_ = signal_handler.recv() => tracing::info!("shutting down"),
	}

	// We cannot have a context in scope when we cancel the handler, otherwise it will deadlock.
	drop(global);

	tracing::info!("waiting for in-flight requests to finish");

	select! {
		_ = time::sleep(shutdown_timeout) => tracing::warn!("force shutting down"),
		_ = signal_handler.recv() => tracing::warn!("force shutting down"),
		_ = handler.cancel() => tracing::info!("shut down cleanly"),
	}

	match api_error {
		Some(err) => Err(err),
		None => Ok(()),
	}
}
