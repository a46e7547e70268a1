use std::str::FromStr;

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

static RELOAD_HANDLE: OnceCell<reload::Handle<EnvFilter, Registry>> = OnceCell::new();

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
	#[default]
	Default,
	Json,
	Pretty,
	Compact,
}

/// Installs the global subscriber on the first call. Later calls only swap the
/// filter, so tests can call this as often as they like.
pub fn init(level: &str, mode: Mode) -> Result<()> {
	let env_filter = EnvFilter::from_str(level)?;

	let reload = RELOAD_HANDLE.get_or_try_init(|| -> Result<_> {
		let (filter, handle) = reload::Layer::new(EnvFilter::from_str(level)?);
		let registry = tracing_subscriber::registry().with(filter);

		match mode {
			Mode::Default => registry
				.with(fmt::layer().with_file(true).with_line_number(true))
				.try_init(),
			Mode::Json => registry
				.with(fmt::layer().json().with_file(true).with_line_number(true))
				.try_init(),
			Mode::Pretty => registry
				.with(fmt::layer().pretty().with_file(true).with_line_number(true))
				.try_init(),
			Mode::Compact => registry.with(fmt::layer().compact()).try_init(),
		}?;

		Ok(handle)
	})?;

	reload.reload(env_filter)?;

	Ok(())
}
