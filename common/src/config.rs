use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::logging;

/// Environment variables carrying this prefix override file values, nested
/// keys are separated by `__` (`FOREST_DATABASE__URI`).
pub const ENV_PREFIX: &str = "FOREST";

const FILE_EXTENSIONS: &[&str] = &["toml", "yaml", "yml"];

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
	/// The log level to use, this is a tracing env filter
	pub level: String,

	/// What logging mode we should use
	pub mode: logging::Mode,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			mode: logging::Mode::Default,
		}
	}
}

/// Finds the file a config name refers to, trying the bare path first and then
/// each supported extension.
fn resolve_file(name: &str) -> Option<PathBuf> {
	let path = Path::new(name);
	if path.is_file() {
		return Some(path.to_path_buf());
	}

	FILE_EXTENSIONS
		.iter()
		.map(|ext| PathBuf::from(format!("{name}.{ext}")))
		.find(|p| p.is_file())
}

/// Builds `C` from an optional config file overlaid with `FOREST_*` environment
/// variables. A file named through `FOREST_CONFIG_FILE` must exist, the
/// fallback `config_file` may be missing. Returns the resolved file path when
/// one was loaded.
pub fn parse<C: DeserializeOwned>(config_file: Option<String>) -> Result<(C, Option<String>), ::config::ConfigError> {
	let env_file = std::env::var(format!("{ENV_PREFIX}_CONFIG_FILE")).ok();
	let key_provided = env_file.is_some();

	let mut builder = ::config::Config::builder();
	let mut config_path = None;

	if let Some(name) = env_file.or(config_file) {
		match resolve_file(&name) {
			Some(path) => {
				builder = builder.add_source(::config::File::from(path.as_path()));
				config_path = Some(
					std::fs::canonicalize(&path)
						.unwrap_or(path)
						.display()
						.to_string(),
				);
			}
			None if key_provided => {
				return Err(::config::ConfigError::Message(format!("config file not found: {name}")));
			}
			None => tracing::debug!(file = name, "no config file found, using defaults"),
		}
	}

	builder = builder.add_source(
		::config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("_")
			.separator("__")
			.try_parsing(true),
	);

	let config = builder.build()?.try_deserialize()?;

	Ok((config, config_path))
}
