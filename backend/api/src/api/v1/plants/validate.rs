use std::collections::BTreeMap;

use super::dto::CreatePlantRequest;

pub const MAX_AUTHOR_LENGTH: usize = 255;
pub const DEFAULT_RANDOM_COUNT: u32 = 15;
pub const MAX_RANDOM_COUNT: u32 = 50;

/// Field name (as the client spelled it) to a human readable message.
pub type ValidationErrors = BTreeMap<&'static str, String>;

fn required(field: &str) -> String {
	format!("field '{field}' is required")
}

/// Checks a create request. Author length is counted in characters, not bytes.
pub fn validate_create_plant(request: &CreatePlantRequest) -> Result<(), ValidationErrors> {
	let mut errors = ValidationErrors::new();

	if request.author.trim().is_empty() {
		errors.insert("author", required("author"));
	} else if request.author.chars().count() > MAX_AUTHOR_LENGTH {
		errors.insert("author", format!("field 'author' is too long (max: {MAX_AUTHOR_LENGTH})"));
	}

	if request.image_data.trim().is_empty() {
		errors.insert("imageData", required("imageData"));
	}

	if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[derive(Debug, thiserror::Error)]
#[error("count must be a positive integer, got {0:?}")]
pub struct InvalidCount(pub String);

/// Reads `count` from a raw query string. Absent or empty means the default,
/// anything above the maximum is clamped to it.
pub fn parse_count(query: Option<&str>) -> Result<u32, InvalidCount> {
	let raw = query.and_then(|query| {
		url::form_urlencoded::parse(query.as_bytes()).find_map(|(key, value)| (key == "count").then(|| value.into_owned()))
	});

	let raw = match raw.as_deref() {
		None | Some("") => return Ok(DEFAULT_RANDOM_COUNT),
		Some(raw) => raw,
	};

	match raw.parse::<i64>() {
		Ok(count) if count > 0 => Ok(u32::try_from(count).unwrap_or(u32::MAX).min(MAX_RANDOM_COUNT)),
		_ => Err(InvalidCount(raw.to_string())),
	}
}
