use chrono::{DateTime, Utc};

/// A stored plant. Rows are never updated, `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Plant {
	/// The store assigned identifier.
	pub id: i64,
	/// Free-form name of whoever drew the plant.
	pub author: String,
	/// Opaque image payload, usually a base64 data url.
	pub image_data: String,
	/// When the plant was submitted, as stamped by the use-case layer.
	pub created_at: DateTime<Utc>,
}

/// A plant that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlant {
	pub author: String,
	pub image_data: String,
	pub created_at: DateTime<Utc>,
}
