use async_trait::async_trait;

use crate::database::{NewPlant, Plant};

mod postgres;

pub use postgres::PgPlantRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

/// Persistence for plants. Implementations only store and fetch, they do not
/// validate or stamp anything.
#[async_trait]
pub trait PlantRepository: Send + Sync + 'static {
	/// Stores a plant and returns it with the identifier the store assigned.
	async fn create(&self, plant: NewPlant) -> Result<Plant, RepositoryError>;

	/// Returns at most `count` plants picked uniformly at random without
	/// replacement. Fewer are returned when fewer exist.
	async fn get_random(&self, count: u32) -> Result<Vec<Plant>, RepositoryError>;
}
