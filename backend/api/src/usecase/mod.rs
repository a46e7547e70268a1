use async_trait::async_trait;

use crate::database::Plant;
use crate::repository::RepositoryError;

mod plant;

pub use plant::PlantService;

/// Application rules for plants, sitting between the HTTP layer and the
/// repository.
#[async_trait]
pub trait PlantUseCase: Send + Sync + 'static {
	/// Stamps the submission time and stores the plant. Inputs are expected to
	/// be validated already.
	async fn create(&self, author: String, image_data: String) -> Result<Plant, RepositoryError>;

	/// Fetches up to `count` random plants.
	async fn get_random(&self, count: u32) -> Result<Vec<Plant>, RepositoryError>;
}
