use async_trait::async_trait;
use sqlx::PgPool;

use super::{PlantRepository, RepositoryError};
use crate::database::{NewPlant, Plant};

#[derive(Debug, Clone)]
pub struct PgPlantRepository {
	db: PgPool,
}

impl PgPlantRepository {
	pub fn new(db: PgPool) -> Self {
		Self { db }
	}

	#[cfg(test)]
	pub fn db(&self) -> &PgPool {
		&self.db
	}

	/// Removes every plant, returning how many rows were deleted. Identities are
	/// not restarted.
	#[cfg(test)]
	pub async fn clear(&self) -> Result<u64, RepositoryError> {
		let result = sqlx::query("DELETE FROM plants").execute(&self.db).await?;

		Ok(result.rows_affected())
	}
}

#[async_trait]
impl PlantRepository for PgPlantRepository {
	async fn create(&self, plant: NewPlant) -> Result<Plant, RepositoryError> {
		let plant = sqlx::query_as::<_, Plant>(
			"INSERT INTO plants (author, image_data, created_at) VALUES ($1, $2, $3) RETURNING id, author, image_data, created_at",
		)
		.bind(plant.author)
		.bind(plant.image_data)
		.bind(plant.created_at)
		.fetch_one(&self.db)
		.await?;

		Ok(plant)
	}

	async fn get_random(&self, count: u32) -> Result<Vec<Plant>, RepositoryError> {
		if count == 0 {
			return Ok(Vec::new());
		}

		let plants = sqlx::query_as::<_, Plant>(
			"SELECT id, author, image_data, created_at FROM plants ORDER BY RANDOM() LIMIT $1",
		)
		.bind(i64::from(count))
		.fetch_all(&self.db)
		.await?;

		Ok(plants)
	}
}
