use async_trait::async_trait;
use chrono::Utc;

use super::PlantUseCase;
use crate::database::{NewPlant, Plant};
use crate::repository::{PlantRepository, RepositoryError};

pub struct PlantService<R> {
	repo: R,
}

impl<R: PlantRepository> PlantService<R> {
	pub fn new(repo: R) -> Self {
		Self { repo }
	}

	#[cfg(test)]
	pub fn repository(&self) -> &R {
		&self.repo
	}
}

#[async_trait]
impl<R: PlantRepository> PlantUseCase for PlantService<R> {
	async fn create(&self, author: String, image_data: String) -> Result<Plant, RepositoryError> {
		let plant = NewPlant {
			author,
			image_data,
			created_at: Utc::now(),
		};

		self.repo.create(plant).await
	}

	async fn get_random(&self, count: u32) -> Result<Vec<Plant>, RepositoryError> {
		self.repo.get_random(count).await
	}
}
