use chrono::{DateTime, Utc};

use crate::database::Plant;

/// Body of `POST /v1/plants`. Missing fields read as empty and are caught by
/// validation.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatePlantRequest {
	pub author: String,
	pub image_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantResponse {
	pub id: i64,
	pub author: String,
	pub image_data: String,
	pub created_at: DateTime<Utc>,
}

impl From<Plant> for PlantResponse {
	fn from(plant: Plant) -> Self {
		Self {
			id: plant.id,
			author: plant.author,
			image_data: plant.image_data,
			created_at: plant.created_at,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RandomPlantsResponse {
	pub plants: Vec<PlantResponse>,
	pub count: usize,
}

impl From<Vec<Plant>> for RandomPlantsResponse {
	fn from(plants: Vec<Plant>) -> Self {
		let plants: Vec<PlantResponse> = plants.into_iter().map(PlantResponse::from).collect();

		Self {
			count: plants.len(),
			plants,
		}
	}
}
