use common::context::Context;
use common::global::{GlobalConfig, GlobalConfigProvider, GlobalCtx};
use sqlx::PgPool;

use crate::config::{ApiConfig, AppConfig};
use crate::repository::PgPlantRepository;
use crate::usecase::{PlantService, PlantUseCase};

pub trait ApiState {
	type Plants: PlantUseCase;

	fn plants(&self) -> &Self::Plants;
}

pub trait ApiGlobal: GlobalCtx + GlobalConfigProvider<ApiConfig> + GlobalConfig + ApiState + Send + Sync + 'static {}

impl<T> ApiGlobal for T where T: GlobalCtx + GlobalConfigProvider<ApiConfig> + GlobalConfig + ApiState + Send + Sync + 'static
{}

pub struct GlobalState {
	config: AppConfig,
	ctx: Context,
	plants: PlantService<PgPlantRepository>,
}

impl GlobalState {
	pub fn new(config: AppConfig, db: PgPool, ctx: Context) -> Self {
		Self {
			config,
			ctx,
			plants: PlantService::new(PgPlantRepository::new(db)),
		}
	}
}

impl GlobalCtx for GlobalState {
	fn ctx(&self) -> &Context {
		&self.ctx
	}
}

impl GlobalConfig for GlobalState {}

impl GlobalConfigProvider<ApiConfig> for GlobalState {
	fn provide_config(&self) -> &ApiConfig {
		&self.config.api
	}
}

impl ApiState for GlobalState {
	type Plants = PlantService<PgPlantRepository>;

	fn plants(&self) -> &Self::Plants {
		&self.plants
	}
}
