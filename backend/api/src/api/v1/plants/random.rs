use common::global::*;
use common::http::ext::*;
use common::prelude::FutureTimeout;
use hyper::{Body, Request, Response, StatusCode};

use super::dto::RandomPlantsResponse;
use super::validate::parse_count;
use crate::api::error::Result;
use crate::api::json_response;
use crate::config::ApiConfig;
use crate::global::ApiGlobal;
use crate::usecase::PlantUseCase;

pub async fn handler<G: ApiGlobal>(req: Request<Body>) -> Result<Response<Body>> {
	let global = req.get_global::<G>()?;

	let count = parse_count(req.uri().query()).map_err_route((
		StatusCode::BAD_REQUEST,
		"Invalid count parameter. Must be a positive integer",
	))?;

	let plants = global
		.plants()
		.get_random(count)
		.timeout(global.config::<ApiConfig>().request_timeout())
		.await
		.map_err_route((StatusCode::GATEWAY_TIMEOUT, "Request timed out"))?
		.map_err_route((StatusCode::INTERNAL_SERVER_ERROR, "Failed to get random plants"))?;

	json_response(StatusCode::OK, &RandomPlantsResponse::from(plants))
}
