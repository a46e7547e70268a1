use common::global::*;
use common::http::ext::*;
use common::prelude::FutureTimeout;
use hyper::{Body, Request, Response, StatusCode};

use super::dto::{CreatePlantRequest, PlantResponse};
use super::validate::validate_create_plant;
use crate::api::error::Result;
use crate::api::{json_response, read_body};
use crate::config::ApiConfig;
use crate::global::ApiGlobal;
use crate::usecase::PlantUseCase;

pub async fn handler<G: ApiGlobal>(mut req: Request<Body>) -> Result<Response<Body>> {
	let global = req.get_global::<G>()?;

	let body = read_body(req.body_mut(), global.config::<ApiConfig>().max_body_size).await?;

	let request: CreatePlantRequest =
		serde_json::from_slice(&body).map_err_route((StatusCode::BAD_REQUEST, "Invalid JSON format"))?;

	if let Err(errors) = validate_create_plant(&request) {
		return Err(json_response(StatusCode::BAD_REQUEST, &errors)?.into());
	}

	let plant = global
		.plants()
		.create(request.author, request.image_data)
		.timeout(global.config::<ApiConfig>().request_timeout())
		.await
		.map_err_route((StatusCode::GATEWAY_TIMEOUT, "Request timed out"))?
		.map_err_route((StatusCode::INTERNAL_SERVER_ERROR, "Failed to create plant"))?;

	json_response(StatusCode::CREATED, &PlantResponse::from(plant))
}
