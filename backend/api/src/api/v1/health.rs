use hyper::{Body, Request, Response, StatusCode};
use serde_json::json;

use crate::api::error::Result;
use crate::api::json_response;

pub async fn health(_: Request<Body>) -> Result<Response<Body>> {
	tracing::debug!("health check");

	json_response(StatusCode::OK, &json!({ "status": "ok" }))
}
