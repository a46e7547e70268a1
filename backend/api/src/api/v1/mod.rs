use std::sync::Arc;

use common::http::RouteError;
use hyper::Body;
use routerify::Router;

use super::error::ApiError;
use super::method_not_allowed;
use crate::global::ApiGlobal;

pub mod health;
pub mod plants;

pub fn routes<G: ApiGlobal>(_: &Arc<G>) -> Router<Body, RouteError<ApiError>> {
	Router::builder()
		.get("/health", health::health)
		.post("/plants", plants::create::handler::<G>)
		.get("/plants/random", plants::random::handler::<G>)
		.any_method("/health", method_not_allowed)
		.any_method("/plants", method_not_allowed)
		.any_method("/plants/random", method_not_allowed)
		.build()
		.expect("failed to build router")
}
