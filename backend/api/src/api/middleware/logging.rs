use common::http::RouteError;
use hyper::Body;
use routerify::Middleware;

use crate::api::error::ApiError;

pub fn request_logger() -> Middleware<Body, RouteError<ApiError>> {
	Middleware::post_with_info(|resp, info| async move {
		tracing::info!(
			method = %info.method(),
			path = %info.uri().path(),
			status = resp.status().as_u16(),
			"request",
		);

		Ok(resp)
	})
}
