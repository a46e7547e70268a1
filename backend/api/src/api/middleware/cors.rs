use std::sync::Arc;

use common::global::*;
use common::http::RouteError;
use hyper::header::{self, HeaderValue};
use hyper::{Body, Request, Response, StatusCode};
use routerify::Middleware;

use crate::api::error::{ApiError, Result};
use crate::config::ApiConfig;
use crate::global::ApiGlobal;

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Accept, Authorization, Content-Type, X-CSRF-Token";
const EXPOSE_HEADERS: &str = "Link";
const MAX_AGE: &str = "300";

/// Whether `origin` may read our responses. A `*` entry allows any origin.
pub fn origin_allowed(allowed: &[String], origin: &HeaderValue) -> bool {
	let Ok(origin) = origin.to_str() else {
		return false;
	};

	allowed.iter().any(|o| o == "*" || o == origin)
}

/// Echoes allowed origins back with credentials enabled. Responses to other
/// origins carry no CORS headers at all.
pub fn cors_middleware<G: ApiGlobal>(global: &Arc<G>) -> Middleware<Body, RouteError<ApiError>> {
	let allowed = Arc::new(global.config::<ApiConfig>().cors_allowed_origins.clone());

	Middleware::post_with_info(move |mut resp: Response<Body>, info| {
		let allowed = allowed.clone();

		async move {
			let origin = info.headers().get(header::ORIGIN).cloned();

			if let Some(origin) = origin.filter(|origin| origin_allowed(&allowed, origin)) {
				let headers = resp.headers_mut();
				headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
				headers.insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
				headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
				headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
				headers.insert(header::ACCESS_CONTROL_EXPOSE_HEADERS, HeaderValue::from_static(EXPOSE_HEADERS));
				headers.insert(header::ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE));
				headers.append(header::VARY, HeaderValue::from_static("Origin"));
			}

			Ok(resp)
		}
	})
}

/// Preflight requests on any path are answered without touching a handler.
pub async fn preflight(_: Request<Body>) -> Result<Response<Body>> {
	Ok(Response::builder()
		.status(StatusCode::NO_CONTENT)
		.body(Body::empty())
		.expect("failed to build response"))
}
