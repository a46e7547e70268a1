use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use common::global::*;
use common::http::ext::*;
use common::http::RouteError;
use common::make_response;
use hyper::body::HttpBody;
use hyper::server::conn::Http;
use hyper::{Body, Request, Response, StatusCode};
use routerify::{RequestServiceBuilder, Router};
use serde::Serialize;
use tokio::net::TcpSocket;
use tokio::select;

use self::error::ApiError;
use crate::config::ApiConfig;
use crate::global::ApiGlobal;

pub mod error;
pub mod middleware;
pub mod v1;

/// Serializes `body` into a JSON response with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> error::Result<Response<Body>> {
	let body = serde_json::to_string(body)
		.map_err_route((StatusCode::INTERNAL_SERVER_ERROR, "failed to serialize response"))?;

	Ok(make_response!(status, body))
}

/// Buffers a request body, refusing anything over `limit` bytes.
pub async fn read_body(body: &mut Body, limit: usize) -> error::Result<Vec<u8>> {
	if body.size_hint().lower() > limit as u64 {
		return Err((StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into());
	}

	let mut buf = Vec::new();
	while let Some(chunk) = body.data().await {
		let chunk = chunk.map_err_route((StatusCode::BAD_REQUEST, "Failed to read request body"))?;

		if buf.len() + chunk.len() > limit {
			return Err((StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into());
		}

		buf.extend_from_slice(&chunk);
	}

	Ok(buf)
}

async fn not_found(_: Request<Body>) -> error::Result<Response<Body>> {
	Err((StatusCode::NOT_FOUND, "not found").into())
}

/// Answers known paths hit with a method they do not serve.
pub async fn method_not_allowed(_: Request<Body>) -> error::Result<Response<Body>> {
	Err((StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into())
}

pub fn routes<G: ApiGlobal>(global: &Arc<G>) -> Router<Body, RouteError<ApiError>> {
	// Routes hold a Weak so an idle keep-alive connection cannot keep the global
	// state alive and stall shutdown.
	let weak = Arc::downgrade(global);
	Router::builder()
		.data(weak)
		// Our response logger
		.middleware(middleware::logging::request_logger())
		.middleware(middleware::cors::cors_middleware(global))
		.options("/*", middleware::cors::preflight)
		.scope("/v1", v1::routes(global))
		.any(not_found)
		.err_handler_with_info(common::http::error_handler::<ApiError>)
		.build()
		.expect("failed to build router")
}

pub async fn run<G: ApiGlobal>(global: Arc<G>) -> Result<()> {
	let config = global.config::<ApiConfig>();
	tracing::info!("api listening on {}", config.bind_address);

	let socket = match config.bind_address {
		SocketAddr::V4(_) => TcpSocket::new_v4()?,
		SocketAddr::V6(_) => TcpSocket::new_v6()?,
	};
	socket.set_reuseaddr(true)?;
	socket.bind(config.bind_address)?;
	let listener = socket.listen(1024)?;

	let request_service = RequestServiceBuilder::new(routes(&global))
		.map_err(|err| anyhow::anyhow!("failed to build request service: {err}"))?;

	loop {
		select! {
			_ = global.ctx().done() => {
				tracing::info!("api no longer accepting connections");
				return Ok(());
			},
			r = listener.accept() => {
				let (socket, addr) = r?;
				tracing::trace!(%addr, "accepted connection");

				let service = request_service.build(addr);

				tokio::spawn(async move {
					if let Err(err) = Http::new().serve_connection(socket, service).await {
						tracing::debug!(%addr, error = %err, "connection closed with error");
					}
				});
			},
		}
	}
}
