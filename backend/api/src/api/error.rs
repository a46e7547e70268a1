use common::http::RouteError;

use crate::api::v1::plants::validate::InvalidCount;
use crate::repository::RepositoryError;

pub type Result<T, E = RouteError<ApiError>> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
	#[error("failed to read http body: {0}")]
	ParseHttpBody(#[from] hyper::Error),
	#[error("failed to parse json: {0}")]
	ParseJson(#[from] serde_json::Error),
	#[error("invalid count: {0}")]
	InvalidCount(#[from] InvalidCount),
	#[error("repository error: {0}")]
	Repository(#[from] RepositoryError),
	#[error("request timed out: {0}")]
	Timeout(#[from] tokio::time::error::Elapsed),
}
