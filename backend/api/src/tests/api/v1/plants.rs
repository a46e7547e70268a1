use std::time::Duration;

use chrono::Utc;
use hyper::StatusCode;
use serde_json::json;

use crate::api::v1::plants::dto::{PlantResponse, RandomPlantsResponse};
use crate::tests::api::TestServer;
use crate::tests::global::{test_config, FailingPlantRepository, MemoryPlantRepository};

#[tokio::test]
async fn test_create_plant() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;

	let before = Utc::now();
	let resp = server
		.client
		.post(server.url("/v1/plants"))
		.json(&json!({ "author": "Alice", "imageData": "data:image/png;base64,AAA" }))
		.send()
		.await
		.expect("failed to send request");
	let after = Utc::now();

	assert_eq!(resp.status(), StatusCode::CREATED);
	let plant: PlantResponse = resp.json().await.expect("failed to read body");
	assert_eq!(plant.id, 1);
	assert_eq!(plant.author, "Alice");
	assert_eq!(plant.image_data, "data:image/png;base64,AAA");
	assert!(plant.created_at >= before && plant.created_at <= after);

	let stored = server.global.repository().plants();
	assert_eq!(stored.len(), 1);
	assert_eq!(stored[0].author, "Alice");

	server.shutdown().await;
}

#[tokio::test]
async fn test_create_plant_missing_fields() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;

	let resp = server
		.client
		.post(server.url("/v1/plants"))
		.json(&json!({ "author": "", "imageData": "" }))
		.send()
		.await
		.expect("failed to send request");

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: serde_json::Value = resp.json().await.expect("failed to read body");
	assert_eq!(
		body,
		json!({
			"author": "field 'author' is required",
			"imageData": "field 'imageData' is required",
		})
	);
	assert!(server.global.repository().plants().is_empty());

	server.shutdown().await;
}

#[tokio::test]
async fn test_create_plant_absent_fields() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;

	let resp = server
		.client
		.post(server.url("/v1/plants"))
		.json(&json!({ "author": "Alice" }))
		.send()
		.await
		.expect("failed to send request");

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: serde_json::Value = resp.json().await.expect("failed to read body");
	assert_eq!(body, json!({ "imageData": "field 'imageData' is required" }));

	server.shutdown().await;
}

#[tokio::test]
async fn test_create_plant_author_too_long() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;

	let resp = server
		.client
		.post(server.url("/v1/plants"))
		.json(&json!({ "author": "a".repeat(256), "imageData": "x" }))
		.send()
		.await
		.expect("failed to send request");

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: serde_json::Value = resp.json().await.expect("failed to read body");
	assert_eq!(body, json!({ "author": "field 'author' is too long (max: 255)" }));

	server.shutdown().await;
}

#[tokio::test]
async fn test_create_plant_invalid_json() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;

	let resp = server
		.client
		.post(server.url("/v1/plants"))
		.body("{not json")
		.send()
		.await
		.expect("failed to send request");

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: serde_json::Value = resp.json().await.expect("failed to read body");
	assert_eq!(body, json!({ "error": "Invalid JSON format", "success": false }));
	assert!(server.global.repository().plants().is_empty());

	server.shutdown().await;
}

#[tokio::test]
async fn test_create_plant_store_failure() {
	let server = TestServer::start(test_config(), FailingPlantRepository).await;

	let resp = server
		.client
		.post(server.url("/v1/plants"))
		.json(&json!({ "author": "Alice", "imageData": "x" }))
		.send()
		.await
		.expect("failed to send request");

	assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let body: serde_json::Value = resp.json().await.expect("failed to read body");
	assert_eq!(body, json!({ "error": "Failed to create plant", "success": false }));

	server.shutdown().await;
}

#[tokio::test]
async fn test_create_plant_timeout() {
	let mut config = test_config();
	config.api.request_timeout = 1;

	let server = TestServer::start(config, MemoryPlantRepository::with_delay(Duration::from_secs(3))).await;

	let resp = server
		.client
		.post(server.url("/v1/plants"))
		.json(&json!({ "author": "Alice", "imageData": "x" }))
		.send()
		.await
		.expect("failed to send request");

	assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
	let body: serde_json::Value = resp.json().await.expect("failed to read body");
	assert_eq!(body, json!({ "error": "Request timed out", "success": false }));
	assert!(server.global.repository().plants().is_empty());

	server.shutdown().await;
}

async fn seed(server: &TestServer<MemoryPlantRepository>, n: usize) {
	for i in 0..n {
		let resp = server
			.client
			.post(server.url("/v1/plants"))
			.json(&json!({ "author": format!("author {i}"), "imageData": "x" }))
			.send()
			.await
			.expect("failed to send request");
		assert_eq!(resp.status(), StatusCode::CREATED);
	}
}

async fn get_random(server: &TestServer<MemoryPlantRepository>, query: &str) -> reqwest::Response {
	server
		.client
		.get(server.url(&format!("/v1/plants/random{query}")))
		.send()
		.await
		.expect("failed to send request")
}

#[tokio::test]
async fn test_random_default_count() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;
	seed(&server, 20).await;

	let resp = get_random(&server, "").await;

	assert_eq!(resp.status(), StatusCode::OK);
	let body: RandomPlantsResponse = resp.json().await.expect("failed to read body");
	assert_eq!(body.count, 15);
	assert_eq!(body.plants.len(), 15);
	assert_eq!(server.global.repository().requested_counts(), vec![15]);

	server.shutdown().await;
}

#[tokio::test]
async fn test_random_explicit_count() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;
	seed(&server, 5).await;

	let resp = get_random(&server, "?count=3").await;

	assert_eq!(resp.status(), StatusCode::OK);
	let body: RandomPlantsResponse = resp.json().await.expect("failed to read body");
	assert_eq!(body.count, 3);
	assert_eq!(body.plants.len(), 3);

	server.shutdown().await;
}

#[tokio::test]
async fn test_random_count_clamped() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;
	seed(&server, 5).await;

	let resp = get_random(&server, "?count=100").await;

	assert_eq!(resp.status(), StatusCode::OK);
	let body: RandomPlantsResponse = resp.json().await.expect("failed to read body");
	assert_eq!(body.count, 5);
	assert_eq!(server.global.repository().requested_counts(), vec![50]);

	server.shutdown().await;
}

#[tokio::test]
async fn test_random_empty_store() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;

	let resp = get_random(&server, "?count=").await;

	assert_eq!(resp.status(), StatusCode::OK);
	let body: serde_json::Value = resp.json().await.expect("failed to read body");
	assert_eq!(body, json!({ "plants": [], "count": 0 }));
	assert_eq!(server.global.repository().requested_counts(), vec![15]);

	server.shutdown().await;
}

#[tokio::test]
async fn test_random_invalid_count() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;

	for query in ["?count=0", "?count=-1", "?count=abc"] {
		let resp = get_random(&server, query).await;

		assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{query}");
		let body: serde_json::Value = resp.json().await.expect("failed to read body");
		assert_eq!(
			body,
			json!({ "error": "Invalid count parameter. Must be a positive integer", "success": false })
		);
	}
	assert!(server.global.repository().requested_counts().is_empty());

	server.shutdown().await;
}

#[tokio::test]
async fn test_random_store_failure() {
	let server = TestServer::start(test_config(), FailingPlantRepository).await;

	let resp = server
		.client
		.get(server.url("/v1/plants/random?count=3"))
		.send()
		.await
		.expect("failed to send request");

	assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let body: serde_json::Value = resp.json().await.expect("failed to read body");
	assert_eq!(body, json!({ "error": "Failed to get random plants", "success": false }));

	server.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_creates() {
	let server = TestServer::start(test_config(), MemoryPlantRepository::default()).await;

	let requests = (0..10).map(|i| {
		server
			.client
			.post(server.url("/v1/plants"))
			.json(&json!({ "author": format!("author {i}"), "imageData": format!("image {i}") }))
			.send()
	});

	let mut ids = std::collections::HashSet::new();
	for resp in futures::future::join_all(requests).await {
		let resp = resp.expect("failed to send request");
		assert_eq!(resp.status(), StatusCode::CREATED);
		let plant: PlantResponse = resp.json().await.expect("failed to read body");
		assert!(ids.insert(plant.id));
	}
	assert_eq!(ids.len(), 10);

	let body: RandomPlantsResponse = get_random(&server, "?count=15")
		.await
		.json()
		.await
		.expect("failed to read body");
	assert_eq!(body.count, 10);
	for plant in &body.plants {
		assert_eq!(plant.author.replace("author", "image"), plant.image_data);
	}

	server.shutdown().await;
}
