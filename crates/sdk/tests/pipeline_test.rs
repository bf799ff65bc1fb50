// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for the signing/transport/decoding pipeline
//!
//! These tests substitute the wire with a recording transport double and
//! verify:
//! - Request assembly (URL join, verb, field passthrough)
//! - Header consistency (signature recomputable from what the transport saw)
//! - Transport failure propagation (never reaches the decoder)
//! - Envelope decoding across the success/error/empty cases
//! - Call-builder glue (paths, prefixes, operation-id handling)

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use avata_sdk::{
	Avata, CanonicalParams, Credentials, Error, HistoryQuery, Method, RawResponse,
	ResponseEnvelope, SignedHeaders, SyncAvata, Transport, sign,
};
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
struct Captured {
	method: Method,
	url: String,
	fields: Map<String, Value>,
	headers: SignedHeaders,
}

/// Transport double that records every request and replays canned results.
struct MockTransport {
	captured: Mutex<Vec<Captured>>,
	responses: Mutex<VecDeque<Result<RawResponse, Error>>>,
}

impl MockTransport {
	fn new() -> Arc<Self> {
		Arc::new(Self {
			captured: Mutex::new(Vec::new()),
			responses: Mutex::new(VecDeque::new()),
		})
	}

	fn push_body(&self, status: u16, body: &str) {
		self.responses.lock().unwrap().push_back(Ok(RawResponse {
			status,
			body: body.as_bytes().to_vec(),
		}));
	}

	fn push_failure(&self, diagnostic: &str) {
		self.responses
			.lock()
			.unwrap()
			.push_back(Err(Error::Transport(diagnostic.to_string())));
	}

	fn captured(&self) -> Vec<Captured> {
		self.captured.lock().unwrap().clone()
	}
}

#[async_trait]
impl Transport for MockTransport {
	async fn execute(
		&self,
		method: Method,
		url: &str,
		fields: &Map<String, Value>,
		headers: &SignedHeaders,
	) -> Result<RawResponse, Error> {
		self.captured.lock().unwrap().push(Captured {
			method,
			url: url.to_string(),
			fields: fields.clone(),
			headers: headers.clone(),
		});
		self.responses
			.lock()
			.unwrap()
			.pop_front()
			.expect("mock transport has a queued response")
	}
}

fn credentials() -> Credentials {
	Credentials::new("test-key", "test-secret", "https://stage.example.com/").unwrap()
}

fn client_with(transport: &Arc<MockTransport>) -> Avata {
	Avata::with_transport(credentials(), transport.clone())
}

fn string_fields(pairs: &[(&str, &str)]) -> Map<String, Value> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), Value::from(*v)))
		.collect()
}

#[tokio::test]
async fn test_post_request_assembly_and_headers() {
	let transport = MockTransport::new();
	transport.push_body(200, r#"{"data":{"account":"iaa1..."}}"#);
	let client = client_with(&transport);

	let fields = string_fields(&[("name", "alice"), ("operation_id", "OPID123")]);
	let envelope = client
		.request("/v1beta1/account", fields.clone(), Method::Post)
		.await
		.unwrap();

	assert_eq!(envelope.status, 200);
	assert_eq!(envelope.data, Some(serde_json::json!({"account": "iaa1..."})));
	assert!(envelope.error.is_none());

	let captured = transport.captured();
	assert_eq!(captured.len(), 1);
	let request = &captured[0];
	assert_eq!(request.method, Method::Post);
	assert_eq!(request.url, "https://stage.example.com/v1beta1/account");
	assert_eq!(request.fields, fields);

	// The signature the transport saw must be recomputable from the same
	// canonical parameters and the timestamp header it was sent with.
	let params = CanonicalParams::build("/v1beta1/account", &fields, Method::Post);
	let expected = sign(&params, &request.headers.timestamp, &credentials());
	assert_eq!(request.headers.signature, expected.signature);
	assert_eq!(request.headers.api_key, "test-key");
	assert_eq!(request.headers.content_type, "application/json");
	assert!(request.headers.timestamp.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_get_fields_signed_with_query_prefix() {
	let transport = MockTransport::new();
	transport.push_body(200, r#"{"data":[]}"#);
	let client = client_with(&transport);

	let fields = string_fields(&[("account", "iaa1abc"), ("limit", "10")]);
	client
		.request("/v1beta1/accounts", fields.clone(), Method::Get)
		.await
		.unwrap();

	let captured = transport.captured();
	let request = &captured[0];

	let params = CanonicalParams::build("/v1beta1/accounts", &fields, Method::Get);
	assert_eq!(
		params.keys().collect::<Vec<_>>(),
		vec!["path_url", "query_account", "query_limit"]
	);
	let expected = sign(&params, &request.headers.timestamp, &credentials());
	assert_eq!(request.headers.signature, expected.signature);
}

#[tokio::test]
async fn test_transport_failure_short_circuits() {
	let transport = MockTransport::new();
	transport.push_failure("connection refused");
	let client = client_with(&transport);

	let result = client
		.request("/v1beta1/accounts", Map::new(), Method::Get)
		.await;

	match result {
		Err(Error::Transport(diagnostic)) => {
			assert!(diagnostic.contains("connection refused"));
		}
		other => panic!("expected transport error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_application_error_envelope() {
	let transport = MockTransport::new();
	let body = r#"{"error":{"code":"E1","code_space":"S","message":"bad"}}"#;
	transport.push_body(400, body);
	let client = client_with(&transport);

	let envelope = client
		.request("/v1beta1/account", Map::new(), Method::Post)
		.await
		.unwrap();

	assert_eq!(envelope.status, 400);
	assert_eq!(envelope.raw, body.as_bytes());
	let error = envelope.error.unwrap();
	assert_eq!(error.code.as_deref(), Some("E1"));
	assert_eq!(error.code_space.as_deref(), Some("S"));
	assert_eq!(error.message.as_deref(), Some("bad"));
}

#[tokio::test]
async fn test_empty_object_is_empty_success() {
	let transport = MockTransport::new();
	transport.push_body(200, "{}");
	let client = client_with(&transport);

	let envelope = client
		.request("/v1beta1/accounts", Map::new(), Method::Get)
		.await
		.unwrap();

	assert!(envelope.data.is_none());
	assert!(envelope.error.is_none());
	assert!(!envelope.is_error());
}

#[tokio::test]
async fn test_malformed_body_surfaces_decode_error() {
	let transport = MockTransport::new();
	transport.push_body(502, "<html>bad gateway</html>");
	let client = client_with(&transport);

	let result = client
		.request("/v1beta1/accounts", Map::new(), Method::Get)
		.await;

	match result {
		Err(Error::Decode { status, raw, .. }) => {
			assert_eq!(status, 502);
			assert_eq!(raw, b"<html>bad gateway</html>");
		}
		other => panic!("expected decode error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_account_builder_generates_operation_id() {
	let transport = MockTransport::new();
	transport.push_body(200, r#"{"data":{"operation_id":"X"}}"#);
	let client = client_with(&transport);

	client.account().create("my-account", "").await.unwrap();

	let captured = transport.captured();
	let request = &captured[0];
	assert_eq!(request.url, "https://stage.example.com/v1beta1/account");
	assert_eq!(request.method, Method::Post);
	assert_eq!(request.fields.get("name"), Some(&Value::from("my-account")));
	let operation_id = request.fields["operation_id"].as_str().unwrap();
	assert_eq!(operation_id.len(), 32);
	assert!(operation_id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
}

#[tokio::test]
async fn test_nft_builder_paths_and_passthrough_operation_id() {
	let transport = MockTransport::new();
	transport.push_body(200, "{}");
	transport.push_body(200, "{}");
	let client = client_with(&transport);

	client
		.nft()
		.transfer("class1", "iaa1owner", "nft1", "iaa1rcpt", "OP-7", None)
		.await
		.unwrap();
	client.nft().detail("class1", "nft1").await.unwrap();

	let captured = transport.captured();
	assert_eq!(
		captured[0].url,
		"https://stage.example.com/v1beta1/nft/nft-transfers/class1/iaa1owner/nft1"
	);
	assert_eq!(captured[0].method, Method::Post);
	assert_eq!(captured[0].fields.get("operation_id"), Some(&Value::from("OP-7")));
	assert_eq!(
		captured[1].url,
		"https://stage.example.com/v1beta1/nft/nfts/class1/nft1"
	);
	assert_eq!(captured[1].method, Method::Get);
	assert!(captured[1].fields.is_empty());
}

#[tokio::test]
async fn test_tx_queue_info_sends_query_field() {
	let transport = MockTransport::new();
	transport.push_body(200, r#"{"data":{"queue":[]}}"#);
	let client = client_with(&transport);

	client.tx().queue_info("OPID9").await.unwrap();

	let captured = transport.captured();
	let request = &captured[0];
	assert_eq!(request.url, "https://stage.example.com/v1beta1/tx/queue/info");
	assert_eq!(request.method, Method::Get);
	assert_eq!(request.fields.get("operation_id"), Some(&Value::from("OPID9")));

	let params = CanonicalParams::build("/v1beta1/tx/queue/info", &request.fields, Method::Get);
	let expected = sign(&params, &request.headers.timestamp, &credentials());
	assert_eq!(request.headers.signature, expected.signature);
}

#[tokio::test]
async fn test_nft_history_takes_shared_query() {
	let transport = MockTransport::new();
	transport.push_body(200, r#"{"data":{"operation_records":[]}}"#);
	let client = client_with(&transport);

	let query = HistoryQuery {
		operation: Some("mint".to_string()),
		..Default::default()
	};
	client.nft().history("class1", "nft1", &query).await.unwrap();

	let captured = transport.captured();
	let request = &captured[0];
	assert_eq!(
		request.url,
		"https://stage.example.com/v1beta1/nft/nfts/class1/nft1/history"
	);
	assert_eq!(request.method, Method::Get);
	assert_eq!(request.fields.get("operation"), Some(&Value::from("mint")));
}

#[test]
fn test_sync_wrapper_drives_async_pipeline() {
	let transport = MockTransport::new();
	transport.push_body(200, r#"{"data":{"account":"iaa1..."}}"#);
	let client = SyncAvata::with_client(client_with(&transport)).unwrap();

	let envelope = client
		.request("/v1beta1/accounts", Map::new(), Method::Get)
		.unwrap();

	assert_eq!(envelope.status, 200);
	assert!(envelope.data.is_some());
	let captured = transport.captured();
	assert_eq!(captured[0].url, "https://stage.example.com/v1beta1/accounts");
}

#[test]
fn test_unsupported_method_fails_before_io() {
	let result = "TRACE".parse::<Method>();
	assert!(matches!(result, Err(Error::UnsupportedMethod(m)) if m == "TRACE"));
}

#[test]
fn test_envelope_decode_is_pure() {
	// Decoding operates on captured bytes only; no transport involvement.
	let envelope = ResponseEnvelope::decode(RawResponse {
		status: 200,
		body: br#"{"data":{"x":1},"error":{"code":"E2"}}"#.to_vec(),
	})
	.unwrap();
	// Dual-channel responses expose both fields without precedence.
	assert!(envelope.data.is_some());
	assert!(envelope.error.is_some());
}
