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

//! Transport driver
//!
//! The network exchange for a signed request is behind the [`Transport`]
//! trait so the signing logic stays transport-agnostic and tests can
//! substitute a double for the wire. One `execute` call is one round-trip:
//! no retries, no connection-reuse contract.
//!
//! Verb handling follows a single policy instead of per-verb branches:
//! GET appends the fields as a URL query string and sends no payload; every
//! mutating verb serializes the fields as a JSON payload (empty string when
//! there are no fields).
//!
//! TLS certificate verification is ON by default. Disabling it is an
//! explicit opt-in via [`crate::ClientOptions::danger_accept_invalid_certs`]
//! and should only ever be used against a staging endpoint.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::Error;
use crate::signing::SignedHeaders;

/// Supported HTTP verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
	Get,
	Post,
	Put,
	Patch,
	Delete,
}

impl Method {
	/// Canonical upper-case name of the verb.
	pub fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Patch => "PATCH",
			Method::Delete => "DELETE",
		}
	}

	/// Whether the verb is a read. Reads carry fields in the query string,
	/// mutations in the JSON body.
	pub fn is_read(self) -> bool {
		matches!(self, Method::Get)
	}

	/// Signature key prefix for caller-supplied fields under this verb.
	pub fn param_prefix(self) -> &'static str {
		if self.is_read() { "query" } else { "body" }
	}

	fn as_reqwest(self) -> reqwest::Method {
		match self {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Put => reqwest::Method::PUT,
			Method::Patch => reqwest::Method::PATCH,
			Method::Delete => reqwest::Method::DELETE,
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Method {
	type Err = Error;

	/// Case-insensitive. Anything outside the supported set fails fast with
	/// [`Error::UnsupportedMethod`], before any network I/O.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"GET" => Ok(Method::Get),
			"POST" => Ok(Method::Post),
			"PUT" => Ok(Method::Put),
			"PATCH" => Ok(Method::Patch),
			"DELETE" => Ok(Method::Delete),
			other => Err(Error::UnsupportedMethod(other.to_string())),
		}
	}
}

/// Raw wire response: HTTP status plus untouched body bytes. Immutable once
/// produced.
#[derive(Debug, Clone)]
pub struct RawResponse {
	pub status: u16,
	pub body: Vec<u8>,
}

/// Replaceable component performing the network exchange for a signed
/// request.
#[async_trait]
pub trait Transport: Send + Sync {
	/// Execute one request and return the raw response.
	///
	/// Any transport-layer fault (DNS, connection refused, timeout, TLS)
	/// surfaces as [`Error::Transport`] and short-circuits before response
	/// decoding.
	async fn execute(
		&self,
		method: Method,
		url: &str,
		fields: &Map<String, Value>,
		headers: &SignedHeaders,
	) -> Result<RawResponse, Error>;
}

/// Default HTTP-backed transport over reqwest.
pub struct HttpTransport {
	client: ReqwestClient,
}

impl HttpTransport {
	/// Create a transport with the default timeout and TLS verification
	/// enabled.
	pub fn new() -> Self {
		Self::with_options(Duration::from_secs(DEFAULT_TIMEOUT_SECS), false)
	}

	/// Create a transport with an explicit timeout and TLS policy.
	pub fn with_options(timeout: Duration, danger_accept_invalid_certs: bool) -> Self {
		let client = ReqwestClient::builder()
			.timeout(timeout)
			.danger_accept_invalid_certs(danger_accept_invalid_certs)
			.build()
			.expect("Failed to create HTTP client");

		Self { client }
	}
}

impl Default for HttpTransport {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn execute(
		&self,
		method: Method,
		url: &str,
		fields: &Map<String, Value>,
		headers: &SignedHeaders,
	) -> Result<RawResponse, Error> {
		let request = if method.is_read() {
			let mut request = self.client.get(url);
			if !fields.is_empty() {
				request = request.query(&query_pairs(fields));
			}
			request
		} else {
			let payload = if fields.is_empty() {
				String::new()
			} else {
				serde_json::to_string(fields).expect("request fields serialize to JSON")
			};
			self.client.request(method.as_reqwest(), url).body(payload)
		};

		let response = request
			.header(CONTENT_TYPE, headers.content_type)
			.header("X-Api-Key", &headers.api_key)
			.header("X-Signature", &headers.signature)
			.header("X-Timestamp", &headers.timestamp)
			.send()
			.await
			.map_err(|e| Error::Transport(e.to_string()))?;

		let status = response.status().as_u16();
		let body = response
			.bytes()
			.await
			.map_err(|e| Error::Transport(e.to_string()))?
			.to_vec();

		Ok(RawResponse { status, body })
	}
}

/// Render fields as query-string pairs. Strings pass through bare; any other
/// value is rendered as its JSON text. Read endpoints only carry scalar
/// fields today, so structured values are not expanded into nested
/// `key[i]=...` pairs.
fn query_pairs(fields: &Map<String, Value>) -> Vec<(String, String)> {
	fields
		.iter()
		.map(|(key, value)| {
			let rendered = match value {
				Value::String(s) => s.clone(),
				other => other.to_string(),
			};
			(key.clone(), rendered)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_method_parse() {
		assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
		assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
		assert_eq!("Patch".parse::<Method>().unwrap(), Method::Patch);
		assert!(matches!(
			"TRACE".parse::<Method>(),
			Err(Error::UnsupportedMethod(m)) if m == "TRACE"
		));
	}

	#[test]
	fn test_param_prefix_policy() {
		assert_eq!(Method::Get.param_prefix(), "query");
		for method in [Method::Post, Method::Put, Method::Patch, Method::Delete] {
			assert_eq!(method.param_prefix(), "body");
		}
	}

	#[test]
	fn test_query_pairs_rendering() {
		let mut fields = Map::new();
		fields.insert("name".to_string(), Value::from("alice"));
		fields.insert("limit".to_string(), Value::from(10));
		fields.insert("flag".to_string(), Value::from(true));
		let pairs = query_pairs(&fields);
		assert!(pairs.contains(&("name".to_string(), "alice".to_string())));
		assert!(pairs.contains(&("limit".to_string(), "10".to_string())));
		assert!(pairs.contains(&("flag".to_string(), "true".to_string())));
	}

	#[test]
	fn test_query_pairs_structured_value_renders_as_json() {
		let mut fields = Map::new();
		fields.insert("tag".to_string(), serde_json::json!({"k": "v"}));
		let pairs = query_pairs(&fields);
		assert_eq!(pairs, vec![("tag".to_string(), r#"{"k":"v"}"#.to_string())]);
	}
}
