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

//! Client facade
//!
//! [`Avata`] wires the request pipeline: canonicalize -> sign -> execute ->
//! decode. Each call is one round-trip, synchronous from the caller's
//! perspective (it suspends until the transport returns or times out). The
//! client holds no mutable state after construction, so a single instance
//! can serve concurrent calls without locking.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::debug;

use crate::api::{AccountApi, MtApi, NftApi, RechargeApi, TxApi};
use crate::canonical::CanonicalParams;
use crate::config::{Credentials, DEFAULT_TIMEOUT_SECS};
use crate::error::Error;
use crate::response::ResponseEnvelope;
use crate::signing;
use crate::transport::{HttpTransport, Method, Transport};

/// Options for the default HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientOptions {
	/// Per-request timeout. A timeout is a transport failure, not a
	/// protocol error.
	pub timeout: Duration,
	/// Disable TLS certificate verification. Off by default; only ever
	/// enable this against a staging endpoint you control.
	pub danger_accept_invalid_certs: bool,
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
			danger_accept_invalid_certs: false,
		}
	}
}

/// Client for the platform's signed REST API.
pub struct Avata {
	credentials: Credentials,
	transport: Arc<dyn Transport>,
}

impl Avata {
	/// Create a client with the default HTTP transport.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_options(credentials, ClientOptions::default())
	}

	/// Create a client with explicit transport options.
	pub fn with_options(credentials: Credentials, options: ClientOptions) -> Self {
		let transport = Arc::new(HttpTransport::with_options(
			options.timeout,
			options.danger_accept_invalid_certs,
		));
		Self {
			credentials,
			transport,
		}
	}

	/// Create a client over a custom transport (e.g. a test double).
	pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
		Self {
			credentials,
			transport,
		}
	}

	/// The credentials this client signs with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Execute one signed API call.
	///
	/// `path` is the request path (e.g. `/v1beta1/accounts`); the absolute
	/// URL is formed against the credential domain, but only the path enters
	/// the signature.
	pub async fn request(
		&self,
		path: &str,
		fields: Map<String, Value>,
		method: Method,
	) -> Result<ResponseEnvelope, Error> {
		let url = format!("{}/{}", self.credentials.domain(), path.trim_start_matches('/'));
		let timestamp = signing::timestamp_millis();

		let params = CanonicalParams::build(path, &fields, method);
		let headers = signing::sign(&params, &timestamp, &self.credentials);

		debug!(method = %method, path = %path, "dispatching signed request");
		let raw = self.transport.execute(method, &url, &fields, &headers).await?;
		debug!(status = raw.status, bytes = raw.body.len(), "decoding response");

		ResponseEnvelope::decode(raw)
	}

	/// Chain account endpoints.
	pub fn account(&self) -> AccountApi<'_> {
		AccountApi::new(self)
	}

	/// NFT class and token endpoints.
	pub fn nft(&self) -> NftApi<'_> {
		NftApi::new(self)
	}

	/// MT (multi-token) class and token endpoints.
	pub fn mt(&self) -> MtApi<'_> {
		MtApi::new(self)
	}

	/// Energy/business-fee recharge endpoints.
	pub fn recharge(&self) -> RechargeApi<'_> {
		RechargeApi::new(self)
	}

	/// On-chain transaction result endpoints.
	pub fn tx(&self) -> TxApi<'_> {
		TxApi::new(self)
	}
}

/// Synchronous client wrapper (for compatibility)
///
/// This wraps the async client and runs each call on an owned tokio
/// runtime. For new code, prefer using the async [`Avata`] directly.
pub struct SyncAvata {
	client: Avata,
	runtime: tokio::runtime::Runtime,
}

impl SyncAvata {
	/// Create a synchronous client with the default HTTP transport.
	pub fn new(credentials: Credentials) -> anyhow::Result<Self> {
		Self::with_client(Avata::new(credentials))
	}

	/// Wrap an existing async client.
	pub fn with_client(client: Avata) -> anyhow::Result<Self> {
		let runtime = tokio::runtime::Runtime::new()
			.map_err(|e| anyhow::anyhow!("Failed to create tokio runtime: {}", e))?;
		Ok(Self { client, runtime })
	}

	/// Execute one signed API call (synchronous).
	pub fn request(
		&self,
		path: &str,
		fields: Map<String, Value>,
		method: Method,
	) -> Result<ResponseEnvelope, Error> {
		self.runtime.block_on(self.client.request(path, fields, method))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn credentials() -> Credentials {
		Credentials::new("key", "secret", "https://example.com/").unwrap()
	}

	#[test]
	fn test_client_creation() {
		let client = Avata::new(credentials());
		assert_eq!(client.credentials().domain(), "https://example.com");
	}

	#[test]
	fn test_client_options_default() {
		let options = ClientOptions::default();
		assert_eq!(options.timeout, Duration::from_secs(3));
		assert!(!options.danger_accept_invalid_certs);
	}

	#[test]
	fn test_sync_client_creation() {
		let client = SyncAvata::new(credentials());
		assert!(client.is_ok());
	}
}
