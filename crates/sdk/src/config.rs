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

//! API credential storage
//!
//! Credentials are a plain immutable value: constructor-validated, owned by
//! the client facade, and shared by reference with the signer. No SDK method
//! mutates them after construction, which is what makes a single client
//! instance safe to share across concurrent calls without locking.

use std::fmt;

use crate::error::Error;

/// Default request timeout in seconds applied by the HTTP transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// API credentials for a project on the platform.
#[derive(Clone)]
pub struct Credentials {
	api_key: String,
	api_secret: String,
	domain: String,
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("api_key", &self.api_key)
			.field("api_secret", &"<redacted>")
			.field("domain", &self.domain)
			.finish()
	}
}

impl Credentials {
	/// Create validated credentials.
	///
	/// `domain` is the base URL of the API service (scheme + host, optionally
	/// a port); a trailing slash is stripped so request paths can always be
	/// joined with a single `/`.
	pub fn new(
		api_key: impl Into<String>,
		api_secret: impl Into<String>,
		domain: impl Into<String>,
	) -> Result<Self, Error> {
		let api_key = api_key.into();
		let api_secret = api_secret.into();
		let domain = domain.into();

		if api_key.is_empty() {
			return Err(Error::InvalidCredentials("api_key is empty".to_string()));
		}
		if api_secret.is_empty() {
			return Err(Error::InvalidCredentials("api_secret is empty".to_string()));
		}
		if domain.is_empty() {
			return Err(Error::InvalidCredentials("domain is empty".to_string()));
		}

		Ok(Self {
			api_key,
			api_secret,
			domain: domain.trim_end_matches('/').to_string(),
		})
	}

	/// The project API key, sent as the `X-Api-Key` header.
	pub fn api_key(&self) -> &str {
		&self.api_key
	}

	/// The project API secret. Only ever fed into the signature hash,
	/// never sent over the wire.
	pub fn api_secret(&self) -> &str {
		&self.api_secret
	}

	/// Base URL of the API service, without a trailing slash.
	pub fn domain(&self) -> &str {
		&self.domain
	}
}
