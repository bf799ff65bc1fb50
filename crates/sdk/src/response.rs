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

//! Response envelope decoding
//!
//! The server replies on two channels inside one JSON object:
//! `{ "data"?: any, "error"?: { "code"?, "code_space"?, "message"? } }`.
//! The decoder exposes whatever fields are present without second-guessing
//! the server: `data` and `error` may coexist in malformed responses, and
//! the absence of both is an implicit empty success, never a failure. The
//! HTTP status and raw bytes are always retained so callers can fall back
//! to inspecting the actual wire output.

use serde_json::Value;

use crate::error::Error;
use crate::transport::RawResponse;

/// The server's application-level error object.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
	pub code: Option<String>,
	pub code_space: Option<String>,
	pub message: Option<String>,
	/// The raw `error` object exactly as returned.
	pub raw: Value,
}

/// Decoded server response, always paired with raw status/bytes.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
	/// HTTP status code of the exchange.
	pub status: u16,
	/// Untouched response body bytes.
	pub raw: Vec<u8>,
	/// The `data` payload, when present.
	pub data: Option<Value>,
	/// The `error` object, when present.
	pub error: Option<ApiError>,
}

impl ResponseEnvelope {
	/// Decode a raw response.
	///
	/// A body that is not valid JSON yields [`Error::Decode`] carrying the
	/// status and raw bytes for diagnostics.
	pub fn decode(response: RawResponse) -> Result<Self, Error> {
		let RawResponse { status, body } = response;

		let parsed: Value = match serde_json::from_slice(&body) {
			Ok(value) => value,
			Err(e) => {
				return Err(Error::Decode {
					status,
					raw: body,
					reason: e.to_string(),
				});
			}
		};

		let data = parsed.get("data").cloned();
		let error = parsed.get("error").map(|raw| ApiError {
			code: field_str(raw, "code"),
			code_space: field_str(raw, "code_space"),
			message: field_str(raw, "message"),
			raw: raw.clone(),
		});

		Ok(Self {
			status,
			raw: body,
			data,
			error,
		})
	}

	/// True when the server reported an application-level error.
	pub fn is_error(&self) -> bool {
		self.error.is_some()
	}
}

fn field_str(value: &Value, key: &str) -> Option<String> {
	value.get(key).and_then(Value::as_str).map(str::to_string)
}
