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

use thiserror::Error;

/// Error types for SDK operations
///
/// Application-level failures (the server's own `error` object) are NOT
/// represented here; they are carried inside [`crate::ResponseEnvelope`]
/// together with the HTTP status and raw body, so a caller can always
/// distinguish HTTP-level failure from application-level failure.
#[derive(Debug, Error)]
pub enum Error {
	/// Credential construction was given unusable input.
	#[error("Invalid credentials: {0}")]
	InvalidCredentials(String),

	/// Network-level failure (DNS, connection refused, timeout, TLS).
	/// Surfaced before any response decoding is attempted.
	#[error("Transport error: {0}")]
	Transport(String),

	/// Verb outside the supported set. A programming/config error that
	/// fails fast before any network I/O.
	#[error("Unsupported HTTP method: {0}")]
	UnsupportedMethod(String),

	/// The response body was not valid JSON. The HTTP status and raw
	/// bytes are retained so the caller can inspect the server's actual
	/// output.
	#[error("Failed to decode response body (http {status}): {reason}")]
	Decode {
		status: u16,
		raw: Vec<u8>,
		reason: String,
	},
}
