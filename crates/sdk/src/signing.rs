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

//! Request signing
//!
//! Every request carries four headers: `Content-Type`, `X-Api-Key`,
//! `X-Signature` and `X-Timestamp`. The signature is
//!
//! ```text
//! hex( SHA-256( unescape(json(canonical_params)) + timestamp + api_secret ) )
//! ```
//!
//! with a straight byte concatenation, no delimiter. Two details of this
//! contract are easy to get wrong and make every call fail authentication:
//!
//! - The timestamp is captured once per request, in integer milliseconds,
//!   and the exact same string goes into both the hash input and the
//!   `X-Timestamp` header.
//! - The hash input is the *unescaped* JSON text, not the literal encoder
//!   output: any backslash escape the JSON encoder introduced is reversed
//!   before hashing (C-style unescape semantics on the server side).
//!
//! Signing is pure computation over already-validated inputs and cannot
//! fail at runtime.

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalParams;
use crate::config::Credentials;

/// Content type sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Authentication headers for one signed request.
#[derive(Debug, Clone)]
pub struct SignedHeaders {
	/// Always `application/json`.
	pub content_type: &'static str,
	/// `X-Api-Key` value.
	pub api_key: String,
	/// `X-Signature` value: lowercase hex SHA-256 digest.
	pub signature: String,
	/// `X-Timestamp` value: integer milliseconds since epoch, byte-identical
	/// to the string used in the hash input.
	pub timestamp: String,
}

/// Current time in integer milliseconds since epoch, as a string.
pub fn timestamp_millis() -> String {
	Utc::now().timestamp_millis().to_string()
}

/// Produce the authentication headers for a request.
pub fn sign(params: &CanonicalParams, timestamp: &str, credentials: &Credentials) -> SignedHeaders {
	let json = params.to_json();
	let unescaped = strip_backslash_escapes(&json);

	let mut hasher = Sha256::new();
	hasher.update(unescaped.as_bytes());
	hasher.update(timestamp.as_bytes());
	hasher.update(credentials.api_secret().as_bytes());
	let signature = hex::encode(hasher.finalize());

	SignedHeaders {
		content_type: CONTENT_TYPE_JSON,
		api_key: credentials.api_key().to_string(),
		signature,
		timestamp: timestamp.to_string(),
	}
}

/// Reverse backslash escaping in JSON encoder output (C-style unescape).
///
/// Recognized escapes decode to their control character; any other escape
/// drops the backslash and keeps the following character (so `\"` becomes
/// `"` and `\uXXXX` becomes `uXXXX`). Octal and hex escapes never appear in
/// JSON encoder output and are not handled. A trailing lone backslash is
/// dropped.
pub fn strip_backslash_escapes(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	let mut chars = input.chars();
	while let Some(c) = chars.next() {
		if c != '\\' {
			out.push(c);
			continue;
		}
		match chars.next() {
			Some('a') => out.push('\u{07}'),
			Some('b') => out.push('\u{08}'),
			Some('t') => out.push('\t'),
			Some('n') => out.push('\n'),
			Some('v') => out.push('\u{0B}'),
			Some('f') => out.push('\u{0C}'),
			Some('r') => out.push('\r'),
			Some(other) => out.push(other),
			None => {}
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use serde_json::{Map, Value};

	use super::*;
	use crate::transport::Method;

	fn credentials() -> Credentials {
		Credentials::new("test-key", "test-secret", "https://example.com").unwrap()
	}

	fn fields(pairs: &[(&str, &str)]) -> Map<String, Value> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), Value::from(*v)))
			.collect()
	}

	#[test]
	fn test_signature_known_vector_post() {
		// Canonical JSON:
		// {"body_name":"alice","body_operation_id":"OPID123","path_url":"/v1beta1/account"}
		let fields = fields(&[("name", "alice"), ("operation_id", "OPID123")]);
		let params = CanonicalParams::build("/v1beta1/account", &fields, Method::Post);
		let headers = sign(&params, "1724900000000", &credentials());
		assert_eq!(
			headers.signature,
			"d55da270afa1ced97cdefa359d4fd2f39b86deedf09e3a8b2069895e2a1954ae"
		);
		assert_eq!(headers.timestamp, "1724900000000");
		assert_eq!(headers.api_key, "test-key");
		assert_eq!(headers.content_type, "application/json");
	}

	#[test]
	fn test_signature_known_vector_unicode() {
		// Non-ASCII passes through unescaped, exactly as hashed by the server.
		let fields = fields(&[("name", "文昌链")]);
		let params = CanonicalParams::build("/v1beta1/nft/classes", &fields, Method::Get);
		let headers = sign(&params, "1724900000000", &credentials());
		assert_eq!(
			headers.signature,
			"7ce0d684690dcfe55cfa323ff6ac85e13c73221f0da8841cc598bc6af1875b95"
		);
	}

	#[test]
	fn test_signature_known_vector_escaped_quotes() {
		// Encoder output {"body_note":"say \"hi\"","path_url":"/x"} hashes as
		// the unescaped text {"body_note":"say "hi"","path_url":"/x"}.
		let creds = Credentials::new("k", "s", "https://example.com").unwrap();
		let fields = fields(&[("note", "say \"hi\"")]);
		let params = CanonicalParams::build("/x", &fields, Method::Post);
		let headers = sign(&params, "1", &creds);
		assert_eq!(
			headers.signature,
			"09b450086f6818976b9e4435130985b480383553316dd6f0cfe2f772ddecf6c0"
		);
	}

	#[test]
	fn test_signature_is_deterministic() {
		let fields = fields(&[("a", "1"), ("b", "2")]);
		let params = CanonicalParams::build("/p", &fields, Method::Post);
		let first = sign(&params, "1700000000000", &credentials());
		let second = sign(&params, "1700000000000", &credentials());
		assert_eq!(first.signature, second.signature);
		assert_eq!(first.signature.len(), 64);
		assert!(first.signature.chars().all(|c| c.is_ascii_hexdigit()));
		assert!(!first.signature.chars().any(|c| c.is_ascii_uppercase()));
	}

	#[test]
	fn test_timestamp_millis_format() {
		let ts = timestamp_millis();
		assert!(ts.len() >= 13);
		assert!(ts.chars().all(|c| c.is_ascii_digit()));
	}

	#[test]
	fn test_strip_backslash_escapes() {
		assert_eq!(strip_backslash_escapes(r"a\nb"), "a\nb");
		assert_eq!(strip_backslash_escapes(r"a\tb"), "a\tb");
		assert_eq!(strip_backslash_escapes(r#"say \"hi\""#), "say \"hi\"");
		assert_eq!(strip_backslash_escapes(r"a\\b"), r"a\b");
		// Unknown escapes keep the character, drop the backslash.
		assert_eq!(strip_backslash_escapes("\\u4e2d"), "u4e2d");
		// Trailing lone backslash is dropped.
		assert_eq!(strip_backslash_escapes("tail\\"), "tail");
		assert_eq!(strip_backslash_escapes("plain"), "plain");
	}
}
