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

//! Canonical signature parameters
//!
//! The server verifies request signatures against a deterministic, sorted
//! key-value view of the request: the request path under the fixed key
//! `path_url`, plus every caller-supplied field under a verb-dependent
//! prefix (`query_` for reads, `body_` for mutations). Key order is part of
//! the wire contract, not an implementation detail: the map is sorted
//! lexicographically (byte-wise) before it is serialized for hashing.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::transport::Method;

/// Fixed key carrying the request path in the signature input.
const PATH_URL_KEY: &str = "path_url";

/// Deterministic, sorted key-value representation of a request used as
/// signature input. Built fresh per request.
#[derive(Debug, Clone)]
pub struct CanonicalParams {
	entries: BTreeMap<String, Value>,
}

impl CanonicalParams {
	/// Flatten a request into its canonical form.
	///
	/// `path` is the request path only, never the absolute URL. An empty
	/// field set still yields a map containing `path_url`.
	pub fn build(path: &str, fields: &Map<String, Value>, method: Method) -> Self {
		let mut entries = BTreeMap::new();
		entries.insert(PATH_URL_KEY.to_string(), Value::String(path.to_string()));

		let prefix = method.param_prefix();
		for (key, value) in fields {
			entries.insert(format!("{}_{}", prefix, key), value.clone());
		}

		Self { entries }
	}

	/// Serialize to compact JSON with keys in sorted order.
	///
	/// Nested objects also serialize with stable key order (serde_json's
	/// default map is ordered), so structured field values feed the hash
	/// deterministically. Non-ASCII characters pass through unescaped.
	pub fn to_json(&self) -> String {
		serde_json::to_string(&self.entries).expect("canonical parameters serialize to JSON")
	}

	/// Keys in sorted order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Number of entries, including `path_url`.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always false: `path_url` is unconditionally present.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
