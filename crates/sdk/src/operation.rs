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

//! Idempotency token handling
//!
//! The server deduplicates mutating operations by a caller-chosen operation
//! id. A caller-supplied token passes through unchanged so it stays stable
//! across retries; only when the caller supplies none does the SDK mint one.

use uuid::Uuid;

/// Resolve an operation id.
///
/// Non-empty input is returned unchanged. Empty input yields a fresh
/// 32-character uppercase hex token. Uniqueness is collision-resistance of
/// the underlying random source, nothing stronger.
pub fn resolve_operation_id(operation_id: &str) -> String {
	if !operation_id.is_empty() {
		return operation_id.to_string();
	}
	Uuid::new_v4().simple().to_string().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_passthrough_unchanged() {
		assert_eq!(resolve_operation_id("ABC"), "ABC");
		assert_eq!(resolve_operation_id("op_123-x"), "op_123-x");
	}

	#[test]
	fn test_generated_token_shape() {
		let token = resolve_operation_id("");
		assert_eq!(token.len(), 32);
		assert!(token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
	}

	#[test]
	fn test_consecutive_tokens_differ() {
		assert_ne!(resolve_operation_id(""), resolve_operation_id(""));
	}
}
