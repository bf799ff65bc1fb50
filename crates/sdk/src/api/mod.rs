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

//! Per-resource call builders
//!
//! Thin parameter-assembly glue over [`crate::Avata::request`]: each method
//! maps one API endpoint, builds its field map and hands it to the core
//! pipeline. Optional parameters are omitted from the map entirely (never
//! sent empty), matching what the server signs against.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

pub mod account;
pub mod mt;
pub mod nft;
pub mod recharge;
pub mod tx;

pub use account::AccountApi;
pub use mt::MtApi;
pub use nft::NftApi;
pub use recharge::RechargeApi;
pub use tx::TxApi;

/// Version prefix shared by every endpoint.
pub(crate) const API_VERSION: &str = "/v1beta1";

/// Transaction tags: custom key/value metadata attached to a mutation.
pub type Tags = BTreeMap<String, String>;

pub(crate) fn action_url(name: &str) -> String {
	format!("{}/{}", API_VERSION, name)
}

/// Flatten a serializable parameter struct into a field map.
pub(crate) fn to_fields<T: Serialize>(request: &T) -> Map<String, Value> {
	match serde_json::to_value(request).expect("request parameters serialize to JSON") {
		Value::Object(map) => map,
		_ => Map::new(),
	}
}

/// Serialize an optional counter as a decimal string, the way the server
/// expects cursors and page sizes.
pub(crate) fn u64_as_string<S: Serializer>(
	value: &Option<u64>,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	match value {
		Some(v) => serializer.serialize_str(&v.to_string()),
		None => serializer.serialize_none(),
	}
}

/// Sort order for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortBy {
	#[serde(rename = "DATE_ASC")]
	DateAsc,
	#[serde(rename = "DATE_DESC")]
	DateDesc,
}

/// Shared date-range and paging filters for list queries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageQuery {
	/// Date range start, `yyyy-MM-dd` (UTC).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start_date: Option<String>,
	/// Date range end, `yyyy-MM-dd` (UTC).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub end_date: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sort_by: Option<SortBy>,
	/// Cursor, defaults to 0 server-side.
	#[serde(skip_serializing_if = "Option::is_none", serialize_with = "u64_as_string")]
	pub offset: Option<u64>,
	/// Page size, defaults to 10 server-side, capped at 50.
	#[serde(skip_serializing_if = "Option::is_none", serialize_with = "u64_as_string")]
	pub limit: Option<u64>,
}

/// Shared filters for per-object operation-history queries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HistoryQuery {
	/// Tx signer address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub signer: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tx_hash: Option<String>,
	/// Operation type filter (e.g. `mint` / `edit` / `transfer` / `burn`).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub operation: Option<String>,
	#[serde(flatten)]
	pub page: PageQuery,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_page_query_omits_unset_fields() {
		let fields = to_fields(&PageQuery::default());
		assert!(fields.is_empty());
	}

	#[test]
	fn test_page_query_counters_serialize_as_strings() {
		let query = PageQuery {
			offset: Some(0),
			limit: Some(50),
			..Default::default()
		};
		let fields = to_fields(&query);
		assert_eq!(fields.get("offset"), Some(&Value::from("0")));
		assert_eq!(fields.get("limit"), Some(&Value::from("50")));
	}

	#[test]
	fn test_sort_by_wire_names() {
		assert_eq!(serde_json::to_value(SortBy::DateAsc).unwrap(), "DATE_ASC");
		assert_eq!(serde_json::to_value(SortBy::DateDesc).unwrap(), "DATE_DESC");
	}

	#[test]
	fn test_history_query_flattens_page() {
		let query = HistoryQuery {
			signer: Some("addr".to_string()),
			page: PageQuery {
				limit: Some(10),
				..Default::default()
			},
			..Default::default()
		};
		let fields = to_fields(&query);
		assert_eq!(fields.get("signer"), Some(&Value::from("addr")));
		assert_eq!(fields.get("limit"), Some(&Value::from("10")));
		assert!(!fields.contains_key("page"));
	}

	#[test]
	fn test_action_url() {
		assert_eq!(action_url("nft/classes"), "/v1beta1/nft/classes");
	}
}
