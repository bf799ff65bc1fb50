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

//! Chain account endpoints

use serde::Serialize;
use serde_json::{Map, Value};

use super::{PageQuery, action_url, to_fields};
use crate::client::Avata;
use crate::error::Error;
use crate::operation::resolve_operation_id;
use crate::response::ResponseEnvelope;
use crate::transport::Method;

/// Filters for listing chain accounts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountQuery {
	/// Chain account address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account: Option<String>,
	/// Account name, fuzzy match.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Operation id returned when the account was created.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub operation_id: Option<String>,
	#[serde(flatten)]
	pub page: PageQuery,
}

/// Filters for listing chain account operation records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountHistoryQuery {
	pub account: String,
	pub tx_hash: String,
	/// Feature module: `nft` / `mt`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub module: Option<String>,
	/// Operation type, only meaningful with `module` set.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub operation: Option<String>,
	#[serde(flatten)]
	pub page: PageQuery,
}

/// Call builder for chain account endpoints.
pub struct AccountApi<'a> {
	client: &'a Avata,
}

impl<'a> AccountApi<'a> {
	pub(crate) fn new(client: &'a Avata) -> Self {
		Self { client }
	}

	/// Create a chain account. An empty `operation_id` is replaced with a
	/// generated token.
	pub async fn create(
		&self,
		name: &str,
		operation_id: &str,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("name".to_string(), Value::from(name));
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		self.client
			.request(&action_url("account"), fields, Method::Post)
			.await
	}

	/// Create a batch of chain accounts.
	pub async fn batch_create(
		&self,
		count: u32,
		operation_id: &str,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("count".to_string(), Value::from(count));
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		self.client
			.request(&action_url("accounts"), fields, Method::Post)
			.await
	}

	/// List chain accounts.
	pub async fn list(&self, query: &AccountQuery) -> Result<ResponseEnvelope, Error> {
		self.client
			.request(&action_url("accounts"), to_fields(query), Method::Get)
			.await
	}

	/// List chain account operation records.
	pub async fn history(&self, query: &AccountHistoryQuery) -> Result<ResponseEnvelope, Error> {
		self.client
			.request(&action_url("accounts"), to_fields(query), Method::Get)
			.await
	}
}
