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

//! MT (multi-token) class and token endpoints
//!
//! MTs are fungible-within-an-id tokens: issuance creates a new MT id with
//! an initial amount, minting adds supply to an existing id, and transfers
//! and burns move or destroy a chosen amount. Amounts default to 1
//! server-side when omitted.

use serde::Serialize;
use serde_json::{Map, Value};

use super::nft::insert_tag;
use super::{HistoryQuery, PageQuery, Tags, action_url, to_fields, u64_as_string};
use crate::client::Avata;
use crate::error::Error;
use crate::operation::resolve_operation_id;
use crate::response::ResponseEnvelope;
use crate::transport::Method;

/// Parameters for creating an MT class.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateClassRequest {
	pub name: String,
	pub owner: String,
	/// Custom on-chain metadata.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<Tags>,
}

/// Filters for listing MT classes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassQuery {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Class name, fuzzy match.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tx_hash: Option<String>,
	#[serde(flatten)]
	pub page: PageQuery,
}

/// Parameters for issuing a new MT into a class.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueRequest {
	/// Initial amount; server default is 1.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<u64>,
	/// Recipient address; defaults to the class owner when omitted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<String>,
	/// Custom on-chain metadata.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<Tags>,
}

/// Filters for listing MTs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MtQuery {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub class_id: Option<String>,
	/// Issuer address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub issuer: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tx_hash: Option<String>,
	#[serde(flatten)]
	pub page: PageQuery,
}

/// Filters for listing an account's MT balances within a class.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BalanceQuery {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", serialize_with = "u64_as_string")]
	pub offset: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none", serialize_with = "u64_as_string")]
	pub limit: Option<u64>,
}

/// Call builder for MT endpoints.
pub struct MtApi<'a> {
	client: &'a Avata,
}

impl<'a> MtApi<'a> {
	pub(crate) fn new(client: &'a Avata) -> Self {
		Self { client }
	}

	/// Create an MT class. An empty `operation_id` is replaced with a
	/// generated token.
	pub async fn create_class(
		&self,
		request: &CreateClassRequest,
		operation_id: &str,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = to_fields(request);
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		self.client
			.request(&action_url("mt/classes"), fields, Method::Post)
			.await
	}

	/// List MT classes.
	pub async fn classes(&self, query: &ClassQuery) -> Result<ResponseEnvelope, Error> {
		self.client
			.request(&action_url("mt/classes"), to_fields(query), Method::Get)
			.await
	}

	/// Fetch one MT class.
	pub async fn class(&self, id: &str) -> Result<ResponseEnvelope, Error> {
		let path = action_url(&format!("mt/classes/{}", id));
		self.client.request(&path, Map::new(), Method::Get).await
	}

	/// Transfer an MT class to another account.
	pub async fn transfer_class(
		&self,
		class_id: &str,
		owner: &str,
		recipient: &str,
		operation_id: &str,
		tag: Option<&Tags>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("recipient".to_string(), Value::from(recipient));
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		insert_tag(&mut fields, tag);
		let path = action_url(&format!("mt/class-transfers/{}/{}", class_id, owner));
		self.client.request(&path, fields, Method::Post).await
	}

	/// Issue a new MT into a class.
	pub async fn issue(
		&self,
		class_id: &str,
		request: &IssueRequest,
		operation_id: &str,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = to_fields(request);
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		let path = action_url(&format!("mt/mt-issues/{}", class_id));
		self.client.request(&path, fields, Method::Post).await
	}

	/// Mint additional supply of an existing MT.
	pub async fn mint(
		&self,
		class_id: &str,
		mt_id: &str,
		amount: Option<u64>,
		recipient: Option<&str>,
		operation_id: &str,
		tag: Option<&Tags>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		if let Some(amount) = amount {
			fields.insert("amount".to_string(), Value::from(amount));
		}
		if let Some(recipient) = recipient {
			fields.insert("recipient".to_string(), Value::from(recipient));
		}
		insert_tag(&mut fields, tag);
		let path = action_url(&format!("mt/mt-mints/{}/{}", class_id, mt_id));
		self.client.request(&path, fields, Method::Post).await
	}

	/// Transfer an amount of an MT to another account.
	pub async fn transfer(
		&self,
		class_id: &str,
		owner: &str,
		mt_id: &str,
		recipient: &str,
		amount: Option<u64>,
		operation_id: &str,
		tag: Option<&Tags>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("recipient".to_string(), Value::from(recipient));
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		if let Some(amount) = amount {
			fields.insert("amount".to_string(), Value::from(amount));
		}
		insert_tag(&mut fields, tag);
		let path = action_url(&format!("mt/mt-transfers/{}/{}/{}", class_id, owner, mt_id));
		self.client.request(&path, fields, Method::Post).await
	}

	/// Edit the on-chain metadata of an owned MT.
	pub async fn edit(
		&self,
		class_id: &str,
		owner: &str,
		mt_id: &str,
		data: &str,
		operation_id: &str,
		tag: Option<&Tags>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("data".to_string(), Value::from(data));
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		insert_tag(&mut fields, tag);
		let path = action_url(&format!("mt/mts/{}/{}/{}", class_id, owner, mt_id));
		self.client.request(&path, fields, Method::Patch).await
	}

	/// Burn an amount of an owned MT.
	pub async fn burn(
		&self,
		class_id: &str,
		owner: &str,
		mt_id: &str,
		amount: Option<u64>,
		operation_id: &str,
		tag: Option<&Tags>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		if let Some(amount) = amount {
			fields.insert("amount".to_string(), Value::from(amount));
		}
		insert_tag(&mut fields, tag);
		let path = action_url(&format!("mt/mts/{}/{}/{}", class_id, owner, mt_id));
		self.client.request(&path, fields, Method::Delete).await
	}

	/// List MTs.
	pub async fn list(&self, query: &MtQuery) -> Result<ResponseEnvelope, Error> {
		self.client
			.request(&action_url("mt/mts"), to_fields(query), Method::Get)
			.await
	}

	/// Fetch one MT.
	pub async fn detail(&self, class_id: &str, mt_id: &str) -> Result<ResponseEnvelope, Error> {
		let path = action_url(&format!("mt/mts/{}/{}", class_id, mt_id));
		self.client.request(&path, Map::new(), Method::Get).await
	}

	/// List on-chain operation records of one MT.
	pub async fn history(
		&self,
		class_id: &str,
		mt_id: &str,
		query: &HistoryQuery,
	) -> Result<ResponseEnvelope, Error> {
		let path = action_url(&format!("mt/mts/{}/{}/history", class_id, mt_id));
		self.client.request(&path, to_fields(query), Method::Get).await
	}

	/// List an account's MT balances within a class.
	pub async fn balance(
		&self,
		class_id: &str,
		account: &str,
		query: &BalanceQuery,
	) -> Result<ResponseEnvelope, Error> {
		let path = action_url(&format!("mt/mts/{}/{}/balance", class_id, account));
		self.client.request(&path, to_fields(query), Method::Get).await
	}
}
