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

//! NFT class and token endpoints
//!
//! Covers class issuance and transfer, minting, editing, burning, their
//! batch variants, and the corresponding list/detail/history queries. Batch
//! mutations cap at 10 objects server-side and take the caller's operation
//! id verbatim so a retry of the same batch stays idempotent.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{HistoryQuery, PageQuery, Tags, action_url, to_fields};
use crate::client::Avata;
use crate::error::Error;
use crate::operation::resolve_operation_id;
use crate::response::ResponseEnvelope;
use crate::transport::Method;

/// Parameters for creating an NFT class.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateClassRequest {
	/// Class name.
	pub name: String,
	/// Class owner address; holds mint and class-transfer rights.
	pub owner: String,
	/// Class id, lowercase alphanumeric starting with a letter. Assigned by
	/// the chain when omitted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub class_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub symbol: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Off-chain data link.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uri: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uri_hash: Option<String>,
	/// Custom on-chain metadata.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<Tags>,
}

/// Filters for listing NFT classes.
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

/// Parameters for minting an NFT into a class.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MintRequest {
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uri: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uri_hash: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,
	/// Recipient address; defaults to the class owner when omitted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<Tags>,
}

/// Parameters for editing an NFT.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditRequest {
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uri: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<Tags>,
}

/// Parameters for batch-minting NFTs into a class.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchMintRequest {
	pub name: String,
	/// Recipient addresses and per-address amounts.
	pub recipients: Vec<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uri: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uri_hash: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<Tags>,
}

/// Filters for listing NFTs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NftQuery {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// NFT name, fuzzy match.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub class_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tx_hash: Option<String>,
	/// `active` / `burned`; server default is `active`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(flatten)]
	pub page: PageQuery,
}

/// Call builder for NFT endpoints.
pub struct NftApi<'a> {
	client: &'a Avata,
}

impl<'a> NftApi<'a> {
	pub(crate) fn new(client: &'a Avata) -> Self {
		Self { client }
	}

	/// Create an NFT class. An empty `operation_id` is replaced with a
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
			.request(&action_url("nft/classes"), fields, Method::Post)
			.await
	}

	/// List NFT classes.
	pub async fn classes(&self, query: &ClassQuery) -> Result<ResponseEnvelope, Error> {
		self.client
			.request(&action_url("nft/classes"), to_fields(query), Method::Get)
			.await
	}

	/// Fetch one NFT class.
	pub async fn class(&self, id: &str) -> Result<ResponseEnvelope, Error> {
		let path = action_url(&format!("nft/classes/{}", id));
		self.client.request(&path, Map::new(), Method::Get).await
	}

	/// Transfer an NFT class to another account.
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
		let path = action_url(&format!("nft/class-transfers/{}/{}", class_id, owner));
		self.client.request(&path, fields, Method::Post).await
	}

	/// Mint an NFT. An empty `operation_id` is replaced with a generated
	/// token.
	pub async fn mint(
		&self,
		class_id: &str,
		request: &MintRequest,
		operation_id: &str,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = to_fields(request);
		fields.insert(
			"operation_id".to_string(),
			Value::from(resolve_operation_id(operation_id)),
		);
		let path = action_url(&format!("nft/nfts/{}", class_id));
		self.client.request(&path, fields, Method::Post).await
	}

	/// Transfer an NFT to another account.
	pub async fn transfer(
		&self,
		class_id: &str,
		owner: &str,
		nft_id: &str,
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
		let path = action_url(&format!("nft/nft-transfers/{}/{}/{}", class_id, owner, nft_id));
		self.client.request(&path, fields, Method::Post).await
	}

	/// Edit an owned NFT. The operation id is taken verbatim.
	pub async fn edit(
		&self,
		class_id: &str,
		owner: &str,
		nft_id: &str,
		request: &EditRequest,
		operation_id: &str,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = to_fields(request);
		fields.insert("operation_id".to_string(), Value::from(operation_id));
		let path = action_url(&format!("nft/nfts/{}/{}/{}", class_id, owner, nft_id));
		self.client.request(&path, fields, Method::Patch).await
	}

	/// Burn an owned NFT. The operation id is taken verbatim.
	pub async fn burn(
		&self,
		class_id: &str,
		owner: &str,
		nft_id: &str,
		operation_id: &str,
		tag: Option<&Tags>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("operation_id".to_string(), Value::from(operation_id));
		insert_tag(&mut fields, tag);
		let path = action_url(&format!("nft/nfts/{}/{}/{}", class_id, owner, nft_id));
		self.client.request(&path, fields, Method::Delete).await
	}

	/// Mint a batch of NFTs into a class.
	pub async fn batch_mint(
		&self,
		class_id: &str,
		request: &BatchMintRequest,
		operation_id: &str,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = to_fields(request);
		fields.insert("operation_id".to_string(), Value::from(operation_id));
		let path = action_url(&format!("nft/batch/nfts/{}", class_id));
		self.client.request(&path, fields, Method::Post).await
	}

	/// Transfer a batch of NFTs held by `owner`.
	pub async fn batch_transfer(
		&self,
		owner: &str,
		data: Vec<Value>,
		operation_id: &str,
		tag: Option<&Tags>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("operation_id".to_string(), Value::from(operation_id));
		fields.insert("data".to_string(), Value::from(data));
		insert_tag(&mut fields, tag);
		let path = action_url(&format!("nft/batch/nft-transfers/{}", owner));
		self.client.request(&path, fields, Method::Post).await
	}

	/// Edit a batch of NFTs held by `owner`.
	pub async fn batch_edit(
		&self,
		owner: &str,
		nfts: Vec<Value>,
		operation_id: &str,
		tag: Option<&Tags>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("operation_id".to_string(), Value::from(operation_id));
		fields.insert("nfts".to_string(), Value::from(nfts));
		insert_tag(&mut fields, tag);
		let path = action_url(&format!("nft/batch/nfts/{}", owner));
		self.client.request(&path, fields, Method::Patch).await
	}

	/// Burn a batch of NFTs held by `owner`.
	pub async fn batch_burn(
		&self,
		owner: &str,
		nfts: Vec<Value>,
		operation_id: &str,
		tag: Option<&Tags>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("operation_id".to_string(), Value::from(operation_id));
		fields.insert("nfts".to_string(), Value::from(nfts));
		insert_tag(&mut fields, tag);
		let path = action_url(&format!("nft/batch/nfts/{}", owner));
		self.client.request(&path, fields, Method::Delete).await
	}

	/// List NFTs.
	pub async fn list(&self, query: &NftQuery) -> Result<ResponseEnvelope, Error> {
		self.client
			.request(&action_url("nft/nfts"), to_fields(query), Method::Get)
			.await
	}

	/// Fetch one NFT.
	pub async fn detail(&self, class_id: &str, nft_id: &str) -> Result<ResponseEnvelope, Error> {
		let path = action_url(&format!("nft/nfts/{}/{}", class_id, nft_id));
		self.client.request(&path, Map::new(), Method::Get).await
	}

	/// List on-chain operation records of one NFT.
	pub async fn history(
		&self,
		class_id: &str,
		nft_id: &str,
		query: &HistoryQuery,
	) -> Result<ResponseEnvelope, Error> {
		let path = action_url(&format!("nft/nfts/{}/{}/history", class_id, nft_id));
		self.client.request(&path, to_fields(query), Method::Get).await
	}
}

pub(crate) fn insert_tag(fields: &mut Map<String, Value>, tag: Option<&Tags>) {
	if let Some(tag) = tag {
		if !tag.is_empty() {
			fields.insert(
				"tag".to_string(),
				serde_json::to_value(tag).expect("tags serialize to JSON"),
			);
		}
	}
}
