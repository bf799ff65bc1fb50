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

//! Energy and business-fee recharge endpoints
//!
//! Orders are keyed by a caller-chosen order id (digits, letters and
//! underscores) rather than an operation id; the server deduplicates on it
//! the same way.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{PageQuery, action_url, to_fields};
use crate::client::Avata;
use crate::error::Error;
use crate::response::ResponseEnvelope;
use crate::transport::Method;

/// Recharge order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
	/// Energy (gas) purchase.
	Gas,
	/// Business fee purchase.
	Business,
}

/// Filters for listing recharge orders.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderQuery {
	/// `success` / `failed` / `pending`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(flatten)]
	pub page: PageQuery,
}

/// Call builder for recharge endpoints.
pub struct RechargeApi<'a> {
	client: &'a Avata,
}

impl<'a> RechargeApi<'a> {
	pub(crate) fn new(client: &'a Avata) -> Self {
		Self { client }
	}

	/// Buy energy or business fee for an account. `amount` is in cents,
	/// whole-yuan amounts only.
	pub async fn buy(
		&self,
		account: &str,
		amount: u64,
		order_type: OrderType,
		order_id: &str,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("account".to_string(), Value::from(account));
		fields.insert("amount".to_string(), Value::from(amount));
		fields.insert(
			"order_type".to_string(),
			serde_json::to_value(order_type).expect("order type serializes to JSON"),
		);
		fields.insert("order_id".to_string(), Value::from(order_id));
		self.client
			.request(&action_url("orders"), fields, Method::Post)
			.await
	}

	/// List recharge orders.
	pub async fn list(&self, query: &OrderQuery) -> Result<ResponseEnvelope, Error> {
		self.client
			.request(&action_url("orders"), to_fields(query), Method::Get)
			.await
	}

	/// Fetch one recharge order.
	pub async fn detail(&self, order_id: &str) -> Result<ResponseEnvelope, Error> {
		let path = action_url(&format!("orders/{}", order_id));
		self.client.request(&path, Map::new(), Method::Get).await
	}

	/// Buy energy for multiple accounts in one order.
	pub async fn batch_buy(
		&self,
		order_id: &str,
		list: Vec<Value>,
	) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("order_id".to_string(), Value::from(order_id));
		fields.insert("list".to_string(), Value::from(list));
		self.client
			.request(&action_url("orders/batch"), fields, Method::Post)
			.await
	}
}
