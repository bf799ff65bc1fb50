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

//! On-chain transaction result endpoints
//!
//! Every mutation produces a unique operation id; these endpoints correlate
//! an operation id with its on-chain outcome and queue position.

use serde_json::{Map, Value};

use super::action_url;
use crate::client::Avata;
use crate::error::Error;
use crate::response::ResponseEnvelope;
use crate::transport::Method;

/// Call builder for transaction result endpoints.
pub struct TxApi<'a> {
	client: &'a Avata,
}

impl<'a> TxApi<'a> {
	pub(crate) fn new(client: &'a Avata) -> Self {
		Self { client }
	}

	/// Fetch the on-chain result of an operation: status, tx info and
	/// details.
	pub async fn result(&self, operation_id: &str) -> Result<ResponseEnvelope, Error> {
		let path = action_url(&format!("tx/{}", operation_id));
		self.client.request(&path, Map::new(), Method::Get).await
	}

	/// Fetch the chain-transaction queue status, optionally scoped to one
	/// operation id.
	pub async fn queue_info(&self, operation_id: &str) -> Result<ResponseEnvelope, Error> {
		let mut fields = Map::new();
		fields.insert("operation_id".to_string(), Value::from(operation_id));
		self.client
			.request(&action_url("tx/queue/info"), fields, Method::Get)
			.await
	}
}
