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

//! Avata SDK - Client library for the Avata signed REST API
//!
//! The core of this crate is the request-signing and response-decoding
//! pipeline: a logical call (path, method, fields) is flattened into
//! canonical signature parameters, signed with the project secret, executed
//! over a replaceable transport, and decoded into a typed success/error
//! envelope. Per-resource call builders (accounts, NFT, MT, recharge, tx)
//! are thin glue over that pipeline.
//!
//! The SDK is designed to be lightweight and embeddable:
//! - No background threads
//! - No runtime initialization
//! - No environment or configuration loading
//!
//! ```no_run
//! use avata_sdk::{Avata, Credentials};
//!
//! # async fn run() -> Result<(), avata_sdk::Error> {
//! let credentials = Credentials::new("api-key", "api-secret", "https://stage.avata.bianjie.ai")?;
//! let client = Avata::new(credentials);
//! let response = client.account().create("my-account", "").await?;
//! println!("data: {:?}", response.data);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod canonical;
pub mod client;
pub mod config;
pub mod error;
pub mod operation;
pub mod response;
pub mod signing;
pub mod transport;

pub use api::{HistoryQuery, PageQuery, SortBy, Tags};
pub use canonical::CanonicalParams;
pub use client::{Avata, ClientOptions, SyncAvata};
pub use config::Credentials;
pub use error::Error;
pub use operation::resolve_operation_id;
pub use response::{ApiError, ResponseEnvelope};
pub use signing::{SignedHeaders, sign, timestamp_millis};
pub use transport::{HttpTransport, Method, RawResponse, Transport};
