// Cloud Storage Rust Client Library
// Copyright 2025 The cloud-storage Authors.
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

//! Implementation of the object storage client and its request pipeline

pub mod backoff_policy;
pub mod client;
pub mod creds;
pub mod error;
pub mod list_reader;
pub mod logging_client;
pub mod multimap_ext;
pub mod object_read_stream;
pub mod options;
pub mod raw_client;
pub mod request;
pub mod response;
pub mod rest_client;
pub mod retry_client;
pub mod retry_policy;
pub mod status;
pub mod types;

pub use client::{Client, ClientBuilder};
pub use logging_client::LoggingClient;
pub use options::ClientOptions;
pub use raw_client::RawClient;
pub use rest_client::RestClient;
pub use retry_client::RetryClient;
pub use status::{Status, StatusCode};
