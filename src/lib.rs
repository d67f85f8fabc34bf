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

//! # Cloud Storage Rust Client (`cloud-storage`)
//!
//! This crate provides a strongly-typed, blocking interface to a cloud object
//! storage JSON API.
//!
//! Every operation is described by a request value (e.g.
//! [`storage::request::GetBucketMetadataRequest`]) that carries its required
//! fields plus a closed, compile-time checked set of optional parameters.
//! Requests are dispatched through a [`storage::RawClient`], and the public
//! [`storage::Client`] wraps that raw client with a retry decorator, and
//! optionally a logging decorator, before anything reaches the transport.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use cloud_storage::storage::Client;
//! use cloud_storage::storage::types::{IfMetagenerationMatch, UserProject};
//!
//! fn main() -> Result<(), cloud_storage::storage::error::Error> {
//!     let client = Client::new()?;
//!
//!     let metadata = client.get_bucket_metadata(
//!         "my-bucket",
//!         (IfMetagenerationMatch::new(4), UserProject::new("my-project")),
//!     )?;
//!     println!("bucket {} lives in {}", metadata.name, metadata.location);
//!
//!     for object in client.list_objects("my-bucket", ()) {
//!         println!("{}", object?.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//! - [`storage::RawClient`] is the seam: one method per operation, failures
//!   are reported as [`storage::Status`] values, never by panicking
//! - [`storage::LoggingClient`] and [`storage::RetryClient`] decorate any raw client
//! - [`storage::RetryClient`] is the single place where a failed status becomes
//!   a user-visible [`storage::error::Error`]

#![allow(clippy::result_large_err)]
pub mod storage;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
