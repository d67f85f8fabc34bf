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


//! Typed requests, one per storage operation.
//!
//! Every request carries the fields that identify the resource it acts on,
//! fixed at construction, plus the optional parameters declared for it.

mod delete_object;
mod get_bucket_metadata;
mod get_object_metadata;
mod insert_object_media;
mod list_buckets;
mod list_object_acl;
mod list_objects;
mod read_object_range;

pub use delete_object::*;
pub use get_bucket_metadata::*;
pub use get_object_metadata::*;
pub use insert_object_media::*;
pub use list_buckets::*;
pub use list_object_acl::*;
pub use list_objects::*;
pub use read_object_range::*;
