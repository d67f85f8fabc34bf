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


//! Responses of the storage operations that do not return a bare metadata
//! resource

mod empty;
mod list_buckets;
mod list_object_acl;
mod list_objects;
mod read_object_range;

pub use empty::EmptyResponse;
pub use list_buckets::ListBucketsResponse;
pub use list_object_acl::ListObjectAclResponse;
pub use list_objects::ListObjectsResponse;
pub use read_object_range::ReadObjectRangeResponse;

use std::fmt;

/// Writes `[a, b, c]` using the `Display` impl of each item.
fn write_items<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
