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


use bytes::Bytes;
use cloud_storage::storage::response::ReadObjectRangeResponse;
use cloud_storage::storage::types::{BucketMetadata, ObjectMetadata};
use rand::RngCore;
use rand::distr::{Alphanumeric, SampleString};

pub fn rand_bucket_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
}

pub fn rand_object_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}

pub fn rand_contents(size: usize) -> Bytes {
    let mut buf = vec![0; size];
    rand::rng().fill_bytes(&mut buf);
    Bytes::from(buf)
}

pub fn bucket(name: &str) -> BucketMetadata {
    BucketMetadata {
        kind: "storage#bucket".to_string(),
        id: name.to_string(),
        name: name.to_string(),
        location: "US".to_string(),
        storage_class: "STANDARD".to_string(),
        metageneration: 1,
        ..Default::default()
    }
}

pub fn object(bucket_name: &str, object_name: &str, size: u64) -> ObjectMetadata {
    ObjectMetadata {
        kind: "storage#object".to_string(),
        id: format!("{bucket_name}/{object_name}/1"),
        bucket: bucket_name.to_string(),
        name: object_name.to_string(),
        generation: 1,
        metageneration: 1,
        size,
        ..Default::default()
    }
}

/// The response to a range read of `[begin, end)` of `contents`.
pub fn range_of(contents: &Bytes, begin: u64, end: u64) -> ReadObjectRangeResponse {
    let size = contents.len() as u64;
    let end = end.min(size);
    let begin = begin.min(end);
    ReadObjectRangeResponse {
        contents: contents.slice(begin as usize..end as usize),
        first_byte: begin,
        last_byte: end.saturating_sub(1),
        object_size: size,
    }
}
