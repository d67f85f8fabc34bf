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

//! Bucket, object and access control metadata as returned by the JSON API

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Accepts a JSON number or a JSON string holding a number.
///
/// The JSON API encodes 64-bit integers as strings.
mod string_or_number {
    use serde::{Deserialize, Deserializer};
    use std::fmt::Display;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber<T> {
        Number(T),
        String(String),
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Deserialize<'de>,
        T::Err: Display,
    {
        match StringOrNumber::<T>::deserialize(deserializer)? {
            StringOrNumber::Number(v) => Ok(v),
            StringOrNumber::String(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Metadata of a bucket.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BucketMetadata {
    pub kind: String,
    pub id: String,
    pub self_link: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub project_number: i64,
    pub name: String,
    pub time_created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub metageneration: i64,
    pub location: String,
    pub storage_class: String,
    pub etag: String,
}

impl BucketMetadata {
    pub fn parse_from_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl fmt::Display for BucketMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BucketMetadata={{id={}, name={}, location={}, storage_class={}, metageneration={}, etag={}}}",
            self.id, self.name, self.location, self.storage_class, self.metageneration, self.etag
        )
    }
}

/// Metadata of an object.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMetadata {
    pub kind: String,
    pub id: String,
    pub self_link: String,
    pub name: String,
    pub bucket: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub generation: i64,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub metageneration: i64,
    pub content_type: String,
    pub content_encoding: String,
    pub time_created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub storage_class: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub size: u64,
    pub md5_hash: String,
    pub crc32c: String,
    pub media_link: String,
    pub etag: String,
    pub metadata: HashMap<String, String>,
}

impl ObjectMetadata {
    pub fn parse_from_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl fmt::Display for ObjectMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ObjectMetadata={{bucket={}, name={}, generation={}, metageneration={}, size={}, content_type={}, etag={}}}",
            self.bucket,
            self.name,
            self.generation,
            self.metageneration,
            self.size,
            self.content_type,
            self.etag
        )
    }
}

/// One entry of an object's access control list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectAccessControl {
    pub kind: String,
    pub id: String,
    pub bucket: String,
    pub object: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub generation: i64,
    pub entity: String,
    pub entity_id: String,
    pub role: String,
    pub email: String,
    pub domain: String,
    pub etag: String,
}

impl fmt::Display for ObjectAccessControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ObjectAccessControl={{bucket={}, object={}, entity={}, role={}}}",
            self.bucket, self.object, self.entity, self.role
        )
    }
}
