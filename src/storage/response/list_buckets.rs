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


use super::write_items;
use crate::storage::types::BucketMetadata;
use serde::Deserialize;
use std::fmt;

/// One page of buckets.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListBucketsResponse {
    /// Token of the next page, empty on the last page.
    pub next_page_token: String,
    pub items: Vec<BucketMetadata>,
}

impl ListBucketsResponse {
    pub fn parse_from_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl fmt::Display for ListBucketsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListBucketsResponse={{next_page_token={}, items=",
            self.next_page_token
        )?;
        write_items(f, &self.items)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let text = r#"{
            "kind": "storage#buckets",
            "nextPageToken": "token-2",
            "items": [{"name": "b1"}, {"name": "b2"}]
        }"#;
        let response = ListBucketsResponse::parse_from_str(text).unwrap();
        assert_eq!(response.next_page_token, "token-2");
        let names: Vec<_> = response.items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["b1", "b2"]);
    }

    #[test]
    fn test_parse_last_empty_page() {
        let response = ListBucketsResponse::parse_from_str(r#"{"kind": "storage#buckets"}"#).unwrap();
        assert!(response.next_page_token.is_empty());
        assert!(response.items.is_empty());
    }
}
