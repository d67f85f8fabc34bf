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
use crate::storage::types::ObjectMetadata;
use serde::Deserialize;
use std::fmt;

/// One page of objects.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListObjectsResponse {
    /// Token of the next page, empty on the last page.
    pub next_page_token: String,
    pub items: Vec<ObjectMetadata>,
    /// Common prefixes when listing with a delimiter.
    pub prefixes: Vec<String>,
}

impl ListObjectsResponse {
    pub fn parse_from_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl fmt::Display for ListObjectsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListObjectsResponse={{next_page_token={}, prefixes=",
            self.next_page_token
        )?;
        write_items(f, &self.prefixes)?;
        write!(f, ", items=")?;
        write_items(f, &self.items)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_prefixes() {
        let text = r#"{
            "nextPageToken": "n",
            "prefixes": ["a/", "b/"],
            "items": [{"bucket": "bkt", "name": "top.txt", "size": "3"}]
        }"#;
        let response = ListObjectsResponse::parse_from_str(text).unwrap();
        assert_eq!(response.prefixes, vec!["a/", "b/"]);
        assert_eq!(response.items[0].size, 3);
    }

    #[test]
    fn test_display() {
        let response = ListObjectsResponse {
            next_page_token: "t".to_string(),
            ..Default::default()
        };
        assert_eq!(
            response.to_string(),
            "ListObjectsResponse={next_page_token=t, prefixes=[], items=[]}"
        );
    }
}
