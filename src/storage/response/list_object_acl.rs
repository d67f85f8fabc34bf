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
use crate::storage::types::ObjectAccessControl;
use serde::Deserialize;
use std::fmt;

/// Access control entries of an object.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListObjectAclResponse {
    pub items: Vec<ObjectAccessControl>,
}

impl ListObjectAclResponse {
    pub fn parse_from_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl fmt::Display for ListObjectAclResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListObjectAclResponse={{items=")?;
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
            "kind": "storage#objectAccessControls",
            "items": [
                {"bucket": "b", "object": "o", "generation": "5", "entity": "allUsers", "role": "READER"},
                {"bucket": "b", "object": "o", "entity": "project-owners-123", "role": "OWNER"}
            ]
        }"#;
        let response = ListObjectAclResponse::parse_from_str(text).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].generation, 5);
        assert_eq!(response.items[1].role, "OWNER");
    }
}
