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


use crate::storage::types::request_parameters::{impl_generic_request, parameter_list};
use crate::storage::types::{
    Delimiter, GenericRequest, MaxResults, Prefix, Projection, UserProject, Versions,
    dump_parameters,
};
use std::fmt;

parameter_list! {
    /// Optional parameters accepted by [`ListObjectsRequest`].
    pub struct ListObjectsParameters {
        delimiter: Delimiter,
        max_results: MaxResults,
        prefix: Prefix,
        projection: Projection,
        user_project: UserProject,
        versions: Versions,
    }
}

/// Requests one page of the objects in a bucket.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListObjectsRequest {
    bucket_name: String,
    page_token: String,
    parameters: ListObjectsParameters,
}

impl_generic_request!(ListObjectsRequest, ListObjectsParameters);

impl ListObjectsRequest {
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            ..Default::default()
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Token of the page to fetch, empty for the first page.
    pub fn page_token(&self) -> &str {
        &self.page_token
    }

    pub fn set_page_token(&mut self, page_token: impl Into<String>) -> &mut Self {
        self.page_token = page_token.into();
        self
    }
}

impl fmt::Display for ListObjectsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListObjectsRequest={{bucket_name={}, page_token={}",
            self.bucket_name, self.page_token
        )?;
        dump_parameters(f, self.parameters(), ", ")?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_declaration_order() {
        let request = ListObjectsRequest::new("my-bucket").with_parameters((
            Versions::new(true),
            Prefix::new("logs/"),
            Delimiter::new("/"),
        ));
        assert_eq!(
            request.to_string(),
            "ListObjectsRequest={bucket_name=my-bucket, page_token=, delimiter=/, prefix=logs/, versions=true}"
        );
    }
}
