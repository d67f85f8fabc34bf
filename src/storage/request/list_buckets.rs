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
    GenericRequest, MaxResults, Prefix, Projection, UserProject, dump_parameters,
};
use std::fmt;

parameter_list! {
    /// Optional parameters accepted by [`ListBucketsRequest`].
    pub struct ListBucketsParameters {
        max_results: MaxResults,
        prefix: Prefix,
        projection: Projection,
        user_project: UserProject,
    }
}

/// Requests one page of the buckets owned by a project.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListBucketsRequest {
    project_id: String,
    page_token: String,
    parameters: ListBucketsParameters,
}

impl_generic_request!(ListBucketsRequest, ListBucketsParameters);

impl ListBucketsRequest {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
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

impl fmt::Display for ListBucketsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListBucketsRequest={{project_id={}, page_token={}",
            self.project_id, self.page_token
        )?;
        dump_parameters(f, self.parameters(), ", ")?;
        write!(f, "}}")
    }
}
