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
use crate::storage::types::{Generation, GenericRequest, UserProject, dump_parameters};
use std::fmt;

parameter_list! {
    /// Optional parameters accepted by [`ListObjectAclRequest`].
    pub struct ListObjectAclParameters {
        generation: Generation,
        user_project: UserProject,
    }
}

/// Lists the access control entries of an object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListObjectAclRequest {
    bucket_name: String,
    object_name: String,
    parameters: ListObjectAclParameters,
}

impl_generic_request!(ListObjectAclRequest, ListObjectAclParameters);

impl ListObjectAclRequest {
    pub fn new(bucket_name: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            object_name: object_name.into(),
            ..Default::default()
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }
}

impl fmt::Display for ListObjectAclRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListObjectAclRequest={{bucket_name={}, object_name={}",
            self.bucket_name, self.object_name
        )?;
        dump_parameters(f, self.parameters(), ", ")?;
        write!(f, "}}")
    }
}
