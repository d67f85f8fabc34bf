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
    Generation, GenericRequest, IfGenerationMatch, IfGenerationNotMatch, IfMetagenerationMatch,
    IfMetagenerationNotMatch, UserProject, dump_parameters,
};
use std::fmt;

parameter_list! {
    /// Optional parameters accepted by [`ReadObjectRangeRequest`].
    pub struct ReadObjectRangeParameters {
        generation: Generation,
        if_generation_match: IfGenerationMatch,
        if_generation_not_match: IfGenerationNotMatch,
        if_metageneration_match: IfMetagenerationMatch,
        if_metageneration_not_match: IfMetagenerationNotMatch,
        user_project: UserProject,
    }
}

/// Reads the bytes `[begin, end)` of an object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadObjectRangeRequest {
    bucket_name: String,
    object_name: String,
    begin: u64,
    end: u64,
    parameters: ReadObjectRangeParameters,
}

impl_generic_request!(ReadObjectRangeRequest, ReadObjectRangeParameters);

impl ReadObjectRangeRequest {
    pub fn new(
        bucket_name: impl Into<String>,
        object_name: impl Into<String>,
        begin: u64,
        end: u64,
    ) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            object_name: object_name.into(),
            begin,
            end,
            ..Default::default()
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Offset of the first byte requested.
    pub fn begin(&self) -> u64 {
        self.begin
    }

    /// Offset one past the last byte requested.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Moves the requested range to `[begin, end)`, keeping the parameters.
    pub fn set_range(&mut self, begin: u64, end: u64) -> &mut Self {
        self.begin = begin;
        self.end = end;
        self
    }

    /// Value of the HTTP `Range` header selecting `[begin, end)`, or `None`
    /// when the range is empty.
    pub fn range_header(&self) -> Option<String> {
        if self.end <= self.begin {
            return None;
        }
        Some(format!("bytes={}-{}", self.begin, self.end - 1))
    }
}

impl fmt::Display for ReadObjectRangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReadObjectRangeRequest={{bucket_name={}, object_name={}, begin={}, end={}",
            self.bucket_name, self.object_name, self.begin, self.end
        )?;
        dump_parameters(f, self.parameters(), ", ")?;
        write!(f, "}}")
    }
}
