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
    ContentEncoding, GenericRequest, IfGenerationMatch, IfGenerationNotMatch,
    IfMetagenerationMatch, IfMetagenerationNotMatch, PredefinedAcl, Projection, UserProject,
    dump_parameters,
};
use bytes::Bytes;
use std::fmt;

parameter_list! {
    /// Optional parameters accepted by [`InsertObjectMediaRequest`].
    pub struct InsertObjectMediaParameters {
        content_encoding: ContentEncoding,
        if_generation_match: IfGenerationMatch,
        if_generation_not_match: IfGenerationNotMatch,
        if_metageneration_match: IfMetagenerationMatch,
        if_metageneration_not_match: IfMetagenerationNotMatch,
        predefined_acl: PredefinedAcl,
        projection: Projection,
        user_project: UserProject,
    }
}

/// Creates an object from an in-memory payload with a single upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsertObjectMediaRequest {
    bucket_name: String,
    object_name: String,
    contents: Bytes,
    parameters: InsertObjectMediaParameters,
}

impl_generic_request!(InsertObjectMediaRequest, InsertObjectMediaParameters);

impl InsertObjectMediaRequest {
    pub fn new(
        bucket_name: impl Into<String>,
        object_name: impl Into<String>,
        contents: impl Into<Bytes>,
    ) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            object_name: object_name.into(),
            contents: contents.into(),
            ..Default::default()
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn contents(&self) -> &Bytes {
        &self.contents
    }
}

impl fmt::Display for InsertObjectMediaRequest {
    // the payload itself is summarized, it can be arbitrarily large
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InsertObjectMediaRequest={{bucket_name={}, object_name={}, contents_size={}",
            self.bucket_name,
            self.object_name,
            self.contents.len()
        )?;
        dump_parameters(f, self.parameters(), ", ")?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_summarizes_contents() {
        let request = InsertObjectMediaRequest::new("b", "o", "hello world")
            .with(IfGenerationMatch::new(0));
        assert_eq!(
            request.to_string(),
            "InsertObjectMediaRequest={bucket_name=b, object_name=o, contents_size=11, ifGenerationMatch=0}"
        );
        assert_eq!(request.contents(), &Bytes::from_static(b"hello world"));
    }
}
