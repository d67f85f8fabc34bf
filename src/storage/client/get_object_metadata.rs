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


use super::Client;
use crate::storage::error::Error;
use crate::storage::request::{GetObjectMetadataParameters, GetObjectMetadataRequest};
use crate::storage::types::{GenericRequest, ObjectMetadata, ParameterSet};

impl Client {
    /// Fetches the metadata of an object.
    ///
    /// Accepts `Generation`, `IfGenerationMatch`, `IfGenerationNotMatch`,
    /// `IfMetagenerationMatch`, `IfMetagenerationNotMatch`, `Projection` and
    /// `UserProject`.
    pub fn get_object_metadata(
        &self,
        bucket_name: &str,
        object_name: &str,
        parameters: impl ParameterSet<GetObjectMetadataParameters>,
    ) -> Result<ObjectMetadata, Error> {
        let request =
            GetObjectMetadataRequest::new(bucket_name, object_name).with_parameters(parameters);
        self.retry_client.get_object_metadata(&request)
    }
}
