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
use crate::storage::request::{InsertObjectMediaParameters, InsertObjectMediaRequest};
use crate::storage::types::{GenericRequest, ObjectMetadata, ParameterSet};
use bytes::Bytes;

impl Client {
    /// Creates an object with the given contents, uploaded in one request.
    ///
    /// Accepts `ContentEncoding`, `IfGenerationMatch`, `IfGenerationNotMatch`,
    /// `IfMetagenerationMatch`, `IfMetagenerationNotMatch`, `PredefinedAcl`,
    /// `Projection` and `UserProject`. Pass `IfGenerationMatch::new(0)` to
    /// only create the object if it does not exist yet.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cloud_storage::storage::Client;
    /// use cloud_storage::storage::types::IfGenerationMatch;
    ///
    /// let client = Client::new().unwrap();
    /// let metadata = client
    ///     .insert_object("my-bucket", "greeting.txt", "hello", (IfGenerationMatch::new(0),))
    ///     .unwrap();
    /// assert_eq!(metadata.size, 5);
    /// ```
    pub fn insert_object(
        &self,
        bucket_name: &str,
        object_name: &str,
        contents: impl Into<Bytes>,
        parameters: impl ParameterSet<InsertObjectMediaParameters>,
    ) -> Result<ObjectMetadata, Error> {
        let request = InsertObjectMediaRequest::new(bucket_name, object_name, contents)
            .with_parameters(parameters);
        self.retry_client.insert_object_media(&request)
    }
}
