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
use crate::storage::request::{GetBucketMetadataParameters, GetBucketMetadataRequest};
use crate::storage::types::{BucketMetadata, GenericRequest, ParameterSet};

impl Client {
    /// Fetches the metadata of a bucket.
    ///
    /// Accepts `IfMetagenerationMatch`, `IfMetagenerationNotMatch`,
    /// `Projection` and `UserProject`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cloud_storage::storage::Client;
    /// use cloud_storage::storage::types::{IfMetagenerationMatch, Projection};
    ///
    /// let client = Client::new().unwrap();
    /// let metadata = client
    ///     .get_bucket_metadata("my-bucket", (IfMetagenerationMatch::new(4), Projection::full()))
    ///     .unwrap();
    /// println!("{metadata}");
    /// ```
    pub fn get_bucket_metadata(
        &self,
        bucket_name: &str,
        parameters: impl ParameterSet<GetBucketMetadataParameters>,
    ) -> Result<BucketMetadata, Error> {
        let request = GetBucketMetadataRequest::new(bucket_name).with_parameters(parameters);
        self.retry_client.get_bucket_metadata(&request)
    }
}
