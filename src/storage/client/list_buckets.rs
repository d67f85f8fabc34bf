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
use crate::storage::list_reader::ListBucketsReader;
use crate::storage::request::{ListBucketsParameters, ListBucketsRequest};
use crate::storage::types::{BucketMetadata, GenericRequest, ParameterSet};

impl Client {
    /// Fetches every bucket of a project.
    ///
    /// Accepts `MaxResults` (page size), `Prefix`, `Projection` and
    /// `UserProject`. All pages are fetched before returning.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cloud_storage::storage::Client;
    /// use cloud_storage::storage::types::Prefix;
    ///
    /// let client = Client::new().unwrap();
    /// for bucket in client.list_buckets("my-project", (Prefix::new("logs-"),)).unwrap() {
    ///     println!("{}", bucket.name);
    /// }
    /// ```
    pub fn list_buckets(
        &self,
        project_id: &str,
        parameters: impl ParameterSet<ListBucketsParameters>,
    ) -> Result<Vec<BucketMetadata>, Error> {
        let request = ListBucketsRequest::new(project_id).with_parameters(parameters);
        ListBucketsReader::new(self.retry_client.clone(), request).collect()
    }
}
