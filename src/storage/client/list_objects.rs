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
use crate::storage::list_reader::ListObjectsReader;
use crate::storage::request::{ListObjectsParameters, ListObjectsRequest};
use crate::storage::types::{GenericRequest, ParameterSet};

impl Client {
    /// Lists the objects in a bucket.
    ///
    /// Accepts `Delimiter`, `MaxResults` (page size), `Prefix`, `Projection`,
    /// `UserProject` and `Versions`. Nothing is fetched until the returned
    /// reader is iterated, and pages are fetched one at a time as it is
    /// consumed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cloud_storage::storage::Client;
    /// use cloud_storage::storage::types::{Delimiter, Prefix};
    ///
    /// let client = Client::new().unwrap();
    /// for object in client.list_objects("my-bucket", (Prefix::new("2024/"), Delimiter::new("/"))) {
    ///     let object = object.unwrap();
    ///     println!("{} ({} bytes)", object.name, object.size);
    /// }
    /// ```
    pub fn list_objects(
        &self,
        bucket_name: &str,
        parameters: impl ParameterSet<ListObjectsParameters>,
    ) -> ListObjectsReader {
        let request = ListObjectsRequest::new(bucket_name).with_parameters(parameters);
        ListObjectsReader::new(self.retry_client.clone(), request)
    }
}
