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
use crate::storage::request::{ListObjectAclParameters, ListObjectAclRequest};
use crate::storage::types::{GenericRequest, ObjectAccessControl, ParameterSet};

impl Client {
    /// Fetches the access control list of an object.
    ///
    /// Accepts `Generation` and `UserProject`.
    pub fn list_object_acl(
        &self,
        bucket_name: &str,
        object_name: &str,
        parameters: impl ParameterSet<ListObjectAclParameters>,
    ) -> Result<Vec<ObjectAccessControl>, Error> {
        let request =
            ListObjectAclRequest::new(bucket_name, object_name).with_parameters(parameters);
        Ok(self.retry_client.list_object_acl(&request)?.items)
    }
}
