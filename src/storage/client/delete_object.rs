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
use crate::storage::request::{DeleteObjectParameters, DeleteObjectRequest};
use crate::storage::types::{GenericRequest, ParameterSet};

impl Client {
    /// Deletes an object.
    ///
    /// Accepts `Generation`, `IfGenerationMatch`, `IfGenerationNotMatch`,
    /// `IfMetagenerationMatch`, `IfMetagenerationNotMatch` and `UserProject`.
    /// Without `Generation` the live version of the object is deleted.
    pub fn delete_object(
        &self,
        bucket_name: &str,
        object_name: &str,
        parameters: impl ParameterSet<DeleteObjectParameters>,
    ) -> Result<(), Error> {
        let request =
            DeleteObjectRequest::new(bucket_name, object_name).with_parameters(parameters);
        self.retry_client.delete_object(&request)?;
        Ok(())
    }
}
