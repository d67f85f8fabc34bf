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
use crate::storage::object_read_stream::ObjectReadStream;
use crate::storage::request::{ReadObjectRangeParameters, ReadObjectRangeRequest};
use crate::storage::response::ReadObjectRangeResponse;
use crate::storage::types::{GenericRequest, ParameterSet};

impl Client {
    /// Reads the bytes `[begin, end)` of an object in a single request.
    ///
    /// Accepts `Generation`, `IfGenerationMatch`, `IfGenerationNotMatch`,
    /// `IfMetagenerationMatch`, `IfMetagenerationNotMatch` and `UserProject`.
    pub fn read_object_range(
        &self,
        bucket_name: &str,
        object_name: &str,
        begin: u64,
        end: u64,
        parameters: impl ParameterSet<ReadObjectRangeParameters>,
    ) -> Result<ReadObjectRangeResponse, Error> {
        let request = ReadObjectRangeRequest::new(bucket_name, object_name, begin, end)
            .with_parameters(parameters);
        self.retry_client.read_object_range_media(&request)
    }

    /// Opens an object for sequential reading.
    ///
    /// The object is fetched in ranges of
    /// [`download_chunk_size`](crate::storage::ClientOptions::download_chunk_size)
    /// bytes as the stream is read, each range retried on its own. Accepts
    /// the same parameters as [`read_object_range`](Self::read_object_range).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cloud_storage::storage::Client;
    /// use std::io::Read;
    ///
    /// let client = Client::new().unwrap();
    /// let mut contents = String::new();
    /// client
    ///     .read_object("my-bucket", "greeting.txt", ())
    ///     .read_to_string(&mut contents)
    ///     .unwrap();
    /// ```
    pub fn read_object(
        &self,
        bucket_name: &str,
        object_name: &str,
        parameters: impl ParameterSet<ReadObjectRangeParameters>,
    ) -> ObjectReadStream {
        let request =
            ReadObjectRangeRequest::new(bucket_name, object_name, 0, 0).with_parameters(parameters);
        ObjectReadStream::new(
            self.retry_client.clone(),
            request,
            self.options().download_chunk_size(),
        )
    }
}
