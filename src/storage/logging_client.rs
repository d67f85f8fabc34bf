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


use crate::storage::options::ClientOptions;
use crate::storage::raw_client::RawClient;
use crate::storage::request::{
    DeleteObjectRequest, GetBucketMetadataRequest, GetObjectMetadataRequest,
    InsertObjectMediaRequest, ListBucketsRequest, ListObjectAclRequest, ListObjectsRequest,
    ReadObjectRangeRequest,
};
use crate::storage::response::{
    EmptyResponse, ListBucketsResponse, ListObjectAclResponse, ListObjectsResponse,
    ReadObjectRangeResponse,
};
use crate::storage::status::Status;
use crate::storage::types::{BucketMetadata, ObjectMetadata};
use std::fmt::Display;
use std::sync::Arc;

/// A [`RawClient`] that logs every request and its outcome.
///
/// Each call is forwarded to the inner client exactly once and its result
/// is returned untouched.
#[derive(Clone, Debug)]
pub struct LoggingClient {
    client: Arc<dyn RawClient>,
}

impl LoggingClient {
    pub fn new(client: Arc<dyn RawClient>) -> Self {
        Self { client }
    }

    fn make_call<Req, Resp, F>(&self, operation: &str, request: &Req, call: F) -> Result<Resp, Status>
    where
        Req: Display,
        Resp: Display,
        F: FnOnce(&dyn RawClient, &Req) -> Result<Resp, Status>,
    {
        log::info!("{operation} << {request}");
        let result = call(self.client.as_ref(), request);
        match &result {
            Ok(payload) => {
                log::info!("{operation} >> status={{{}}}, payload={{{payload}}}", Status::ok())
            }
            Err(status) => log::info!("{operation} >> status={{{status}}}, payload={{}}"),
        }
        result
    }
}

impl RawClient for LoggingClient {
    fn client_options(&self) -> &ClientOptions {
        self.client.client_options()
    }

    fn list_buckets(&self, request: &ListBucketsRequest) -> Result<ListBucketsResponse, Status> {
        self.make_call("ListBuckets", request, |c, r| c.list_buckets(r))
    }

    fn get_bucket_metadata(
        &self,
        request: &GetBucketMetadataRequest,
    ) -> Result<BucketMetadata, Status> {
        self.make_call("GetBucketMetadata", request, |c, r| c.get_bucket_metadata(r))
    }

    fn insert_object_media(
        &self,
        request: &InsertObjectMediaRequest,
    ) -> Result<ObjectMetadata, Status> {
        self.make_call("InsertObjectMedia", request, |c, r| c.insert_object_media(r))
    }

    fn get_object_metadata(
        &self,
        request: &GetObjectMetadataRequest,
    ) -> Result<ObjectMetadata, Status> {
        self.make_call("GetObjectMetadata", request, |c, r| c.get_object_metadata(r))
    }

    fn read_object_range_media(
        &self,
        request: &ReadObjectRangeRequest,
    ) -> Result<ReadObjectRangeResponse, Status> {
        self.make_call("ReadObjectRangeMedia", request, |c, r| {
            c.read_object_range_media(r)
        })
    }

    fn list_objects(&self, request: &ListObjectsRequest) -> Result<ListObjectsResponse, Status> {
        self.make_call("ListObjects", request, |c, r| c.list_objects(r))
    }

    fn delete_object(&self, request: &DeleteObjectRequest) -> Result<EmptyResponse, Status> {
        self.make_call("DeleteObject", request, |c, r| c.delete_object(r))
    }

    fn list_object_acl(
        &self,
        request: &ListObjectAclRequest,
    ) -> Result<ListObjectAclResponse, Status> {
        self.make_call("ListObjectAcl", request, |c, r| c.list_object_acl(r))
    }
}
