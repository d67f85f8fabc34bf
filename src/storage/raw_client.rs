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


//! The seam between the request pipeline and the transport

use crate::storage::options::ClientOptions;
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
use std::fmt::Debug;

/// One method per storage operation.
///
/// Implementations report every failure, transient or permanent, as an
/// `Err(Status)` and never panic on them. Decorators implement this trait
/// by delegating to an inner client, so any number of them can be stacked
/// in front of a transport.
pub trait RawClient: Send + Sync + Debug {
    fn client_options(&self) -> &ClientOptions;

    fn list_buckets(&self, request: &ListBucketsRequest) -> Result<ListBucketsResponse, Status>;

    fn get_bucket_metadata(
        &self,
        request: &GetBucketMetadataRequest,
    ) -> Result<BucketMetadata, Status>;

    fn insert_object_media(
        &self,
        request: &InsertObjectMediaRequest,
    ) -> Result<ObjectMetadata, Status>;

    fn get_object_metadata(
        &self,
        request: &GetObjectMetadataRequest,
    ) -> Result<ObjectMetadata, Status>;

    fn read_object_range_media(
        &self,
        request: &ReadObjectRangeRequest,
    ) -> Result<ReadObjectRangeResponse, Status>;

    fn list_objects(&self, request: &ListObjectsRequest) -> Result<ListObjectsResponse, Status>;

    fn delete_object(&self, request: &DeleteObjectRequest) -> Result<EmptyResponse, Status>;

    fn list_object_acl(
        &self,
        request: &ListObjectAclRequest,
    ) -> Result<ListObjectAclResponse, Status>;
}
