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


use cloud_storage::storage::options::ClientOptions;
use cloud_storage::storage::raw_client::RawClient;
use cloud_storage::storage::request::{
    DeleteObjectRequest, GetBucketMetadataRequest, GetObjectMetadataRequest,
    InsertObjectMediaRequest, ListBucketsRequest, ListObjectAclRequest, ListObjectsRequest,
    ReadObjectRangeRequest,
};
use cloud_storage::storage::response::{
    EmptyResponse, ListBucketsResponse, ListObjectAclResponse, ListObjectsResponse,
    ReadObjectRangeResponse,
};
use cloud_storage::storage::types::{BucketMetadata, ObjectMetadata};
use cloud_storage::storage::{Status, StatusCode};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted answers of one operation of a [`MockClient`].
///
/// Answers are returned in the order they were pushed. Once the queue is
/// empty the repeated answer, if any, is returned for every further call;
/// without one the call fails with a permanent status. Every request is
/// recorded.
#[derive(Debug)]
pub struct Script<Req, Resp> {
    answers: Mutex<VecDeque<Result<Resp, Status>>>,
    repeated: Mutex<Option<Result<Resp, Status>>>,
    requests: Mutex<Vec<Req>>,
}

impl<Req, Resp> Default for Script<Req, Resp> {
    fn default() -> Self {
        Self {
            answers: Mutex::new(VecDeque::new()),
            repeated: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl<Req: Clone, Resp: Clone> Script<Req, Resp> {
    pub fn push(&self, answer: Result<Resp, Status>) -> &Self {
        self.answers.lock().unwrap().push_back(answer);
        self
    }

    pub fn push_ok(&self, response: Resp) -> &Self {
        self.push(Ok(response))
    }

    pub fn push_err(&self, status: Status) -> &Self {
        self.push(Err(status))
    }

    /// Answer returned once the queued answers run out.
    pub fn repeat(&self, answer: Result<Resp, Status>) -> &Self {
        *self.repeated.lock().unwrap() = Some(answer);
        self
    }

    pub fn call(&self, request: &Req) -> Result<Resp, Status> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(answer) = self.answers.lock().unwrap().pop_front() {
            return answer;
        }
        match &*self.repeated.lock().unwrap() {
            Some(answer) => answer.clone(),
            None => Err(Status::new(
                StatusCode::FailedPrecondition,
                "no scripted answer left",
            )),
        }
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Req> {
        self.requests.lock().unwrap().clone()
    }
}

/// A [`RawClient`] answering every operation from a [`Script`].
#[derive(Debug, Default)]
pub struct MockClient {
    pub options: ClientOptions,
    pub list_buckets: Script<ListBucketsRequest, ListBucketsResponse>,
    pub get_bucket_metadata: Script<GetBucketMetadataRequest, BucketMetadata>,
    pub insert_object_media: Script<InsertObjectMediaRequest, ObjectMetadata>,
    pub get_object_metadata: Script<GetObjectMetadataRequest, ObjectMetadata>,
    pub read_object_range_media: Script<ReadObjectRangeRequest, ReadObjectRangeResponse>,
    pub list_objects: Script<ListObjectsRequest, ListObjectsResponse>,
    pub delete_object: Script<DeleteObjectRequest, EmptyResponse>,
    pub list_object_acl: Script<ListObjectAclRequest, ListObjectAclResponse>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of calls across every operation.
    pub fn total_calls(&self) -> usize {
        self.list_buckets.calls()
            + self.get_bucket_metadata.calls()
            + self.insert_object_media.calls()
            + self.get_object_metadata.calls()
            + self.read_object_range_media.calls()
            + self.list_objects.calls()
            + self.delete_object.calls()
            + self.list_object_acl.calls()
    }
}

impl RawClient for MockClient {
    fn client_options(&self) -> &ClientOptions {
        &self.options
    }

    fn list_buckets(&self, request: &ListBucketsRequest) -> Result<ListBucketsResponse, Status> {
        self.list_buckets.call(request)
    }

    fn get_bucket_metadata(
        &self,
        request: &GetBucketMetadataRequest,
    ) -> Result<BucketMetadata, Status> {
        self.get_bucket_metadata.call(request)
    }

    fn insert_object_media(
        &self,
        request: &InsertObjectMediaRequest,
    ) -> Result<ObjectMetadata, Status> {
        self.insert_object_media.call(request)
    }

    fn get_object_metadata(
        &self,
        request: &GetObjectMetadataRequest,
    ) -> Result<ObjectMetadata, Status> {
        self.get_object_metadata.call(request)
    }

    fn read_object_range_media(
        &self,
        request: &ReadObjectRangeRequest,
    ) -> Result<ReadObjectRangeResponse, Status> {
        self.read_object_range_media.call(request)
    }

    fn list_objects(&self, request: &ListObjectsRequest) -> Result<ListObjectsResponse, Status> {
        self.list_objects.call(request)
    }

    fn delete_object(&self, request: &DeleteObjectRequest) -> Result<EmptyResponse, Status> {
        self.delete_object.call(request)
    }

    fn list_object_acl(
        &self,
        request: &ListObjectAclRequest,
    ) -> Result<ListObjectAclResponse, Status> {
        self.list_object_acl.call(request)
    }
}
