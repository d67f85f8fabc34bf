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


use crate::storage::backoff_policy::BackoffPolicy;
use crate::storage::error::Error;
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
use crate::storage::retry_policy::RetryPolicy;
use crate::storage::status::Status;
use crate::storage::types::{BucketMetadata, ObjectMetadata};
use std::sync::Arc;

/// Retries the calls of an inner [`RawClient`] on transient failures.
///
/// The policies given at construction are prototypes and are never
/// mutated; each call works on its own fresh copies. This is the layer
/// where a failed [`Status`] becomes an [`Error`].
#[derive(Clone, Debug)]
pub struct RetryClient {
    client: Arc<dyn RawClient>,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
}

impl RetryClient {
    pub fn new(
        client: Arc<dyn RawClient>,
        retry_policy: Arc<dyn RetryPolicy>,
        backoff_policy: Arc<dyn BackoffPolicy>,
    ) -> Self {
        Self {
            client,
            retry_policy,
            backoff_policy,
        }
    }

    /// The client wrapped by this one.
    pub fn client(&self) -> &Arc<dyn RawClient> {
        &self.client
    }

    pub fn client_options(&self) -> &ClientOptions {
        self.client.client_options()
    }

    fn make_call<Req, Resp, F>(
        &self,
        operation: &'static str,
        request: &Req,
        call: F,
    ) -> Result<Resp, Error>
    where
        F: Fn(&dyn RawClient, &Req) -> Result<Resp, Status>,
    {
        let mut retry_policy = self.retry_policy.clone_box();
        let mut backoff_policy = self.backoff_policy.clone_box();
        loop {
            let status = match call(self.client.as_ref(), request) {
                Ok(response) => return Ok(response),
                Err(status) => status,
            };

            if !retry_policy.on_failure(&status) {
                if retry_policy.is_permanent_failure(&status) {
                    return Err(Error::PermanentFailure { operation, status });
                }
                log::debug!("{operation}: giving up after transient failure {status}");
                return Err(Error::RetryPolicyExhausted { operation, status });
            }

            let mut delay = backoff_policy.on_completion();
            if let Some(remaining) = retry_policy.remaining_time() {
                delay = delay.min(remaining);
            }
            log::debug!("{operation}: transient failure {status}, retrying in {delay:?}");
            std::thread::sleep(delay);
        }
    }

    pub fn list_buckets(&self, request: &ListBucketsRequest) -> Result<ListBucketsResponse, Error> {
        self.make_call("ListBuckets", request, |c, r| c.list_buckets(r))
    }

    pub fn get_bucket_metadata(
        &self,
        request: &GetBucketMetadataRequest,
    ) -> Result<BucketMetadata, Error> {
        self.make_call("GetBucketMetadata", request, |c, r| c.get_bucket_metadata(r))
    }

    pub fn insert_object_media(
        &self,
        request: &InsertObjectMediaRequest,
    ) -> Result<ObjectMetadata, Error> {
        self.make_call("InsertObjectMedia", request, |c, r| c.insert_object_media(r))
    }

    pub fn get_object_metadata(
        &self,
        request: &GetObjectMetadataRequest,
    ) -> Result<ObjectMetadata, Error> {
        self.make_call("GetObjectMetadata", request, |c, r| c.get_object_metadata(r))
    }

    pub fn read_object_range_media(
        &self,
        request: &ReadObjectRangeRequest,
    ) -> Result<ReadObjectRangeResponse, Error> {
        self.make_call("ReadObjectRangeMedia", request, |c, r| {
            c.read_object_range_media(r)
        })
    }

    pub fn list_objects(&self, request: &ListObjectsRequest) -> Result<ListObjectsResponse, Error> {
        self.make_call("ListObjects", request, |c, r| c.list_objects(r))
    }

    pub fn delete_object(&self, request: &DeleteObjectRequest) -> Result<EmptyResponse, Error> {
        self.make_call("DeleteObject", request, |c, r| c.delete_object(r))
    }

    pub fn list_object_acl(
        &self,
        request: &ListObjectAclRequest,
    ) -> Result<ListObjectAclResponse, Error> {
        self.make_call("ListObjectAcl", request, |c, r| c.list_object_acl(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backoff_policy::ExponentialBackoffPolicy;
    use crate::storage::retry_policy::{LimitedErrorCountRetryPolicy, LimitedTimeRetryPolicy};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    /// Answers `GetBucketMetadata` from a script; every other operation fails.
    #[derive(Debug, Default)]
    struct ScriptedBucketClient {
        options: ClientOptions,
        script: Mutex<VecDeque<Result<BucketMetadata, Status>>>,
        calls: AtomicUsize,
    }

    impl ScriptedBucketClient {
        fn new(script: Vec<Result<BucketMetadata, Status>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn unexpected() -> Status {
        Status::invalid_argument("unexpected call")
    }

    impl RawClient for ScriptedBucketClient {
        fn client_options(&self) -> &ClientOptions {
            &self.options
        }

        fn list_buckets(&self, _: &ListBucketsRequest) -> Result<ListBucketsResponse, Status> {
            Err(unexpected())
        }

        fn get_bucket_metadata(
            &self,
            _: &GetBucketMetadataRequest,
        ) -> Result<BucketMetadata, Status> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Status::unavailable("script exhausted")))
        }

        fn insert_object_media(
            &self,
            _: &InsertObjectMediaRequest,
        ) -> Result<ObjectMetadata, Status> {
            Err(unexpected())
        }

        fn get_object_metadata(
            &self,
            _: &GetObjectMetadataRequest,
        ) -> Result<ObjectMetadata, Status> {
            Err(unexpected())
        }

        fn read_object_range_media(
            &self,
            _: &ReadObjectRangeRequest,
        ) -> Result<ReadObjectRangeResponse, Status> {
            Err(unexpected())
        }

        fn list_objects(&self, _: &ListObjectsRequest) -> Result<ListObjectsResponse, Status> {
            Err(unexpected())
        }

        fn delete_object(&self, _: &DeleteObjectRequest) -> Result<EmptyResponse, Status> {
            Err(unexpected())
        }

        fn list_object_acl(
            &self,
            _: &ListObjectAclRequest,
        ) -> Result<ListObjectAclResponse, Status> {
            Err(unexpected())
        }
    }

    fn fast_backoff() -> Arc<dyn BackoffPolicy> {
        Arc::new(ExponentialBackoffPolicy::new(
            Duration::from_millis(1),
            Duration::from_millis(2),
            2.0,
        ))
    }

    fn retry_client(raw: &Arc<ScriptedBucketClient>, budget: u32) -> RetryClient {
        RetryClient::new(
            raw.clone(),
            Arc::new(LimitedErrorCountRetryPolicy::new(budget)),
            fast_backoff(),
        )
    }

    #[test]
    fn test_success_after_transient_failures() {
        let expected = BucketMetadata {
            name: "foo-bar-baz".to_string(),
            ..Default::default()
        };
        let raw = Arc::new(ScriptedBucketClient::new(vec![
            Err(Status::unavailable("try again")),
            Err(Status::unavailable("try again")),
            Ok(expected.clone()),
        ]));
        let client = retry_client(&raw, 2);
        let actual = client
            .get_bucket_metadata(&GetBucketMetadataRequest::new("foo-bar-baz"))
            .unwrap();
        assert_eq!(actual, expected);
        assert_eq!(raw.calls(), 3);
    }

    #[test]
    fn test_exhausted_keeps_last_status() {
        let raw = Arc::new(ScriptedBucketClient::new(vec![
            Err(Status::unavailable("first")),
            Err(Status::unavailable("second")),
        ]));
        let err = retry_client(&raw, 1)
            .get_bucket_metadata(&GetBucketMetadataRequest::new("b"))
            .unwrap_err();
        assert!(matches!(err, Error::RetryPolicyExhausted { .. }));
        assert_eq!(err.operation(), Some("GetBucketMetadata"));
        assert_eq!(err.status().map(Status::message), Some("second"));
        assert_eq!(raw.calls(), 2);
    }

    #[test]
    fn test_permanent_failure_is_not_retried() {
        let raw = Arc::new(ScriptedBucketClient::new(vec![Err(Status::permission_denied(
            "uh oh",
        ))]));
        let err = retry_client(&raw, 5)
            .get_bucket_metadata(&GetBucketMetadataRequest::new("b"))
            .unwrap_err();
        assert!(matches!(err, Error::PermanentFailure { .. }));
        assert_eq!(raw.calls(), 1);
    }

    #[test]
    fn test_zero_budget_calls_once() {
        let raw = Arc::new(ScriptedBucketClient::new(vec![]));
        let err = retry_client(&raw, 0)
            .get_bucket_metadata(&GetBucketMetadataRequest::new("b"))
            .unwrap_err();
        assert!(matches!(err, Error::RetryPolicyExhausted { .. }));
        assert_eq!(raw.calls(), 1);
    }

    #[test]
    fn test_sleep_is_clamped_to_time_budget() {
        let raw = Arc::new(ScriptedBucketClient::new(vec![]));
        let client = RetryClient::new(
            raw.clone(),
            Arc::new(LimitedTimeRetryPolicy::new(Duration::from_millis(50))),
            Arc::new(ExponentialBackoffPolicy::new(
                Duration::from_secs(10),
                Duration::from_secs(10),
                1.0,
            )),
        );
        let start = Instant::now();
        let err = client
            .get_bucket_metadata(&GetBucketMetadataRequest::new("b"))
            .unwrap_err();
        assert!(matches!(err, Error::RetryPolicyExhausted { .. }));
        assert!(start.elapsed() < Duration::from_secs(5));
        assert!(raw.calls() >= 2);
    }
}
