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


use cloud_storage::storage::Status;
use cloud_storage::storage::error::Error;
use cloud_storage::storage::retry_policy::LimitedErrorCountRetryPolicy;
use cloud_storage_common::mock_client::MockClient;
use cloud_storage_common::test_context::{TestContext, fast_backoff};
use cloud_storage_common::utils::{bucket, object};
use quickcheck::quickcheck;
use std::sync::Arc;
use std::thread;

#[test]
fn budgets_are_not_shared_across_calls() {
    let ctx = TestContext::new(1);
    // Each call sees one transient failure, within a budget of one.
    for _ in 0..3 {
        ctx.mock
            .get_object_metadata
            .push_err(Status::unavailable("try-again"))
            .push_ok(object("b", "o", 1));
    }
    for _ in 0..3 {
        ctx.client.get_object_metadata("b", "o", ()).unwrap();
    }
    assert_eq!(ctx.mock.get_object_metadata.calls(), 6);
}

#[test]
fn exhausted_call_does_not_spend_the_next_budget() {
    let ctx = TestContext::new(1);
    ctx.mock
        .get_bucket_metadata
        .push_err(Status::unavailable("1"))
        .push_err(Status::unavailable("2"))
        .push_err(Status::unavailable("3"))
        .push_ok(bucket("b"));

    let err = ctx.client.get_bucket_metadata("b", ()).unwrap_err();
    assert!(matches!(err, Error::RetryPolicyExhausted { .. }));
    assert_eq!(ctx.client.get_bucket_metadata("b", ()).unwrap().name, "b");
    assert_eq!(ctx.mock.get_bucket_metadata.calls(), 4);
}

#[test]
fn concurrent_calls_have_independent_budgets() {
    let ctx = TestContext::new(8);
    ctx.mock.get_bucket_metadata.repeat(Ok(bucket("b")));
    for _ in 0..8 {
        ctx.mock
            .get_bucket_metadata
            .push_err(Status::unavailable("try-again"));
    }

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = ctx.client.clone();
            thread::spawn(move || client.get_bucket_metadata("b", ()))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(ctx.mock.get_bucket_metadata.calls(), 16);
}

#[test]
fn no_retry_makes_a_single_attempt() {
    let mock = Arc::new(MockClient::new());
    mock.delete_object.repeat(Err(Status::unavailable("busy")));
    let client = cloud_storage::storage::Client::builder(mock.clone())
        .backoff_policy(fast_backoff())
        .no_retry()
        .build();

    let err = client.delete_object("b", "o", ()).unwrap_err();
    assert!(matches!(err, Error::RetryPolicyExhausted { .. }));
    assert_eq!(err.operation(), Some("DeleteObject"));
    assert_eq!(mock.delete_object.calls(), 1);
}

quickcheck! {
    fn prop_budget_n_makes_n_plus_one_attempts(budget: u8) -> bool {
        let budget = u32::from(budget % 6);
        let ctx = TestContext::new(budget);
        ctx.mock.get_bucket_metadata.repeat(Err(Status::unavailable("try-again")));

        let err = ctx.client.get_bucket_metadata("b", ()).unwrap_err();
        matches!(err, Error::RetryPolicyExhausted { .. })
            && ctx.mock.get_bucket_metadata.calls() == budget as usize + 1
    }

    fn prop_budget_n_tolerates_n_failures(budget: u8) -> bool {
        let budget = u32::from(budget % 6);
        let ctx = TestContext::new(budget);
        for _ in 0..budget {
            ctx.mock.get_bucket_metadata.push_err(Status::deadline_exceeded("slow"));
        }
        ctx.mock.get_bucket_metadata.push_ok(bucket("b"));

        ctx.client.get_bucket_metadata("b", ()).is_ok()
            && ctx.mock.get_bucket_metadata.calls() == budget as usize + 1
    }

    fn prop_permanent_failure_makes_one_attempt(budget: u8, transient_before: u8) -> bool {
        let budget = u32::from(budget % 6) + 1;
        let transient_before = u32::from(transient_before) % budget;
        let ctx = TestContext::new(budget);
        for _ in 0..transient_before {
            ctx.mock.get_bucket_metadata.push_err(Status::unavailable("try-again"));
        }
        ctx.mock.get_bucket_metadata.push_err(Status::not_found("gone"));
        ctx.mock.get_bucket_metadata.repeat(Ok(bucket("b")));

        let err = ctx.client.get_bucket_metadata("b", ()).unwrap_err();
        matches!(err, Error::PermanentFailure { .. })
            && ctx.mock.get_bucket_metadata.calls() == transient_before as usize + 1
    }
}

#[test]
fn prototype_policy_is_never_consumed() {
    let mock = Arc::new(MockClient::new());
    let client = cloud_storage::storage::Client::builder(mock.clone())
        .retry_policy(LimitedErrorCountRetryPolicy::new(2))
        .backoff_policy(fast_backoff())
        .build();
    mock.list_object_acl
        .repeat(Err(Status::unavailable("try-again")));

    for _ in 0..3 {
        assert!(client.list_object_acl("b", "o", ()).is_err());
    }
    assert_eq!(mock.list_object_acl.calls(), 9);
}
