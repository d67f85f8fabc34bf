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


use crate::mock_client::MockClient;
use cloud_storage::storage::Client;
use cloud_storage::storage::backoff_policy::ExponentialBackoffPolicy;
use cloud_storage::storage::retry_policy::LimitedErrorCountRetryPolicy;
use std::sync::Arc;
use std::time::Duration;

/// A [`Client`] wired to a [`MockClient`], retrying with a small error
/// budget and near-zero backoff so tests run fast.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub client: Client,
    pub mock: Arc<MockClient>,
}

impl TestContext {
    pub fn new(maximum_failures: u32) -> Self {
        Self::with_mock(MockClient::new(), maximum_failures)
    }

    pub fn with_mock(mock: MockClient, maximum_failures: u32) -> Self {
        init_logging();
        let mock = Arc::new(mock);
        let client = Client::builder(mock.clone())
            .retry_policy(LimitedErrorCountRetryPolicy::new(maximum_failures))
            .backoff_policy(fast_backoff())
            .build();
        Self { client, mock }
    }
}

pub fn fast_backoff() -> ExponentialBackoffPolicy {
    ExponentialBackoffPolicy::new(Duration::from_millis(1), Duration::from_millis(5), 2.0)
}

/// Installs `env_logger` once; honors `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
