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


//! The storage client and its builder

use crate::storage::backoff_policy::{BackoffPolicy, ExponentialBackoffPolicy};
use crate::storage::creds::Credentials;
use crate::storage::error::Error;
use crate::storage::logging_client::LoggingClient;
use crate::storage::options::ClientOptions;
use crate::storage::raw_client::RawClient;
use crate::storage::rest_client::RestClient;
use crate::storage::retry_client::RetryClient;
use crate::storage::retry_policy::{
    LimitedErrorCountRetryPolicy, LimitedTimeRetryPolicy, RetryPolicy,
};
use std::sync::Arc;
use std::time::Duration;

mod delete_object;
mod get_bucket_metadata;
mod get_object_metadata;
mod insert_object;
mod list_buckets;
mod list_object_acl;
mod list_objects;
mod read_object;

/// How long the default retry policy keeps retrying a call.
pub const DEFAULT_MAXIMUM_RETRY_PERIOD: Duration = Duration::from_secs(15 * 60);

/// Builds a [`Client`] on top of an explicit [`RawClient`], optionally
/// overriding the retry and backoff policies.
///
/// # Example
///
/// ```no_run
/// use cloud_storage::storage::backoff_policy::ExponentialBackoffPolicy;
/// use cloud_storage::storage::retry_policy::LimitedErrorCountRetryPolicy;
/// use cloud_storage::storage::{ClientBuilder, ClientOptions, RestClient};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let raw = RestClient::new(ClientOptions::from_env()).unwrap();
/// let client = ClientBuilder::new(Arc::new(raw))
///     .retry_policy(LimitedErrorCountRetryPolicy::new(5))
///     .backoff_policy(ExponentialBackoffPolicy::new(
///         Duration::from_millis(100),
///         Duration::from_secs(10),
///         2.0,
///     ))
///     .build();
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    raw_client: Arc<dyn RawClient>,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
}

impl ClientBuilder {
    /// Starts from the default policies: retry transient failures for up to
    /// [`DEFAULT_MAXIMUM_RETRY_PERIOD`] with exponential backoff.
    pub fn new(raw_client: Arc<dyn RawClient>) -> Self {
        Self {
            raw_client,
            retry_policy: Arc::new(LimitedTimeRetryPolicy::new(DEFAULT_MAXIMUM_RETRY_PERIOD)),
            backoff_policy: Arc::new(ExponentialBackoffPolicy::default()),
        }
    }

    pub fn retry_policy<P: RetryPolicy + 'static>(mut self, policy: P) -> Self {
        self.retry_policy = Arc::new(policy);
        self
    }

    pub fn backoff_policy<P: BackoffPolicy + 'static>(mut self, policy: P) -> Self {
        self.backoff_policy = Arc::new(policy);
        self
    }

    /// Makes every call a single attempt.
    pub fn no_retry(self) -> Self {
        self.retry_policy(LimitedErrorCountRetryPolicy::new(0))
    }

    pub fn build(self) -> Client {
        Client {
            retry_client: RetryClient::new(
                self.raw_client,
                self.retry_policy,
                self.backoff_policy,
            ),
        }
    }
}

/// Client for the object storage service.
///
/// Every call goes through a [`RetryClient`]: transient failures are
/// retried according to the configured policies, and a call that cannot
/// complete returns an [`Error`] naming the operation. Cloning is cheap and
/// clones share the underlying transport.
#[derive(Clone, Debug)]
pub struct Client {
    retry_client: RetryClient,
}

impl Client {
    /// Creates a client configured from the environment, see
    /// [`ClientOptions::from_env`].
    pub fn new() -> Result<Self, Error> {
        Self::with_options(ClientOptions::from_env())
    }

    /// Creates a client configured from the environment, but using the
    /// given credentials.
    pub fn with_credentials(credentials: Arc<dyn Credentials>) -> Result<Self, Error> {
        Self::with_options(ClientOptions::from_env().with_credentials(credentials))
    }

    /// Creates a client talking HTTP to the configured endpoint, with the
    /// default retry and backoff policies.
    ///
    /// When raw client tracing is enabled in `options`, every call made to
    /// the transport is logged.
    pub fn with_options(options: ClientOptions) -> Result<Self, Error> {
        let tracing = options.enable_raw_client_tracing();
        let mut raw_client: Arc<dyn RawClient> = Arc::new(RestClient::new(options)?);
        if tracing {
            log::debug!("raw client tracing enabled");
            raw_client = Arc::new(LoggingClient::new(raw_client));
        }
        Ok(ClientBuilder::new(raw_client).build())
    }

    pub fn builder(raw_client: Arc<dyn RawClient>) -> ClientBuilder {
        ClientBuilder::new(raw_client)
    }

    /// The chain of raw clients below the retry layer.
    pub fn raw_client(&self) -> &Arc<dyn RawClient> {
        self.retry_client.client()
    }

    pub fn options(&self) -> &ClientOptions {
        self.retry_client.client_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_options_wraps_transport_when_tracing() {
        let options = ClientOptions::builder()
            .endpoint("http://127.0.0.1:9")
            .enable_raw_client_tracing(true)
            .build();
        let client = Client::with_options(options).unwrap();
        assert!(format!("{:?}", client.raw_client()).starts_with("LoggingClient"));
        assert_eq!(client.options().endpoint(), "http://127.0.0.1:9");
    }

    #[test]
    fn test_with_options_without_tracing() {
        let options = ClientOptions::builder().endpoint("http://127.0.0.1:9").build();
        let client = Client::with_options(options).unwrap();
        assert!(format!("{:?}", client.raw_client()).starts_with("RestClient"));
    }
}
