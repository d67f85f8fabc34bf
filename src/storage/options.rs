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

//! Configuration consumed by the default client constructors

use crate::storage::creds::{AccessTokenCredentials, AnonymousCredentials, Credentials};
use std::sync::Arc;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Default endpoint of the JSON API.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com";

/// Default version of the JSON API.
pub const DEFAULT_VERSION: &str = "v1";

/// Size of each range request issued by [`ObjectReadStream`](crate::storage::object_read_stream::ObjectReadStream).
pub const DEFAULT_DOWNLOAD_CHUNK_SIZE: u64 = 2 * 1024 * 1024; // 2 MiB

/// Overrides the endpoint, e.g. to point the client at an emulator.
pub const ENV_ENDPOINT: &str = "CLOUD_STORAGE_ENDPOINT";

/// Comma separated list of tracing components; `raw-client` enables the
/// logging decorator.
pub const ENV_ENABLE_TRACING: &str = "CLOUD_STORAGE_ENABLE_TRACING";

/// Static bearer token used when present.
pub const ENV_ACCESS_TOKEN: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Endpoint, credentials and behavior switches for a [`Client`](crate::storage::Client).
///
/// # Example
///
/// ```
/// use cloud_storage::storage::ClientOptions;
/// use cloud_storage::storage::creds::AccessTokenCredentials;
/// use std::sync::Arc;
///
/// let options = ClientOptions::builder()
///     .endpoint("http://localhost:9000")
///     .credentials(Arc::new(AccessTokenCredentials::new("token")))
///     .enable_raw_client_tracing(true)
///     .build();
/// assert_eq!(options.endpoint(), "http://localhost:9000");
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct ClientOptions {
    #[builder(default = DEFAULT_ENDPOINT.to_string(), setter(into))]
    endpoint: String,
    #[builder(default = DEFAULT_VERSION.to_string(), setter(into))]
    version: String,
    #[builder(default = Arc::new(AnonymousCredentials) as Arc<dyn Credentials>)]
    credentials: Arc<dyn Credentials>,
    /// Wrap the transport with a [`LoggingClient`](crate::storage::LoggingClient).
    #[builder(default)]
    enable_raw_client_tracing: bool,
    #[builder(default = DEFAULT_DOWNLOAD_CHUNK_SIZE)]
    download_chunk_size: u64,
    #[builder(default = Some(Duration::from_secs(60)))]
    timeout: Option<Duration>,
    /// Prepended to the user agent of every request.
    #[builder(default, setter(strip_option, into))]
    user_agent_prefix: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions::builder().build()
    }
}

impl ClientOptions {
    /// Builds options from the process environment, falling back to the
    /// defaults for anything that is not set.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENV_ENDPOINT).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        log::debug!("{ENV_ENDPOINT}={endpoint}");

        let enable_raw_client_tracing = std::env::var(ENV_ENABLE_TRACING)
            .map(|v| tracing_component_enabled(&v, "raw-client"))
            .unwrap_or(false);
        log::debug!("raw-client tracing enabled: {enable_raw_client_tracing}");

        let credentials: Arc<dyn Credentials> = match std::env::var(ENV_ACCESS_TOKEN) {
            Ok(token) if !token.is_empty() => {
                log::debug!("{ENV_ACCESS_TOKEN}=*****");
                Arc::new(AccessTokenCredentials::new(token))
            }
            _ => Arc::new(AnonymousCredentials),
        };

        ClientOptions::builder()
            .endpoint(endpoint)
            .credentials(credentials)
            .enable_raw_client_tracing(enable_raw_client_tracing)
            .build()
    }

    /// Returns a copy of these options using the given credentials.
    pub fn with_credentials(mut self, credentials: Arc<dyn Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn credentials(&self) -> &Arc<dyn Credentials> {
        &self.credentials
    }

    pub fn enable_raw_client_tracing(&self) -> bool {
        self.enable_raw_client_tracing
    }

    pub fn download_chunk_size(&self) -> u64 {
        self.download_chunk_size
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> String {
        let base = String::from("cloud-storage-rs/")
            + env!("CARGO_PKG_VERSION")
            + " ("
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ")";
        match &self.user_agent_prefix {
            Some(prefix) => format!("{prefix} {base}"),
            None => base,
        }
    }
}

fn tracing_component_enabled(value: &str, component: &str) -> bool {
    value.split(',').any(|c| c.trim() == component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(options.version(), "v1");
        assert!(!options.enable_raw_client_tracing());
        assert!(options.credentials().authorization_header().is_none());
        assert_eq!(options.download_chunk_size(), DEFAULT_DOWNLOAD_CHUNK_SIZE);
    }

    #[test]
    fn test_tracing_components() {
        assert!(tracing_component_enabled("raw-client", "raw-client"));
        assert!(tracing_component_enabled("http, raw-client", "raw-client"));
        assert!(!tracing_component_enabled("http", "raw-client"));
        assert!(!tracing_component_enabled("", "raw-client"));
    }

    #[test]
    fn test_user_agent_prefix() {
        let options = ClientOptions::builder().user_agent_prefix("my-app/1.0").build();
        assert!(options.user_agent().starts_with("my-app/1.0 cloud-storage-rs/"));
    }

    #[test]
    fn test_with_credentials() {
        let options = ClientOptions::default()
            .with_credentials(Arc::new(AccessTokenCredentials::new("abc")));
        assert_eq!(
            options.credentials().authorization_header().as_deref(),
            Some("Bearer abc")
        );
    }
}
