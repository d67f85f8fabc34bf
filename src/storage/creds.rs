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

//! Credential providers
//!
//! Acquiring and refreshing credentials is left to the caller; the client
//! only asks a provider for the `Authorization` header to attach.

/// Provider trait to fetch the authorization header for a request
pub trait Credentials: std::fmt::Debug + Send + Sync {
    /// Returns the value of the `Authorization` header, or `None` to send
    /// the request anonymously.
    fn authorization_header(&self) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
/// Sends every request without an `Authorization` header
pub struct AnonymousCredentials;

impl Credentials for AnonymousCredentials {
    fn authorization_header(&self) -> Option<String> {
        None
    }
}

#[derive(Clone)]
/// Static OAuth2 access token credential provider
pub struct AccessTokenCredentials {
    token: String,
}

impl AccessTokenCredentials {
    /// Returns a provider that sends `Authorization: Bearer <token>`
    ///
    /// # Examples
    ///
    /// ```
    /// use cloud_storage::storage::creds::{AccessTokenCredentials, Credentials};
    /// let provider = AccessTokenCredentials::new("ya29.token");
    /// assert_eq!(provider.authorization_header().as_deref(), Some("Bearer ya29.token"));
    /// ```
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for AccessTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCredentials")
            .field("token", &"*****")
            .finish()
    }
}

impl Credentials for AccessTokenCredentials {
    fn authorization_header(&self) -> Option<String> {
        Some(format!("Bearer {}", self.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_sends_nothing() {
        assert!(AnonymousCredentials.authorization_header().is_none());
    }

    #[test]
    fn test_access_token_is_redacted_in_debug() {
        let creds = AccessTokenCredentials::new("secret-token");
        assert!(!format!("{creds:?}").contains("secret-token"));
    }
}
