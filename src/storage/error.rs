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

//! Error definitions for storage operations

use crate::storage::status::Status;
use thiserror::Error;

/// Errors surfaced by [`Client`](crate::storage::Client).
///
/// The two failure classes of an operation are kept apart: a permanent
/// failure was never retried, an exhausted one was retried until the
/// retry policy gave up.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Permanent error in {operation}: {status}")]
    PermanentFailure {
        operation: &'static str,
        status: Status,
    },

    #[error("Retry policy exhausted in {operation}: {status}")]
    RetryPolicyExhausted {
        operation: &'static str,
        status: Status,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Name of the operation that failed, when the failure came from a call.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::PermanentFailure { operation, .. }
            | Error::RetryPolicyExhausted { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// The last status observed before the call was abandoned.
    pub fn status(&self) -> Option<&Status> {
        match self {
            Error::PermanentFailure { status, .. } | Error::RetryPolicyExhausted { status, .. } => {
                Some(status)
            }
            _ => None,
        }
    }
}
