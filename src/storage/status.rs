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

//! Status values exchanged between raw clients and their decorators

use std::fmt;

/// Canonical outcome of a single call to the storage service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Ok,
    // transient
    Unavailable,
    DeadlineExceeded,
    ResourceExhausted,
    Internal,
    // permanent
    InvalidArgument,
    NotFound,
    PermissionDenied,
    Unauthenticated,
    AlreadyExists,
    FailedPrecondition,
    OutOfRange,
    Unknown,
}

impl StatusCode {
    /// Returns true for failures that may succeed if the request is replayed.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            StatusCode::Unavailable
                | StatusCode::DeadlineExceeded
                | StatusCode::ResourceExhausted
                | StatusCode::Internal
        )
    }

    /// Returns true for failures that will never succeed on replay.
    pub fn is_permanent(self) -> bool {
        self != StatusCode::Ok && !self.is_transient()
    }

    /// Maps an HTTP status code returned by the JSON API.
    pub fn from_http(code: u16) -> StatusCode {
        match code {
            200..=299 => StatusCode::Ok,
            408 | 504 => StatusCode::DeadlineExceeded,
            429 => StatusCode::ResourceExhausted,
            500 => StatusCode::Internal,
            502 | 503 => StatusCode::Unavailable,
            400 => StatusCode::InvalidArgument,
            401 => StatusCode::Unauthenticated,
            403 => StatusCode::PermissionDenied,
            404 => StatusCode::NotFound,
            409 => StatusCode::AlreadyExists,
            412 => StatusCode::FailedPrecondition,
            416 => StatusCode::OutOfRange,
            _ => StatusCode::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Unavailable => "UNAVAILABLE",
            StatusCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
            StatusCode::ResourceExhausted => "RESOURCE_EXHAUSTED",
            StatusCode::Internal => "INTERNAL",
            StatusCode::InvalidArgument => "INVALID_ARGUMENT",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::PermissionDenied => "PERMISSION_DENIED",
            StatusCode::Unauthenticated => "UNAUTHENTICATED",
            StatusCode::AlreadyExists => "ALREADY_EXISTS",
            StatusCode::FailedPrecondition => "FAILED_PRECONDITION",
            StatusCode::OutOfRange => "OUT_OF_RANGE",
            StatusCode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (code, message) pair describing how a call ended.
///
/// Raw clients and their decorators report every failure, transient or
/// permanent, through a `Status`; they never panic for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    code: StatusCode,
    message: String,
}

impl Default for Status {
    fn default() -> Self {
        Status::ok()
    }
}

impl Status {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn ok() -> Self {
        Self::new(StatusCode::Ok, "")
    }

    /// Builds a status from an HTTP response code and its body or reason.
    pub fn from_http(code: u16, message: impl Into<String>) -> Self {
        Self::new(StatusCode::from_http(code), message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Unavailable, message)
    }

    pub fn deadline_exceeded(message: impl Into<String>) -> Self {
        Self::new(StatusCode::DeadlineExceeded, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, message)
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PermissionDenied, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(StatusCode::InvalidArgument, message)
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_ok(&self) -> bool {
        self.code == StatusCode::Ok
    }

    pub fn is_transient_failure(&self) -> bool {
        self.code.is_transient()
    }

    pub fn is_permanent_failure(&self) -> bool {
        self.code.is_permanent()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message, self.code)
    }
}

impl std::error::Error for Status {}
