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


//! Policies deciding whether a failed call is attempted again.
//!
//! A policy configured on the client is a prototype: every call starts by
//! asking it for a fresh working copy with [`RetryPolicy::clone_box`], so
//! concurrent and consecutive calls never share retry budgets.

use crate::storage::status::Status;
use std::fmt::Debug;
use std::time::{Duration, Instant};

pub trait RetryPolicy: Send + Sync + Debug {
    /// Records a failure and returns whether another attempt is allowed.
    ///
    /// Returns `false` for permanent failures.
    fn on_failure(&mut self, status: &Status) -> bool;

    fn is_exhausted(&self) -> bool;

    /// Whether `status` describes a failure that no retry can fix.
    fn is_permanent_failure(&self, status: &Status) -> bool {
        status.is_permanent_failure()
    }

    /// Time left before the policy gives up, for policies bounded by time.
    fn remaining_time(&self) -> Option<Duration> {
        None
    }

    /// Returns a fresh working copy with an untouched budget.
    fn clone_box(&self) -> Box<dyn RetryPolicy>;
}

/// Tolerates up to `maximum_failures` transient failures, that is up to
/// `maximum_failures + 1` attempts.
#[derive(Clone, Debug)]
pub struct LimitedErrorCountRetryPolicy {
    failure_count: u32,
    maximum_failures: u32,
}

impl LimitedErrorCountRetryPolicy {
    pub fn new(maximum_failures: u32) -> Self {
        Self {
            failure_count: 0,
            maximum_failures,
        }
    }

    pub fn maximum_failures(&self) -> u32 {
        self.maximum_failures
    }
}

impl RetryPolicy for LimitedErrorCountRetryPolicy {
    fn on_failure(&mut self, status: &Status) -> bool {
        if self.is_permanent_failure(status) {
            return false;
        }
        self.failure_count = self.failure_count.saturating_add(1);
        self.failure_count <= self.maximum_failures
    }

    fn is_exhausted(&self) -> bool {
        self.failure_count > self.maximum_failures
    }

    fn clone_box(&self) -> Box<dyn RetryPolicy> {
        Box::new(Self::new(self.maximum_failures))
    }
}

/// Retries transient failures until `maximum_duration` has elapsed since
/// the working copy was created.
#[derive(Clone, Debug)]
pub struct LimitedTimeRetryPolicy {
    maximum_duration: Duration,
    deadline: Instant,
}

impl LimitedTimeRetryPolicy {
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            maximum_duration,
            deadline: Instant::now() + maximum_duration,
        }
    }

    pub fn maximum_duration(&self) -> Duration {
        self.maximum_duration
    }
}

impl RetryPolicy for LimitedTimeRetryPolicy {
    fn on_failure(&mut self, status: &Status) -> bool {
        if self.is_permanent_failure(status) {
            return false;
        }
        !self.is_exhausted()
    }

    fn is_exhausted(&self) -> bool {
        Instant::now() >= self.deadline
    }

    fn remaining_time(&self) -> Option<Duration> {
        Some(self.deadline.saturating_duration_since(Instant::now()))
    }

    fn clone_box(&self) -> Box<dyn RetryPolicy> {
        Box::new(Self::new(self.maximum_duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_count_tolerates_n_failures() {
        let mut policy = LimitedErrorCountRetryPolicy::new(2);
        let transient = Status::unavailable("try again");
        assert!(policy.on_failure(&transient));
        assert!(policy.on_failure(&transient));
        assert!(!policy.is_exhausted());
        assert!(!policy.on_failure(&transient));
        assert!(policy.is_exhausted());
    }

    #[test]
    fn test_error_count_zero_budget() {
        let mut policy = LimitedErrorCountRetryPolicy::new(0);
        assert!(!policy.on_failure(&Status::unavailable("")));
        assert!(policy.is_exhausted());
    }

    #[test]
    fn test_permanent_failure_stops_without_spending_budget() {
        let mut policy = LimitedErrorCountRetryPolicy::new(3);
        assert!(!policy.on_failure(&Status::not_found("no such object")));
        assert!(!policy.is_exhausted());
    }

    #[test]
    fn test_clone_box_resets_budget() {
        let mut policy = LimitedErrorCountRetryPolicy::new(1);
        policy.on_failure(&Status::unavailable(""));
        policy.on_failure(&Status::unavailable(""));
        assert!(policy.is_exhausted());
        let mut fresh = policy.clone_box();
        assert!(!fresh.is_exhausted());
        assert!(fresh.on_failure(&Status::unavailable("")));
    }

    #[test]
    fn test_limited_time() {
        let mut policy = LimitedTimeRetryPolicy::new(Duration::from_secs(60));
        assert!(policy.on_failure(&Status::deadline_exceeded("slow")));
        assert!(!policy.on_failure(&Status::permission_denied("no")));
        assert!(policy.remaining_time().unwrap() <= Duration::from_secs(60));

        let mut expired = LimitedTimeRetryPolicy::new(Duration::ZERO);
        assert!(expired.is_exhausted());
        assert!(!expired.on_failure(&Status::unavailable("")));
        assert_eq!(expired.remaining_time(), Some(Duration::ZERO));
    }

    #[test]
    fn test_limited_time_clone_restarts_clock() {
        let prototype = LimitedTimeRetryPolicy::new(Duration::from_millis(100));
        std::thread::sleep(Duration::from_millis(120));
        assert!(prototype.is_exhausted());
        assert!(!prototype.clone_box().is_exhausted());
    }

    quickcheck! {
        fn prop_error_count_allows_exactly_n_retries(budget: u8) -> bool {
            let budget = u32::from(budget);
            let mut policy = LimitedErrorCountRetryPolicy::new(budget);
            let transient = Status::unavailable("");
            let allowed = (0..=budget).filter(|_| policy.on_failure(&transient)).count();
            allowed as u32 == budget && policy.is_exhausted()
        }
    }
}
