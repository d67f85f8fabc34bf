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


//! Policies computing how long to wait between attempts

use rand::Rng;
use std::fmt::Debug;
use std::time::Duration;

pub trait BackoffPolicy: Send + Sync + Debug {
    /// Returns the delay before the next attempt and advances the policy.
    fn on_completion(&mut self) -> Duration;

    /// Returns a fresh working copy, starting from the initial delay.
    fn clone_box(&self) -> Box<dyn BackoffPolicy>;
}

/// Exponentially growing delays with jitter.
///
/// Each delay is drawn uniformly from `[range / 2, range]`. The range starts
/// at `initial_delay`, is multiplied by `scaling` after every delay and never
/// exceeds `maximum_delay`.
#[derive(Clone, Debug)]
pub struct ExponentialBackoffPolicy {
    initial_delay: Duration,
    current_range: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffPolicy {
    /// # Panics
    ///
    /// Panics if `scaling` is less than 1.0 or if `maximum_delay` is less
    /// than `initial_delay`.
    pub fn new(initial_delay: Duration, maximum_delay: Duration, scaling: f64) -> Self {
        assert!(
            scaling >= 1.0,
            "scaling factor ({scaling}) must be greater than or equal to 1.0"
        );
        assert!(
            maximum_delay >= initial_delay,
            "maximum delay ({maximum_delay:?}) must be greater than or equal to initial delay ({initial_delay:?})"
        );
        Self {
            initial_delay,
            current_range: initial_delay,
            maximum_delay,
            scaling,
        }
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub fn maximum_delay(&self) -> Duration {
        self.maximum_delay
    }

    pub fn scaling(&self) -> f64 {
        self.scaling
    }
}

impl Default for ExponentialBackoffPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(5 * 60), 2.0)
    }
}

impl BackoffPolicy for ExponentialBackoffPolicy {
    fn on_completion(&mut self) -> Duration {
        let range = self.current_range;
        let delay = rand::rng().random_range(range / 2..=range);
        self.current_range = Duration::try_from_secs_f64(range.as_secs_f64() * self.scaling)
            .unwrap_or(self.maximum_delay)
            .min(self.maximum_delay);
        delay
    }

    fn clone_box(&self) -> Box<dyn BackoffPolicy> {
        Box::new(Self::new(
            self.initial_delay,
            self.maximum_delay,
            self.scaling,
        ))
    }
}
