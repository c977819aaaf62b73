// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request pacing and throttling backoff.

use std::time::Duration;

/// Source of delays between requests.
///
/// Production code sleeps the current thread; tests record the requested
/// durations instead of waiting.
pub trait Waiter {
    fn wait(&mut self, duration: Duration);
}

/// Waiter that blocks the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadWaiter;

impl Waiter for ThreadWaiter {
    fn wait(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Attempt ceiling, backoff and per-entity pacing for entity creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per entity, first attempt included.
    pub max_attempts: u32,
    /// Backoff unit; attempt `n` waits `n` units after a throttled response.
    pub backoff_base: Duration,
    /// Pause after each successfully created module.
    pub module_pacing: Duration,
    /// Pause after each successfully created issue.
    pub issue_pacing: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            backoff_base: Duration::from_secs(5),
            module_pacing: Duration::from_millis(500),
            issue_pacing: Duration::from_millis(300),
        }
    }
}

impl RetryPolicy {
    /// A policy that never waits, keeping the default attempt ceiling.
    pub fn immediate() -> Self {
        RetryPolicy {
            backoff_base: Duration::ZERO,
            module_pacing: Duration::ZERO,
            issue_pacing: Duration::ZERO,
            ..RetryPolicy::default()
        }
    }

    /// Wait after throttled attempt `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base.saturating_mul(attempt)
    }

    /// Whether another attempt is allowed after `attempt` attempts.
    pub fn can_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}
