use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Retry and parallelism knobs of the blacklist scheduler.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    retries: u32,
    backoff_base: Duration,
    backoff_step: Duration,
    jobs: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 5,
            backoff_base: Duration::from_secs(23),
            backoff_step: Duration::from_secs(23),
            jobs: 1,
        }
    }
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total attempts per work item. Zero is treated as one.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_backoff(mut self, base: Duration, step: Duration) -> Self {
        self.backoff_base = base;
        self.backoff_step = step;
        self
    }

    /// Worker threads per round; 1 runs the round inline.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn rounds(&self) -> usize {
        self.retries.max(1) as usize
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Pause taken after round `round` (0-indexed) when items are requeued.
    pub fn delay_for_round(&self, round: usize) -> Duration {
        let step = u32::try_from(round).unwrap_or(u32::MAX);
        self.backoff_base
            .saturating_add(self.backoff_step.saturating_mul(step))
    }
}

/// Pauses the scheduler between rounds.
pub trait Sleeper {
    fn sleep(&self, delay: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}
