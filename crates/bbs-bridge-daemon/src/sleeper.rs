//! Sleeper trait for deterministic timing in tests.
//!
//! The login script waits fixed amounts of time between steps. Production
//! code sleeps on the tokio timer; tests swap in [`MockSleeper`], which only
//! records what it was asked to do.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bbs_bridge_common::mutex_lock_or_recover;

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RealSleeper;

#[async_trait]
impl Sleeper for RealSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Records every requested sleep without waiting.
#[derive(Debug, Default)]
pub struct MockSleeper {
    durations: Mutex<Vec<Duration>>,
}

impl MockSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        mutex_lock_or_recover(&self.durations).len()
    }

    pub fn total_duration(&self) -> Duration {
        mutex_lock_or_recover(&self.durations).iter().sum()
    }

    pub fn durations(&self) -> Vec<Duration> {
        mutex_lock_or_recover(&self.durations).clone()
    }
}

#[async_trait]
impl Sleeper for MockSleeper {
    async fn sleep(&self, duration: Duration) {
        mutex_lock_or_recover(&self.durations).push(duration);
    }
}
