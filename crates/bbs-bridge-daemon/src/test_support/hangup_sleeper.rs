use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::MockConnector;
use super::settle;
use crate::sleeper::Sleeper;

/// Sleeper that, on its `hangup_on`-th call, has the remote draw a last
/// screen and close the link. Like `MockSleeper`, it never waits.
pub struct HangupSleeper {
    connector: Arc<MockConnector>,
    hangup_on: usize,
    farewell: Vec<u8>,
    calls: AtomicUsize,
}

impl HangupSleeper {
    pub fn new(connector: Arc<MockConnector>, hangup_on: usize, farewell: Vec<u8>) -> Self {
        Self {
            connector,
            hangup_on,
            farewell,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Sleeper for HangupSleeper {
    async fn sleep(&self, _duration: Duration) {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.hangup_on {
            self.connector.feed(&self.farewell).await;
            self.connector.close_remote();
            settle().await;
        }
    }
}
