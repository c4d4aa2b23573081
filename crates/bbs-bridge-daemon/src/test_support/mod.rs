mod hangup_sleeper;
mod mock_connector;
mod scripted_screen;

pub use hangup_sleeper::HangupSleeper;
pub use mock_connector::MockConnector;
pub use scripted_screen::ScriptedScreen;
pub use scripted_screen::screen_bytes;

/// Let spawned tasks (the inbound pump) drain what is queued for them.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
