use std::collections::VecDeque;
use std::sync::Mutex;

use bbs_bridge_common::mutex_lock_or_recover;
use bbs_bridge_core::ScreenSnapshot;
use bbs_bridge_core::ScreenSource;
use bbs_bridge_terminal::encode_big5;

/// Screen that plays a fixed sequence of frames, one per snapshot, and then
/// keeps showing the last one.
pub struct ScriptedScreen {
    frames: Mutex<VecDeque<String>>,
}

impl ScriptedScreen {
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let frames: VecDeque<String> = frames.into_iter().map(Into::into).collect();
        assert!(!frames.is_empty(), "ScriptedScreen needs at least one frame");
        Self {
            frames: Mutex::new(frames),
        }
    }
}

impl ScreenSource for ScriptedScreen {
    fn snapshot(&self) -> ScreenSnapshot {
        let mut frames = mutex_lock_or_recover(&self.frames);
        let frame = if frames.len() > 1 {
            frames.pop_front().unwrap_or_default()
        } else {
            frames.front().cloned().unwrap_or_default()
        };
        ScreenSnapshot::from_text(&frame)
    }
}

/// Wire bytes that clear the remote screen and draw `lines` from the top.
pub fn screen_bytes(lines: &[&str]) -> Vec<u8> {
    encode_big5(&format!("\x1b[H\x1b[2J{}", lines.join("\r\n")))
}
