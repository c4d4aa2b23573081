use std::sync::Arc;
use std::sync::Mutex;

use vt100::Parser;

use bbs_bridge_common::mutex_lock_or_recover;
use bbs_bridge_core::ScreenSnapshot;
use bbs_bridge_core::ScreenSource;

pub const SCREEN_COLS: u16 = 80;
pub const SCREEN_ROWS: u16 = 24;

/// The remote never scrolls back; only the visible grid matters.
const SCROLLBACK: usize = 0;

/// Character grid fed with decoded output from the remote.
///
/// Clones share the same grid, so the receive path and the command path can
/// each hold one.
#[derive(Clone)]
pub struct VirtualTerminal {
    parser: Arc<Mutex<Parser>>,
    cols: u16,
    rows: u16,
}

impl VirtualTerminal {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            parser: Arc::new(Mutex::new(Parser::new(rows, cols, SCROLLBACK))),
            cols,
            rows,
        }
    }

    /// Feed already-decoded text, escape sequences included.
    pub fn process(&self, text: &str) {
        let mut parser = mutex_lock_or_recover(&self.parser);
        parser.process(text.as_bytes());
    }

    /// Blank the grid and forget every mode the remote has set.
    pub fn reset(&self) {
        let mut parser = mutex_lock_or_recover(&self.parser);
        *parser = Parser::new(self.rows, self.cols, SCROLLBACK);
    }
}

impl Default for VirtualTerminal {
    fn default() -> Self {
        Self::new(SCREEN_COLS, SCREEN_ROWS)
    }
}

impl ScreenSource for VirtualTerminal {
    fn snapshot(&self) -> ScreenSnapshot {
        let parser = mutex_lock_or_recover(&self.parser);
        // `rows` skips the continuation cell of double-width characters.
        ScreenSnapshot::new(parser.screen().rows(0, self.cols))
    }
}
