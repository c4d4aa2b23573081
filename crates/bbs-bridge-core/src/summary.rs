//! Coarse, state-agnostic digest of a screen.
//!
//! Unlike [`crate::parse_context`] this never looks at the per-state layout;
//! it only needs the classifier tag plus a handful of substring heuristics,
//! so it degrades gracefully on screens nobody has written an extractor for.

use std::fmt;

use serde::Serialize;

use crate::screen::ScreenSnapshot;
use crate::state::ScreenState;
use crate::state::classify;

const PROMPT_INDICATORS: &[&str] = &["：", "?", "請", ">", "類別", "標題"];
const SUCCESS_MARKERS: &[&str] = &["成功", "順利"];
const ERROR_MARKERS: &[&str] = &["錯誤", "失敗"];
const EDGE_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenSummary {
    pub state: ScreenState,
    pub top_lines: Vec<String>,
    pub bottom_lines: Vec<String>,
    pub prompt: Option<String>,
    pub success: bool,
    pub error: bool,
}

pub fn summarize(snapshot: &ScreenSnapshot) -> ScreenSummary {
    let non_empty: Vec<&str> = snapshot.non_empty_lines().collect();
    let bottom_start = non_empty.len().saturating_sub(EDGE_LINES);

    let prompt = snapshot
        .lines()
        .iter()
        .find(|line| PROMPT_INDICATORS.iter().any(|p| line.contains(p)))
        .map(|line| line.trim().to_string());

    let text = snapshot.text();
    ScreenSummary {
        state: classify(snapshot),
        top_lines: non_empty.iter().take(EDGE_LINES).map(|l| l.to_string()).collect(),
        bottom_lines: non_empty[bottom_start..].iter().map(|l| l.to_string()).collect(),
        prompt,
        success: SUCCESS_MARKERS.iter().any(|m| text.contains(m)),
        error: ERROR_MARKERS.iter().any(|m| text.contains(m)),
    }
}

impl fmt::Display for ScreenSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = format!("[State: {}]\n", self.state);
        if !self.top_lines.is_empty() {
            out.push_str(&format!("Top: {}\n", self.top_lines.join(" | ")));
        }
        if !self.bottom_lines.is_empty() {
            out.push_str(&format!("Bottom: {}\n", self.bottom_lines.join(" | ")));
        }
        if let Some(prompt) = &self.prompt {
            out.push_str(&format!("Prompt: {}\n", prompt));
        }
        if self.success {
            out.push_str("Status: SUCCESS\n");
        }
        if self.error {
            out.push_str("Status: ERROR\n");
        }
        f.write_str(out.trim())
    }
}
