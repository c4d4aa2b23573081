//! Screens whose layout is fixed: the record mostly lists what can be done.

use serde::Serialize;

use super::Hotkey;
use super::ScreenPreview;
use super::hotkey;
use crate::screen::ScreenSnapshot;

const ANY_KEY_PROMPT: &str = "請按任意鍵";
const NOTICE_LINES: usize = 3;
const PRESS_ANY_KEY: &str = "press_any_key";

const EDITOR_COMMANDS: &[Hotkey] = &[
    hotkey("ctrl_x", "存檔/結束"),
    hotkey("ctrl_q", "放棄"),
    hotkey("ctrl_z", "操作說明"),
    hotkey("ctrl_w", "檔案處理"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaveOption {
    pub key: &'static str,
    pub action: &'static str,
    pub description: &'static str,
}

const fn save_option(key: &'static str, action: &'static str, description: &'static str) -> SaveOption {
    SaveOption {
        key,
        action,
        description,
    }
}

const SAVE_OPTIONS: &[SaveOption] = &[
    save_option("S", "save", "存檔"),
    save_option("L", "local", "站內"),
    save_option("A", "abort", "放棄"),
    save_option("T", "title", "改標題"),
    save_option("E", "edit", "繼續"),
    save_option("R", "read_temp", "讀暫存檔"),
    save_option("W", "write_temp", "寫暫存檔"),
    save_option("D", "delete_temp", "刪暫存檔"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorStats {
    pub mode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorContext {
    pub stats: EditorStats,
    pub available_commands: &'static [Hotkey],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavePromptContext {
    pub prompt: &'static str,
    pub options: &'static [SaveOption],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSuccessContext {
    pub success: bool,
    pub message: &'static str,
    pub next_action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardEnterContext {
    pub notice: String,
    pub next_action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingGuideContext {
    pub screen_preview: ScreenPreview,
    pub next_action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressAnyKeyContext {
    /// Leading text of the paused page, without the prompt itself.
    pub message: String,
    pub screen_preview: ScreenPreview,
    pub next_action: &'static str,
}

pub(super) fn editor() -> EditorContext {
    EditorContext {
        stats: EditorStats { mode: "insert" },
        available_commands: EDITOR_COMMANDS,
    }
}

pub(super) fn save_prompt() -> SavePromptContext {
    SavePromptContext {
        prompt: "檔案處理",
        options: SAVE_OPTIONS,
    }
}

pub(super) fn post_success() -> PostSuccessContext {
    PostSuccessContext {
        success: true,
        message: "順利貼出佈告",
        next_action: PRESS_ANY_KEY,
    }
}

pub(super) fn board_enter(snapshot: &ScreenSnapshot) -> BoardEnterContext {
    BoardEnterContext {
        notice: leading_text(snapshot),
        next_action: PRESS_ANY_KEY,
    }
}

pub(super) fn posting_guide(snapshot: &ScreenSnapshot) -> PostingGuideContext {
    PostingGuideContext {
        screen_preview: ScreenPreview::of(snapshot),
        next_action: PRESS_ANY_KEY,
    }
}

pub(super) fn press_any_key(snapshot: &ScreenSnapshot) -> PressAnyKeyContext {
    PressAnyKeyContext {
        message: leading_text(snapshot),
        screen_preview: ScreenPreview::of(snapshot),
        next_action: PRESS_ANY_KEY,
    }
}

/// First few non-empty lines that are not the any-key prompt, space-joined.
fn leading_text(snapshot: &ScreenSnapshot) -> String {
    snapshot
        .non_empty_lines()
        .filter(|line| !line.contains(ANY_KEY_PROMPT))
        .take(NOTICE_LINES)
        .collect::<Vec<_>>()
        .join(" ")
}
