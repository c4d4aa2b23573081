//! Per-state context extraction.
//!
//! Each screen state has one extractor that turns a snapshot into a typed
//! record. Extractors are pure and only look at the snapshot they are given.
//! The state tag of the result always comes from [`classify`]; extractors
//! never decide it themselves.
//!
//! The patterns in the submodules encode the remote site's undocumented
//! layout, so each file keeps its patterns next to the tests that pin them.

mod board_list;
mod main_menu;
mod prompts;
mod static_screens;
mod unknown;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::screen::ScreenSnapshot;
use crate::state::ScreenState;
use crate::state::classify;

pub use board_list::ArticleCursor;
pub use board_list::ArticleEntry;
pub use board_list::BoardActions;
pub use board_list::BoardInfo;
pub use board_list::BoardListContext;
pub use board_list::Pagination;
pub use main_menu::MainMenuContext;
pub use main_menu::MenuOption;
pub use main_menu::UserInfo;
pub use prompts::BoardSearchContext;
pub use prompts::Category;
pub use prompts::CategorySelectContext;
pub use prompts::SignatureSelectContext;
pub use prompts::TitleInputContext;
pub use static_screens::BoardEnterContext;
pub use static_screens::EditorContext;
pub use static_screens::EditorStats;
pub use static_screens::PostSuccessContext;
pub use static_screens::PostingGuideContext;
pub use static_screens::PressAnyKeyContext;
pub use static_screens::SaveOption;
pub use static_screens::SavePromptContext;
pub use unknown::UnknownContext;

/// Structured view of one screen, tagged by its [`ScreenState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ParsedContext {
    MainMenu(MainMenuContext),
    BoardSearch(BoardSearchContext),
    BoardList(BoardListContext),
    Editor(EditorContext),
    PostingGuide(PostingGuideContext),
    CategorySelect(CategorySelectContext),
    TitleInput(TitleInputContext),
    SignatureSelect(SignatureSelectContext),
    SavePrompt(SavePromptContext),
    PostSuccess(PostSuccessContext),
    PressAnyKey(PressAnyKeyContext),
    BoardEnter(BoardEnterContext),
    Unknown(UnknownContext),
}

impl ParsedContext {
    pub fn state(&self) -> ScreenState {
        match self {
            ParsedContext::MainMenu(_) => ScreenState::MainMenu,
            ParsedContext::BoardSearch(_) => ScreenState::BoardSearch,
            ParsedContext::BoardList(_) => ScreenState::BoardList,
            ParsedContext::Editor(_) => ScreenState::Editor,
            ParsedContext::PostingGuide(_) => ScreenState::PostingGuide,
            ParsedContext::CategorySelect(_) => ScreenState::CategorySelect,
            ParsedContext::TitleInput(_) => ScreenState::TitleInput,
            ParsedContext::SignatureSelect(_) => ScreenState::SignatureSelect,
            ParsedContext::SavePrompt(_) => ScreenState::SavePrompt,
            ParsedContext::PostSuccess(_) => ScreenState::PostSuccess,
            ParsedContext::PressAnyKey(_) => ScreenState::PressAnyKey,
            ParsedContext::BoardEnter(_) => ScreenState::BoardEnter,
            ParsedContext::Unknown(_) => ScreenState::Unknown,
        }
    }
}

/// Classify `snapshot` and run the matching extractor.
pub fn parse_context(snapshot: &ScreenSnapshot) -> ParsedContext {
    extract(classify(snapshot), snapshot)
}

fn extract(state: ScreenState, snapshot: &ScreenSnapshot) -> ParsedContext {
    match state {
        ScreenState::MainMenu => ParsedContext::MainMenu(main_menu::extract(snapshot)),
        ScreenState::BoardSearch => ParsedContext::BoardSearch(prompts::board_search(snapshot)),
        ScreenState::BoardList => ParsedContext::BoardList(board_list::extract(snapshot)),
        ScreenState::Editor => ParsedContext::Editor(static_screens::editor()),
        ScreenState::PostingGuide => {
            ParsedContext::PostingGuide(static_screens::posting_guide(snapshot))
        }
        ScreenState::CategorySelect => {
            ParsedContext::CategorySelect(prompts::category_select(snapshot))
        }
        ScreenState::TitleInput => ParsedContext::TitleInput(prompts::title_input(snapshot)),
        ScreenState::SignatureSelect => {
            ParsedContext::SignatureSelect(prompts::signature_select())
        }
        ScreenState::SavePrompt => ParsedContext::SavePrompt(static_screens::save_prompt()),
        ScreenState::PostSuccess => ParsedContext::PostSuccess(static_screens::post_success()),
        ScreenState::PressAnyKey => {
            ParsedContext::PressAnyKey(static_screens::press_any_key(snapshot))
        }
        ScreenState::BoardEnter => ParsedContext::BoardEnter(static_screens::board_enter(snapshot)),
        ScreenState::Unknown => ParsedContext::Unknown(unknown::extract(snapshot)),
    }
}

/// Symbolic key and what it does on the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotkey {
    pub key: &'static str,
    pub description: &'static str,
}

pub(crate) const fn hotkey(key: &'static str, description: &'static str) -> Hotkey {
    Hotkey { key, description }
}

/// First two and last two non-empty lines of a screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScreenPreview {
    pub top_lines: Vec<String>,
    pub bottom_lines: Vec<String>,
}

const PREVIEW_LINES: usize = 2;

impl ScreenPreview {
    pub fn of(snapshot: &ScreenSnapshot) -> Self {
        let lines: Vec<&str> = snapshot.non_empty_lines().collect();
        let bottom_start = lines.len().saturating_sub(PREVIEW_LINES);
        Self {
            top_lines: lines
                .iter()
                .take(PREVIEW_LINES)
                .map(|l| l.to_string())
                .collect(),
            bottom_lines: lines[bottom_start..].iter().map(|l| l.to_string()).collect(),
        }
    }
}

static BOARD_ID_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"看板《([^》]+)》").expect("Invalid board id regex"));

static POSTING_TO_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"發表文章於【\s*(\S+)\s*】").expect("Invalid posting target regex")
});

/// Board the session is currently in, or an empty string.
pub(crate) fn current_board(snapshot: &ScreenSnapshot) -> String {
    let text = snapshot.text();
    BOARD_ID_MARKER
        .captures(text)
        .or_else(|| POSTING_TO_MARKER.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
