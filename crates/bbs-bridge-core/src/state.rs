use serde::Deserialize;
use serde::Serialize;

use crate::screen::ScreenSnapshot;

/// The UI mode a snapshot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenState {
    MainMenu,
    BoardSearch,
    BoardList,
    Editor,
    PostingGuide,
    CategorySelect,
    TitleInput,
    SignatureSelect,
    SavePrompt,
    PostSuccess,
    PressAnyKey,
    BoardEnter,
    Unknown,
}

impl ScreenState {
    pub const ALL: [ScreenState; 13] = [
        ScreenState::MainMenu,
        ScreenState::BoardSearch,
        ScreenState::BoardList,
        ScreenState::Editor,
        ScreenState::PostingGuide,
        ScreenState::CategorySelect,
        ScreenState::TitleInput,
        ScreenState::SignatureSelect,
        ScreenState::SavePrompt,
        ScreenState::PostSuccess,
        ScreenState::PressAnyKey,
        ScreenState::BoardEnter,
        ScreenState::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenState::MainMenu => "main_menu",
            ScreenState::BoardSearch => "board_search",
            ScreenState::BoardList => "board_list",
            ScreenState::Editor => "editor",
            ScreenState::PostingGuide => "posting_guide",
            ScreenState::CategorySelect => "category_select",
            ScreenState::TitleInput => "title_input",
            ScreenState::SignatureSelect => "signature_select",
            ScreenState::SavePrompt => "save_prompt",
            ScreenState::PostSuccess => "post_success",
            ScreenState::PressAnyKey => "press_any_key",
            ScreenState::BoardEnter => "board_enter",
            ScreenState::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ScreenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A screen is tagged `state` when every `required` substring is present.
struct Marker {
    state: ScreenState,
    required: &'static [&'static str],
}

/// Evaluated top to bottom; first match wins.
///
/// The board list and the category prompt both mention `看板`, so the
/// two-substring board list marker must stay ahead of the category marker.
const MARKERS: &[Marker] = &[
    Marker {
        state: ScreenState::MainMenu,
        required: &["【主功能表】"],
    },
    Marker {
        state: ScreenState::BoardSearch,
        required: &["請輸入看板名稱"],
    },
    Marker {
        state: ScreenState::BoardList,
        required: &["看板《", "[^P]發表"],
    },
    Marker {
        state: ScreenState::Editor,
        required: &["編輯文章", "Ctrl-Z"],
    },
    Marker {
        state: ScreenState::PostingGuide,
        required: &["文 章 發 表 綱 領"],
    },
    Marker {
        state: ScreenState::CategorySelect,
        required: &["類別:", "看板"],
    },
    Marker {
        state: ScreenState::TitleInput,
        required: &["標題："],
    },
    Marker {
        state: ScreenState::SignatureSelect,
        required: &["選擇簽名檔"],
    },
    Marker {
        state: ScreenState::SavePrompt,
        required: &["[S]存檔"],
    },
    Marker {
        state: ScreenState::PostSuccess,
        required: &["順利貼出佈告"],
    },
    Marker {
        state: ScreenState::PressAnyKey,
        required: &["請按任意鍵繼續"],
    },
    Marker {
        state: ScreenState::BoardEnter,
        required: &["本板用途僅供"],
    },
];

pub fn classify(snapshot: &ScreenSnapshot) -> ScreenState {
    classify_text(snapshot.text())
}

pub fn classify_text(text: &str) -> ScreenState {
    MARKERS
        .iter()
        .find(|marker| marker.required.iter().all(|needle| text.contains(needle)))
        .map(|marker| marker.state)
        .unwrap_or(ScreenState::Unknown)
}
