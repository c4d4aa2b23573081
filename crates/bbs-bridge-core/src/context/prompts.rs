//! Single-line input prompts met while posting or jumping to a board.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::current_board;
use crate::screen::ScreenSnapshot;

static TITLE_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"標題：(.+)").expect("Invalid title input regex"));

static BOARD_SEARCH_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"請輸入看板名稱[^：]*：(.+)").expect("Invalid board search regex")
});

const TITLE_MAX_LENGTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category { key: "a", name: "問題" },
    Category { key: "b", name: "情報" },
    Category { key: "c", name: "心得" },
    Category { key: "d", name: "討論" },
    Category { key: "e", name: "攻略" },
    Category { key: "f", name: "秘技" },
    Category { key: "g", name: "閒聊" },
    Category { key: "h", name: "其它" },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySelectContext {
    pub board: String,
    pub prompt: &'static str,
    pub categories: &'static [Category],
    pub can_skip: bool,
    pub skip_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleInputContext {
    pub board: String,
    pub prompt: &'static str,
    pub current_input: String,
    pub max_length: usize,
    pub waiting_for: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSearchContext {
    pub prompt: &'static str,
    pub current_input: String,
    pub waiting_for: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureSelectContext {
    pub prompt: &'static str,
    pub default: u8,
    pub available_signatures: Vec<u8>,
}

pub(super) fn category_select(snapshot: &ScreenSnapshot) -> CategorySelectContext {
    CategorySelectContext {
        board: current_board(snapshot),
        prompt: "類別:",
        categories: CATEGORIES,
        can_skip: true,
        skip_key: "enter",
    }
}

pub(super) fn title_input(snapshot: &ScreenSnapshot) -> TitleInputContext {
    TitleInputContext {
        board: current_board(snapshot),
        prompt: "標題：",
        current_input: typed_after(&TITLE_INPUT, snapshot),
        max_length: TITLE_MAX_LENGTH,
        waiting_for: "title",
    }
}

pub(super) fn board_search(snapshot: &ScreenSnapshot) -> BoardSearchContext {
    BoardSearchContext {
        prompt: "請輸入看板名稱(按空白鍵自動搜尋)：",
        current_input: typed_after(&BOARD_SEARCH_INPUT, snapshot),
        waiting_for: "board_name",
    }
}

pub(super) fn signature_select() -> SignatureSelectContext {
    SignatureSelectContext {
        prompt: "選擇簽名檔 (1 ~ 9, 0=不加)",
        default: 0,
        available_signatures: vec![0],
    }
}

/// Text after the first match of `label`, trimmed; empty when nothing is typed.
fn typed_after(label: &Regex, snapshot: &ScreenSnapshot) -> String {
    label
        .captures(snapshot.text())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{self, screen};

    #[test]
    fn test_category_select_reads_posting_board() {
        let ctx = category_select(&screen(test_fixtures::CATEGORY_SELECT));
        assert_eq!(ctx.board, "test");
        assert_eq!(ctx.categories.len(), 8);
        assert_eq!(ctx.categories[3], Category { key: "d", name: "討論" });
        assert!(ctx.can_skip);
        assert_eq!(ctx.skip_key, "enter");
    }

    #[test]
    fn test_title_input_current_text() {
        let ctx = title_input(&screen(test_fixtures::TITLE_INPUT));
        assert_eq!(ctx.current_input, "Hello world");
        assert_eq!(ctx.board, "test");
        assert_eq!(ctx.max_length, 80);
        assert_eq!(ctx.waiting_for, "title");
    }

    #[test]
    fn test_title_input_empty_when_nothing_typed() {
        let ctx = title_input(&screen(&["標題："]));
        assert_eq!(ctx.current_input, "");
        assert_eq!(ctx.board, "");
    }

    #[test]
    fn test_title_input_does_not_span_lines() {
        let ctx = title_input(&screen(&["標題：", "next line"]));
        assert_eq!(ctx.current_input, "");
    }

    #[test]
    fn test_board_search_current_text() {
        let ctx = board_search(&screen(test_fixtures::BOARD_SEARCH));
        assert_eq!(ctx.current_input, "test");
        assert_eq!(ctx.waiting_for, "board_name");
    }

    #[test]
    fn test_board_search_without_input() {
        let ctx = board_search(&screen(&["請輸入看板名稱(按空白鍵自動搜尋)："]));
        assert_eq!(ctx.current_input, "");
    }

    #[test]
    fn test_signature_select_defaults() {
        let ctx = signature_select();
        assert_eq!(ctx.default, 0);
        assert_eq!(ctx.available_signatures, vec![0]);
    }
}
