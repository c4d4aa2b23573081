use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::Hotkey;
use super::hotkey;
use crate::screen::ScreenSnapshot;

/// `【板主：a/b】 Name 看板《id》`
static MODERATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【板主：([^】]+)】").expect("Invalid moderators regex"));

static BOARD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"】\s*(\S+)\s+看板").expect("Invalid board name regex"));

static BOARD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"看板《([^》]+)》").expect("Invalid board id regex"));

/// `>    6 +  02/23 carol   ◇ [Tag] Hello`
///
/// Groups: cursor, id, reply marker, date, author, title. The decorative
/// glyph before the title is optional and dropped.
static ARTICLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(>?)\s*(\d+)\s+(\+?)\s+(\d+/\d+)\s+(\S+)\s+(?:[◇◆]\s+)?(.+)")
        .expect("Invalid article line regex")
});

const PAGINATION_NOTE: &str = "Showing current page only. Use bbs_send_key('pgup'/'pgdn') to navigate pages, or 'home'/'end' for first/last page.";

const AVAILABLE_ACTIONS: &[&str] = &["read", "post", "search", "favorite", "back"];

const HOTKEYS: &[Hotkey] = &[
    hotkey("left", "離開"),
    hotkey("right", "閱讀"),
    hotkey("ctrl_p", "發表"),
    hotkey("pgup", "上一頁"),
    hotkey("pgdn", "下一頁"),
    hotkey("home", "第一頁"),
    hotkey("end", "最後一頁"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardInfo {
    pub id: String,
    pub name: String,
    pub moderators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleEntry {
    /// Zero-based row on the screen.
    pub line_number: usize,
    pub id: u64,
    pub date: String,
    pub author: String,
    pub title: String,
    pub has_responses: bool,
    pub is_new: bool,
    pub has_cursor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticleCursor {
    pub line: usize,
    pub article_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub visible_count: usize,
    pub first_article_id: u64,
    pub last_article_id: u64,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardActions {
    pub available: &'static [&'static str],
    pub hotkeys: &'static [Hotkey],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardListContext {
    pub board: BoardInfo,
    pub articles: Vec<ArticleEntry>,
    pub cursor: Option<ArticleCursor>,
    pub pagination: Pagination,
    pub actions: BoardActions,
}

pub(super) fn extract(snapshot: &ScreenSnapshot) -> BoardListContext {
    let mut board = BoardInfo::default();
    let mut articles = Vec::new();
    let mut cursor = None;

    for (line_number, line) in snapshot.lines().iter().enumerate() {
        if line.contains("【板主：") && line.contains("看板《") {
            board = parse_header(line);
            continue;
        }

        let Some(article) = parse_article(line_number, line) else {
            continue;
        };
        if article.has_cursor {
            cursor = Some(ArticleCursor {
                line: line_number,
                article_id: article.id,
            });
        }
        articles.push(article);
    }

    let pagination = Pagination {
        visible_count: articles.len(),
        first_article_id: articles.first().map_or(0, |a| a.id),
        last_article_id: articles.last().map_or(0, |a| a.id),
        note: PAGINATION_NOTE,
    };

    BoardListContext {
        board,
        articles,
        cursor,
        pagination,
        actions: BoardActions {
            available: AVAILABLE_ACTIONS,
            hotkeys: HOTKEYS,
        },
    }
}

fn parse_header(line: &str) -> BoardInfo {
    let capture = |re: &Regex| {
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    BoardInfo {
        id: capture(&BOARD_ID).unwrap_or_default(),
        name: capture(&BOARD_NAME).unwrap_or_default(),
        moderators: capture(&MODERATORS)
            .map(|mods| mods.split('/').map(|m| m.trim().to_string()).collect())
            .unwrap_or_default(),
    }
}

fn parse_article(line_number: usize, line: &str) -> Option<ArticleEntry> {
    let caps = ARTICLE_LINE.captures(line)?;
    // Ids too large for u64 are not real article numbers.
    let id = caps[2].parse().ok()?;
    let has_responses = &caps[3] == "+";

    Some(ArticleEntry {
        line_number,
        id,
        date: caps[4].to_string(),
        author: caps[5].to_string(),
        title: caps[6].trim().to_string(),
        has_responses,
        is_new: has_responses,
        has_cursor: &caps[1] == ">",
    })
}
