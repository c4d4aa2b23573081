use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::screen::ScreenSnapshot;

/// `(B)oards       【佈告討論區】`
static MENU_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([A-Z])\)([0-9A-Za-z_]+)\s+【([^】]+)】").expect("Invalid menu option regex")
});

/// `[2/23 星期一 13:18] [訪客] 511 人 [到此一遊] example_user`
static STATUS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\].*\[訪客\]\s*(\d+)\s*人.*\[([^\]]+)\]\s*(\S+)")
        .expect("Invalid status line regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuOption {
    pub key: String,
    pub name: String,
    pub description: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub username: String,
    /// Mood tag shown next to the username, e.g. `到此一遊`.
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MainMenuContext {
    pub user: UserInfo,
    pub online_users: u32,
    pub menu_options: Vec<MenuOption>,
    pub timestamp: String,
}

pub(super) fn extract(snapshot: &ScreenSnapshot) -> MainMenuContext {
    let mut ctx = MainMenuContext::default();

    for line in snapshot.lines() {
        if let Some(caps) = MENU_OPTION.captures(line) {
            ctx.menu_options.push(MenuOption {
                key: caps[1].to_string(),
                name: caps[2].to_string(),
                description: caps[3].to_string(),
                selected: line.contains('>'),
            });
        }

        // Later status lines overwrite earlier ones.
        if let Some(caps) = STATUS_LINE.captures(line) {
            ctx.timestamp = caps[1].to_string();
            ctx.online_users = caps[2].parse().unwrap_or(0);
            ctx.user = UserInfo {
                username: caps[4].to_string(),
                status: caps[3].to_string(),
            };
        }
    }

    ctx
}
