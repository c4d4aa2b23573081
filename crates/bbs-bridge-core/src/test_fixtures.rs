//! Captured screens used across the extractor test suites.

use crate::screen::ScreenSnapshot;
use crate::state::ScreenState;

pub const MAIN_MENU: &[&str] = &[
    "【主功能表】                        巴哈姆特電玩資訊站",
    "",
    "         (A)nnounce     【精華公佈欄】",
    "       > (B)oards       【佈告討論區】",
    "         (C)lass        【分類看板】",
    "         (F)avorite     【我的最愛】",
    "         (M)ail         【私人信件區】",
    "         (T)alk         【休閒聊天區】",
    "         (U)ser         【個人設定區】",
    "         (G)oodbye      【離開巴哈】",
    "",
    "[2/23 星期一 13:18] [訪客] 511 人 [到此一遊] example_user",
];

pub const BOARD_LIST: &[&str] = &[
    "【板主：alice/bob】 TestBoard 看板《test》",
    "[←]離開 [→]閱讀 [^P]發表文章 [b]備忘錄 [d]刪除 [z]精華區 [h]說明",
    "   編號    日 期 作  者       文  章  標  題",
    "       5    02/22 dave         ◇ [公告] Rules",
    ">    6 +  02/23 carol   ◇ [Tag] Hello",
    "   52067    02/23 pi           Re [Tag] Hello",
    "",
    "  文章選讀  (y)回應 (=[]<>)相關主題 (/?)搜尋標題",
];

pub const BOARD_SEARCH: &[&str] = &[
    "【 選擇看板 】",
    "",
    "請輸入看板名稱(按空白鍵自動搜尋)：test",
];

pub const EDITOR: &[&str] = &[
    "Hello from the editor",
    "",
    "",
    " 編輯文章 [Ctrl-Z]說明 [Ctrl-X]存檔 [Ctrl-Q]放棄 ║插入│1:1║",
];

pub const POSTING_GUIDE: &[&str] = &[
    "                    文 章 發 表 綱 領",
    "",
    "   1. 請勿張貼與本板主旨無關之文章",
    "   2. 請勿重複張貼相同內容",
    "",
    "                        請按任意鍵繼續",
];

pub const CATEGORY_SELECT: &[&str] = &[
    "發表文章於【 test 】看板",
    "",
    "類別: a)問題 b)情報 c)心得 d)討論 e)攻略 f)秘技 g)閒聊 h)其它 (Enter 跳過)",
];

pub const TITLE_INPUT: &[&str] = &[
    "發表文章於【 test 】看板",
    "類別：討論",
    "標題：Hello world",
];

pub const SIGNATURE_SELECT: &[&str] = &["", "選擇簽名檔 (1 ~ 9, 0=不加)[0]:"];

pub const SAVE_PROMPT: &[&str] = &[
    "檔案處理: [S]存檔 (L)站內 (A)放棄 (T)改標題 (E)繼續 (R/W/D)讀寫刪暫存檔？[S]",
];

pub const POST_SUCCESS: &[&str] = &[
    "",
    "順利貼出佈告，這是您的第 12 篇文章。",
    "",
    "                        請按任意鍵繼續",
];

pub const PRESS_ANY_KEY: &[&str] = &[
    "【系統公告】",
    "  本週六凌晨進行系統維護",
    "",
    "                        請按任意鍵繼續",
];

pub const BOARD_ENTER: &[&str] = &[
    "",
    "  本板用途僅供討論遊戲相關話題",
    "  請勿張貼廣告",
    "  違者水桶一個月",
    "  板主 alice 敬上",
    "",
    "                      請按任意鍵進入看板",
];

pub const LOGIN_BANNER: &[&str] = &[
    "",
    "          歡迎光臨 巴哈姆特電玩資訊站",
    "",
    "請輸入代號，或以 guest 參觀：",
];

pub fn screen(lines: &[&str]) -> ScreenSnapshot {
    ScreenSnapshot::new(lines)
}

/// Every fixture paired with the state it must classify as.
pub fn all_screens() -> Vec<(ScreenSnapshot, ScreenState)> {
    vec![
        (screen(MAIN_MENU), ScreenState::MainMenu),
        (screen(BOARD_LIST), ScreenState::BoardList),
        (screen(BOARD_SEARCH), ScreenState::BoardSearch),
        (screen(EDITOR), ScreenState::Editor),
        (screen(POSTING_GUIDE), ScreenState::PostingGuide),
        (screen(CATEGORY_SELECT), ScreenState::CategorySelect),
        (screen(TITLE_INPUT), ScreenState::TitleInput),
        (screen(SIGNATURE_SELECT), ScreenState::SignatureSelect),
        (screen(SAVE_PROMPT), ScreenState::SavePrompt),
        (screen(POST_SUCCESS), ScreenState::PostSuccess),
        (screen(PRESS_ANY_KEY), ScreenState::PressAnyKey),
        (screen(BOARD_ENTER), ScreenState::BoardEnter),
        (screen(LOGIN_BANNER), ScreenState::Unknown),
    ]
}
