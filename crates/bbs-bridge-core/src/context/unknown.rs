use serde::Serialize;

use super::ScreenPreview;
use crate::screen::ScreenSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownContext {
    pub hint: &'static str,
    pub screen_preview: ScreenPreview,
    pub suggestion: &'static str,
}

pub(super) fn extract(snapshot: &ScreenSnapshot) -> UnknownContext {
    UnknownContext {
        hint: "無法自動解析此畫面",
        screen_preview: ScreenPreview::of(snapshot),
        suggestion: "使用 return_mode='full' 查看完整螢幕",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ParsedContext, parse_context};
    use crate::state::ScreenState;
    use crate::test_fixtures::{self, screen};

    #[test]
    fn test_unrecognized_screen_yields_preview_only() {
        let snapshot = screen(test_fixtures::LOGIN_BANNER);
        let ParsedContext::Unknown(ctx) = parse_context(&snapshot) else {
            panic!("expected unknown context");
        };
        assert_eq!(
            ctx.screen_preview.top_lines,
            vec![
                "          歡迎光臨 巴哈姆特電玩資訊站",
                "請輸入代號，或以 guest 參觀：",
            ]
        );
        assert_eq!(ctx.screen_preview.bottom_lines, ctx.screen_preview.top_lines);
        assert!(ctx.suggestion.contains("return_mode='full'"));
    }

    #[test]
    fn test_empty_screen_is_unknown() {
        let context = parse_context(&ScreenSnapshot::default());
        assert_eq!(context.state(), ScreenState::Unknown);

        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["state"], "unknown");
        assert_eq!(json["screen_preview"]["top_lines"], serde_json::json!([]));
    }
}
