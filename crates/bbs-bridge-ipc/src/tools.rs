//! MCP tool surface: definitions, call arguments and results.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolDefinition {
    fn new(name: &str, description: &str, input_schema: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// A failed call, rendered as `Error: <message>`.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: format!("Error: {}", message),
            }],
            is_error: true,
        }
    }

    /// Concatenated text of every content item.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .map(|ToolContent::Text { text }| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// How a command reports the screen it leaves behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnMode {
    #[default]
    Summary,
    Full,
}

impl ReturnMode {
    /// Absent or empty selects the summary; any other value but `summary`
    /// selects the full screen.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("summary") => ReturnMode::Summary,
            Some(_) => ReturnMode::Full,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnMode::Summary => "summary",
            ReturnMode::Full => "full",
        }
    }
}

/// `params` of a `tools/call` request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

impl ToolCall {
    pub fn from_params(params: Option<Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(params.unwrap_or(Value::Null))
    }

    /// String argument; non-string values count as absent.
    pub fn arg_str(&self, key: &str) -> Option<&str> {
        self.arguments
            .as_ref()
            .and_then(|args| args.get(key))
            .and_then(|v| v.as_str())
    }

    pub fn return_mode(&self) -> ReturnMode {
        ReturnMode::parse(self.arg_str("return_mode"))
    }
}

fn return_mode_schema() -> Value {
    json!({
        "type": "string",
        "enum": ["full", "summary"],
        "description": "Response format: 'summary' returns state + key lines (default, far fewer tokens), 'full' returns the complete screen",
        "default": "summary"
    })
}

fn no_arguments() -> Value {
    json!({ "type": "object", "properties": {} })
}

pub fn all_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "bbs_connect",
            "Connect to Bahamut BBS via WebSocket",
            no_arguments(),
        ),
        ToolDefinition::new(
            "bbs_auto_login",
            "Automatically login to BBS using credentials from the environment or .env file (BBS_USERNAME and BBS_PASSWORD)",
            json!({
                "type": "object",
                "properties": { "return_mode": return_mode_schema() }
            }),
        ),
        ToolDefinition::new(
            "bbs_send",
            "Send a command or text to the BBS",
            json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text or command to send to BBS"
                    },
                    "return_mode": return_mode_schema()
                },
                "required": ["text"]
            }),
        ),
        ToolDefinition::new(
            "bbs_send_key",
            "Send a special key to the BBS (arrow keys, Page Up/Down, Home/End, Enter, etc.)",
            json!({
                "type": "object",
                "properties": {
                    "key": {
                        "type": "string",
                        "enum": [
                            "up", "down", "left", "right",
                            "pgup", "pgdn", "pageup", "pagedown",
                            "home", "end",
                            "enter", "esc", "space",
                            "backspace", "delete", "insert"
                        ],
                        "description": "Special key to send"
                    },
                    "return_mode": return_mode_schema()
                },
                "required": ["key"]
            }),
        ),
        ToolDefinition::new(
            "bbs_send_ctrl",
            "Send a control key combination (Ctrl+letter) to BBS for commands like ^P (post), ^W (file operations), etc.",
            json!({
                "type": "object",
                "properties": {
                    "letter": {
                        "type": "string",
                        "pattern": "^[a-zA-Z]$",
                        "description": "Letter to combine with Ctrl (a-z or A-Z)"
                    },
                    "return_mode": return_mode_schema()
                },
                "required": ["letter"]
            }),
        ),
        ToolDefinition::new(
            "bbs_get_screen",
            "Get the current screen content from BBS",
            json!({
                "type": "object",
                "properties": { "return_mode": return_mode_schema() }
            }),
        ),
        ToolDefinition::new(
            "bbs_get_context",
            "Get structured context data from BBS (state, articles, menus, etc.). Returns JSON with parsed information and uses far fewer tokens than bbs_get_screen; prefer it for navigation and queries.",
            no_arguments(),
        ),
        ToolDefinition::new("bbs_disconnect", "Disconnect from BBS", no_arguments()),
    ]
}

pub fn find_tool(name: &str) -> Option<ToolDefinition> {
    all_tools().into_iter().find(|t| t.name == name)
}
