use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"bbs-bridge lets AI agents drive the Bahamut BBS (巴哈姆特) terminal.

It speaks the Model Context Protocol over stdio: each line on stdin is a
JSON-RPC request, each line on stdout a response. Logs go to stderr, or to
the file named by BBS_BRIDGE_LOG.

TOOLS:
    bbs_connect, bbs_auto_login, bbs_send, bbs_send_key, bbs_send_ctrl,
    bbs_get_screen, bbs_get_context, bbs_disconnect

CONFIGURATION:
    Read from the environment and from a .env file in the working directory.
    BBS_USERNAME / BBS_PASSWORD      credentials for bbs_auto_login
    BBS_ENDPOINT / BBS_ORIGIN        WebSocket endpoint and Origin header
    BBS_CONNECT_TIMEOUT              seconds to wait for the handshake
    BBS_TEXT_DEADLINE_MS             screen wait after bbs_send
    BBS_KEY_DEADLINE_MS              screen wait after keys and Ctrl combos
    BBS_POLL_INTERVAL_MS             screen poll interval
    BBS_STABLE_POLLS                 identical polls that count as settled
    RUST_LOG                         log filter (default: warn)

EXAMPLES:
    # Register with an MCP client
    bbs-bridge serve

    # Check how a saved screen is classified
    bbs-bridge inspect board.txt
    bbs-bridge inspect --raw capture.bin --summary"#;

#[derive(Parser)]
#[command(name = "bbs-bridge")]
#[command(author, version)]
#[command(about = "MCP server bridging AI agents to the Bahamut BBS terminal")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// WebSocket endpoint of the terminal service
    #[arg(long, global = true, env = "BBS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Origin header presented during the WebSocket handshake
    #[arg(long, global = true, env = "BBS_ORIGIN")]
    pub origin: Option<String>,
}

impl Cli {
    /// The subcommand to run; serving is the default.
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio (default)
    Serve,

    /// Print the tool definitions as JSON
    Tools,

    /// Classify a saved screen and print its parsed context
    #[command(long_about = r#"Classify a saved screen and print its parsed context.

The file is read as UTF-8 text, one screen row per line. With --raw it is
treated as bytes captured from the wire instead: Big5 text with terminal
escape sequences, replayed on an 80x24 screen before parsing.

EXAMPLES:
    bbs-bridge inspect board.txt
    bbs-bridge inspect board.txt --summary
    bbs-bridge inspect --raw capture.bin"#)]
    Inspect {
        /// Screen dump to read
        file: PathBuf,

        /// Print the one-glance summary instead of the JSON context
        #[arg(long)]
        summary: bool,

        /// The file holds raw Big5 terminal output
        #[arg(long)]
        raw: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
