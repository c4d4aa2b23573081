//! What each subcommand does.

use std::io::Write;
use std::path::Path;

use bbs_bridge_core::ScreenSnapshot;
use bbs_bridge_core::ScreenSource;
use bbs_bridge_core::parse_context;
use bbs_bridge_core::summarize;
use bbs_bridge_daemon::BridgeConfig;
use bbs_bridge_daemon::BridgeToolHandler;
use bbs_bridge_daemon::McpServer;
use bbs_bridge_ipc::all_tools;
use bbs_bridge_terminal::Big5Decoder;
use bbs_bridge_terminal::VirtualTerminal;
use tokio::io::BufReader;
use tracing::info;
use tracing::warn;

use crate::error::AppError;

/// Report a `.env` that exists but could not be loaded. Having none is normal.
pub fn report_env_file<T>(loaded: &dotenvy::Result<T>) -> bool {
    match loaded {
        Err(e) if !e.not_found() => {
            warn!(error = %e, "Ignoring unreadable .env file");
            true
        }
        _ => false,
    }
}

/// Serve MCP on stdin/stdout until the client hangs up or Ctrl-C.
pub fn serve(config: BridgeConfig) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    info!(endpoint = %config.endpoint, "Starting bbs-bridge");
    runtime.block_on(async move {
        let server = McpServer::new(BridgeToolHandler::new(config));
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();

        let result = tokio::select! {
            result = server.serve(stdin, stdout) => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                Ok(())
            }
        };
        server.handler().shutdown().await;
        result.map_err(AppError::Stdio)
    })
}

pub fn print_tools(out: &mut impl Write) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(&all_tools())?;
    writeln!(out, "{}", json).map_err(AppError::Stdio)
}

pub fn inspect(
    path: &Path,
    raw: bool,
    summary: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let bytes = std::fs::read(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let screen = if raw {
        replay(&bytes)
    } else {
        ScreenSnapshot::from_text(&String::from_utf8_lossy(&bytes))
    };

    let rendered = if summary {
        summarize(&screen).to_string()
    } else {
        serde_json::to_string_pretty(&parse_context(&screen))?
    };
    writeln!(out, "{}", rendered).map_err(AppError::Stdio)
}

/// Draw captured wire bytes on a fresh screen.
fn replay(bytes: &[u8]) -> ScreenSnapshot {
    let terminal = VirtualTerminal::default();
    let mut decoder = Big5Decoder::new();
    terminal.process(&decoder.feed(bytes));
    terminal.snapshot()
}
