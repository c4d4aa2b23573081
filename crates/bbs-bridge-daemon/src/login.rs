//! Scripted credential login.
//!
//! The remote's login flow is driven blind: fixed inputs separated by fixed
//! pauses. No screen is inspected between steps. If the remote hangs up part
//! way through, say after a rejected password, the remaining inputs are
//! dropped and the script still runs to the end.

use std::time::Duration;

use bbs_bridge_terminal::encode_big5;
use tracing::{debug, info};

use crate::config::Credentials;
use crate::error::SessionError;
use crate::session::Session;
use crate::sleeper::Sleeper;

const WELCOME_DELAY: Duration = Duration::from_millis(3500);
const FIELD_DELAY: Duration = Duration::from_millis(2000);
const DUPLICATE_LOGIN_DELAY: Duration = Duration::from_millis(1000);
const SKIP_PAGE_DELAY: Duration = Duration::from_millis(800);
const SKIP_PAGES: usize = 5;

/// Log in with `credentials`, returning the step log.
///
/// Credentials are checked before the connection so a misconfigured bridge
/// reports the configuration problem first.
pub async fn auto_login(
    session: &mut Session,
    credentials: Option<&Credentials>,
    sleeper: &dyn Sleeper,
) -> Result<Vec<&'static str>, SessionError> {
    let credentials = credentials.ok_or(SessionError::CredentialsMissing)?;
    session.ensure_connected()?;

    let mut steps = Vec::with_capacity(5);
    info!("Starting auto-login");

    sleeper.sleep(WELCOME_DELAY).await;
    steps.push("Waited for welcome screen");

    send_step(session, &encode_big5(&format!("{}\r", credentials.username))).await?;
    sleeper.sleep(FIELD_DELAY).await;
    steps.push("Sent username");

    send_step(session, &encode_big5(&format!("{}\r", credentials.password))).await?;
    sleeper.sleep(FIELD_DELAY).await;
    steps.push("Sent password");

    // Answers the "already logged in elsewhere" question; harmless otherwise.
    send_step(session, b"\r").await?;
    sleeper.sleep(DUPLICATE_LOGIN_DELAY).await;
    steps.push("Handled duplicate login prompt");

    for _ in 0..SKIP_PAGES {
        send_step(session, b" ").await?;
        sleeper.sleep(SKIP_PAGE_DELAY).await;
    }
    steps.push("Skipped post-login pages");

    info!(connected = session.is_connected(), "Auto-login script finished");
    Ok(steps)
}

async fn send_step(session: &mut Session, bytes: &[u8]) -> Result<(), SessionError> {
    if !session.is_connected() {
        debug!(len = bytes.len(), "Link closed; scripted input dropped");
        return Ok(());
    }
    session.send_bytes(bytes).await
}
