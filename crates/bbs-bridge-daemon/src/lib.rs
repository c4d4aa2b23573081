#![deny(clippy::all)]

mod config;
mod error;
mod handlers;
mod login;
mod server;
mod session;
mod sleeper;
pub mod transport;
mod wait;

#[cfg(test)]
pub mod test_support;

pub use config::BridgeConfig;
pub use config::Credentials;
pub use error::SessionError;
pub use error::TransportError;
pub use handlers::BridgeToolHandler;
pub use login::auto_login;
pub use server::McpServer;
pub use server::PROTOCOL_VERSION;
pub use server::SERVER_NAME;
pub use server::ToolHandler;
pub use session::ConnectOutcome;
pub use session::DisconnectOutcome;
pub use session::LinkState;
pub use session::Session;
pub use sleeper::MockSleeper;
pub use sleeper::RealSleeper;
pub use sleeper::Sleeper;
pub use wait::QuiescenceTracker;
pub use wait::WaitOutcome;
pub use wait::WaitSettings;
pub use wait::await_stable_screen;
pub use wait::await_stable_screen_since;

pub type Result<T> = std::result::Result<T, SessionError>;
