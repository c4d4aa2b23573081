use std::env;
use std::fmt;
use std::time::Duration;

use crate::wait::WaitSettings;

pub const DEFAULT_ENDPOINT: &str = "wss://term.gamer.com.tw/bbs";
pub const DEFAULT_ORIGIN: &str = "https://term.gamer.com.tw";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_POLL_INTERVAL_MS: u64 = 50;
const DEFAULT_TEXT_DEADLINE_MS: u64 = 1000;
const DEFAULT_KEY_DEADLINE_MS: u64 = 800;
const DEFAULT_STABLE_POLLS: u32 = 2;

/// Login name and password for the scripted login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Both parts must be non-empty.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Option<Self> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self { username, password })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub endpoint: String,
    pub origin: String,
    pub credentials: Option<Credentials>,
    pub connect_timeout: Duration,
    pub text_deadline: Duration,
    pub key_deadline: Duration,
    pub wait: WaitSettings,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl BridgeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unparseable values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str, default: u64| -> u64 {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        let credentials = match (lookup("BBS_USERNAME"), lookup("BBS_PASSWORD")) {
            (Some(username), Some(password)) => Credentials::new(username, password),
            _ => None,
        };

        Self {
            endpoint: lookup("BBS_ENDPOINT")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            origin: lookup("BBS_ORIGIN")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
            credentials,
            connect_timeout: Duration::from_secs(number(
                "BBS_CONNECT_TIMEOUT",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
            text_deadline: Duration::from_millis(number(
                "BBS_TEXT_DEADLINE_MS",
                DEFAULT_TEXT_DEADLINE_MS,
            )),
            key_deadline: Duration::from_millis(number(
                "BBS_KEY_DEADLINE_MS",
                DEFAULT_KEY_DEADLINE_MS,
            )),
            wait: WaitSettings {
                poll_interval: Duration::from_millis(
                    number("BBS_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS).max(1),
                ),
                stable_polls: u32::try_from(number(
                    "BBS_STABLE_POLLS",
                    DEFAULT_STABLE_POLLS as u64,
                ))
                .unwrap_or(DEFAULT_STABLE_POLLS)
                .max(1),
            },
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_deadlines(mut self, text: Duration, key: Duration) -> Self {
        self.text_deadline = text;
        self.key_deadline = key;
        self
    }

    pub fn with_wait(mut self, wait: WaitSettings) -> Self {
        self.wait = wait;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> BridgeConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BridgeConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.origin, DEFAULT_ORIGIN);
        assert_eq!(config.credentials, None);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.text_deadline, Duration::from_millis(1000));
        assert_eq!(config.key_deadline, Duration::from_millis(800));
        assert_eq!(config.wait.poll_interval, Duration::from_millis(50));
        assert_eq!(config.wait.stable_polls, 2);
    }

    #[test]
    fn test_values_read_from_lookup() {
        let config = config_from(&[
            ("BBS_ENDPOINT", "ws://localhost:9000"),
            ("BBS_USERNAME", "guest"),
            ("BBS_PASSWORD", "secret"),
            ("BBS_TEXT_DEADLINE_MS", "1500"),
            ("BBS_STABLE_POLLS", "3"),
        ]);
        assert_eq!(config.endpoint, "ws://localhost:9000");
        assert_eq!(config.origin, DEFAULT_ORIGIN);
        assert_eq!(config.credentials.unwrap().username, "guest");
        assert_eq!(config.text_deadline, Duration::from_millis(1500));
        assert_eq!(config.wait.stable_polls, 3);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = config_from(&[
            ("BBS_CONNECT_TIMEOUT", "soon"),
            ("BBS_POLL_INTERVAL_MS", "-5"),
            ("BBS_STABLE_POLLS", "0"),
        ]);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.wait.poll_interval, Duration::from_millis(50));
        assert_eq!(config.wait.stable_polls, 1);
    }

    #[test]
    fn test_partial_credentials_ignored() {
        assert_eq!(config_from(&[("BBS_USERNAME", "guest")]).credentials, None);
        assert_eq!(
            config_from(&[("BBS_USERNAME", "guest"), ("BBS_PASSWORD", "")]).credentials,
            None
        );
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("guest", "hunter2").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("guest"));
        assert!(!debug.contains("hunter2"));

        let config = BridgeConfig::default().with_credentials(Some(creds));
        assert!(!format!("{:?}", config).contains("hunter2"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = BridgeConfig::default()
            .with_endpoint("ws://127.0.0.1:1")
            .with_origin("http://localhost")
            .with_connect_timeout(Duration::from_secs(5))
            .with_deadlines(Duration::from_millis(300), Duration::from_millis(200));

        assert_eq!(config.endpoint, "ws://127.0.0.1:1");
        assert_eq!(config.origin, "http://localhost");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.text_deadline, Duration::from_millis(300));
        assert_eq!(config.key_deadline, Duration::from_millis(200));
    }
}
