//! Runtime configuration: fetch timeout, User-Agent and batch pacing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Browser-like User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Pause between consecutive batch items in milliseconds.
pub const DEFAULT_PACING_MS: u64 = 1000;

/// Redirect hops followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub pacing_ms: u64,
    pub max_redirects: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pacing_ms: DEFAULT_PACING_MS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl Config {
    /// Defaults overridden by `MSCOUT_*` environment variables.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            timeout_secs: lookup("MSCOUT_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(default.timeout_secs),
            user_agent: lookup("MSCOUT_USER_AGENT")
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(default.user_agent),
            pacing_ms: lookup("MSCOUT_PACING_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default.pacing_ms),
            max_redirects: default.max_redirects,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_pacing_ms(mut self, ms: u64) -> Self {
        self.pacing_ms = ms;
        self
    }
}
