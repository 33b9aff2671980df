//! Purpose: Explicit configuration values for loading and writing documents.
//! Exports: `LoadOptions`, `WriteStyle`, env var names.
//! Role: Replaces process-wide JSON settings with values passed by the caller.
//! Invariants: Defaults are usable without touching the environment.
//! Invariants: Invalid env overrides are ignored (with a warning), never fatal.

use std::time::Duration;

pub const TIMEOUT_ENV: &str = "JSONTREE_HTTP_TIMEOUT_MS";
pub const USER_AGENT_ENV: &str = "JSONTREE_USER_AGENT";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WriteStyle {
    Compact,
    #[default]
    Pretty,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoadOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => options.timeout = Duration::from_millis(ms),
                _ => tracing::warn!(var = TIMEOUT_ENV, value = %raw, "ignoring invalid timeout"),
            }
        }
        if let Some(agent) = lookup(USER_AGENT_ENV) {
            let agent = agent.trim();
            if !agent.is_empty() {
                options.user_agent = agent.to_string();
            }
        }
        options
    }
}

fn default_user_agent() -> String {
    format!("jsontree/{}", env!("CARGO_PKG_VERSION"))
}
