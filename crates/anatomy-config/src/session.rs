//! Session store configuration: persistence, login timing, demo accounts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where the session snapshot is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// JSON file under `state_dir`.
    #[default]
    File,
    /// OS keychain, falling back to the file backend when unavailable.
    Keyring,
    /// In-process only; nothing survives a restart.
    Memory,
}

fn default_storage_key() -> String {
    "anatomy-explorer-auth".into()
}

const fn default_login_delay_ms() -> u64 {
    500
}

fn default_demo_premium_email() -> String {
    "user@user.com".into()
}

fn default_demo_admin_email() -> String {
    "admin@admin.com".into()
}

const fn default_trial_days() -> u32 {
    14
}

const fn default_paid_days() -> u32 {
    365
}

const STATE_DIR_NAME: &str = ".anatomy-explorer";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Namespace key the snapshot is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default)]
    pub backend: BackendKind,

    /// Directory for the file backend. Defaults to `~/.anatomy-explorer`.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Artificial delay inside `login`, standing in for a network round trip.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Address that always logs in as a premium user.
    #[serde(default = "default_demo_premium_email")]
    pub demo_premium_email: String,

    /// Address used by the one-click admin login.
    #[serde(default = "default_demo_admin_email")]
    pub demo_admin_email: String,

    /// Length of the trial granted to ordinary sign-ins.
    #[serde(default = "default_trial_days")]
    pub trial_days: u32,

    /// Length of the paid grant for premium and admin sign-ins.
    #[serde(default = "default_paid_days")]
    pub paid_days: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            backend: BackendKind::default(),
            state_dir: None,
            login_delay_ms: default_login_delay_ms(),
            demo_premium_email: default_demo_premium_email(),
            demo_admin_email: default_demo_admin_email(),
            trial_days: default_trial_days(),
            paid_days: default_paid_days(),
        }
    }
}

impl SessionConfig {
    /// Resolved state directory: the configured one, else `~/.anatomy-explorer`.
    #[must_use]
    pub fn resolved_state_dir(&self) -> Option<PathBuf> {
        self.state_dir
            .clone()
            .or_else(|| dirs::home_dir().map(|h| h.join(STATE_DIR_NAME)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::invalid("session.storage_key", "must not be empty"));
        }
        if self
            .storage_key
            .chars()
            .any(|c| matches!(c, '/' | '\\') || c.is_whitespace())
        {
            return Err(ConfigError::invalid(
                "session.storage_key",
                "must not contain path separators or whitespace",
            ));
        }
        if self.trial_days == 0 {
            return Err(ConfigError::invalid("session.trial_days", "must be at least 1"));
        }
        if self.paid_days == 0 {
            return Err(ConfigError::invalid("session.paid_days", "must be at least 1"));
        }
        Ok(())
    }
}
