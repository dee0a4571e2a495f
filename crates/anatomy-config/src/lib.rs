//! # anatomy-config
//!
//! Layered configuration loading for Anatomy Explorer using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ANATOMY_*` prefix, `__` as separator)
//! 2. The bare `MAINTENANCE_MODE` variable (maps to `general.maintenance_mode`)
//! 3. Project-level `.anatomy/config.toml`
//! 4. User-level `~/.config/anatomy-explorer/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ANATOMY_SESSION__LOGIN_DELAY_MS` -> `session.login_delay_ms`,
//! `ANATOMY_ROUTES__HOME` -> `routes.home`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use anatomy_config::AnatomyConfig;
//!
//! let config = AnatomyConfig::load_with_dotenv().expect("config");
//! println!("storage key: {}", config.session.storage_key);
//! ```

mod error;
mod general;
mod routes;
mod session;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use routes::RoutesConfig;
pub use session::{BackendKind, SessionConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Legacy switch read without the `ANATOMY_` prefix.
const MAINTENANCE_ENV: &str = "MAINTENANCE_MODE";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnatomyConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AnatomyConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer extra
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".anatomy/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: legacy maintenance switch, on only for the exact string "true"
        if let Ok(raw) = std::env::var(MAINTENANCE_ENV) {
            figment = figment.merge(Serialized::default(
                "general.maintenance_mode",
                legacy_maintenance_flag(&raw),
            ));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("ANATOMY_").split("__"))
    }

    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()?;
        self.routes.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("anatomy-explorer").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available), then falls back to
    /// the current directory. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

fn legacy_maintenance_flag(raw: &str) -> bool {
    raw == "true"
}
