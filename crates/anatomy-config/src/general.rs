//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Route every page request to the maintenance page.
    ///
    /// Also settable through the bare `MAINTENANCE_MODE` environment variable.
    #[serde(default)]
    pub maintenance_mode: bool,
}
