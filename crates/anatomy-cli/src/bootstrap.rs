use anatomy_config::AnatomyConfig;
use anyhow::Context;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<AnatomyConfig> {
    AnatomyConfig::load_with_dotenv().context("failed to load anatomy configuration")
}
