use std::sync::Arc;

use anatomy_config::AnatomyConfig;
use anatomy_session::backend::{self, SessionBackend};
use anatomy_session::navigation::RecordingNavigator;
use anatomy_session::{SessionSettings, SessionStore};
use anyhow::Context;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: AnatomyConfig,
    pub store: SessionStore<Box<dyn SessionBackend>>,
    /// Destinations the store asked for during this command.
    pub navigation: RecordingNavigator,
}

impl AppContext {
    /// Build the configured backend and restore the stored session.
    pub fn init(config: AnatomyConfig) -> anyhow::Result<Self> {
        let backend =
            backend::from_config(&config.session).context("failed to open session storage")?;
        tracing::debug!(backend = backend.kind(), "session backend ready");

        let navigation = RecordingNavigator::new();
        let mut store = SessionStore::new(backend, SessionSettings::from(&config))
            .with_navigator(Arc::new(navigation.clone()));
        store.initialize();

        Ok(Self {
            config,
            store,
            navigation,
        })
    }
}
