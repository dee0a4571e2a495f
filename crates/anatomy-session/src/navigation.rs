//! Navigation side effects and the maintenance gate.
//!
//! The store never routes by itself; it tells a [`Navigator`] where the
//! presentation layer should go next.

use std::sync::{Arc, Mutex, PoisonError};

/// Prefix of framework asset paths that bypass the maintenance gate.
const ASSET_PREFIX: &str = "/_next";
/// Any path containing this segment is an API call and bypasses the gate.
const API_SEGMENT: &str = "/api/";

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Logs the destination. Used by the CLI, which has no router.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigate");
    }
}

/// Remembers every destination in order. Clones share the history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

/// Outcome of running a request path through the maintenance gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Pass,
    Rewrite(String),
}

/// Decide whether `path` is served or rewritten to the maintenance page.
#[must_use]
pub fn gate(path: &str, maintenance_mode: bool, maintenance_path: &str) -> RouteDecision {
    if !maintenance_mode
        || path.starts_with(ASSET_PREFIX)
        || path.contains(API_SEGMENT)
        || path.starts_with(maintenance_path)
    {
        return RouteDecision::Pass;
    }
    RouteDecision::Rewrite(maintenance_path.to_string())
}
