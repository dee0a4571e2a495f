//! # anatomy-session
//!
//! Client-side session store for Anatomy Explorer.
//!
//! [`SessionStore`] owns the signed-in [`Identity`](anatomy_core::entities::Identity),
//! mirrors it to a [`SessionBackend`] (file, OS keychain, or memory), and
//! answers subscription questions (`is_subscribed`, `is_trial_active`,
//! `trial_days_remaining`) against an injectable [`Clock`]. Sign-in follows the
//! demo rules in [`accounts`]; navigation is reported to a [`Navigator`].
//!
//! ```no_run
//! use anatomy_config::AnatomyConfig;
//! use anatomy_session::{SessionSettings, SessionStore, backend};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AnatomyConfig::load()?;
//! let mut store = SessionStore::new(
//!     backend::from_config(&config.session)?,
//!     SessionSettings::from(&config),
//! );
//! store.initialize();
//! store.login("premium@example.com", "anything").await;
//! assert!(store.is_subscribed());
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod backend;
pub mod clock;
pub mod error;
pub mod navigation;
pub mod settings;
pub mod store;

pub use accounts::{AccountTier, DemoAccount};
pub use backend::{PersistedSession, SessionBackend, SessionState};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::SessionError;
pub use navigation::{Navigator, RouteDecision};
pub use settings::SessionSettings;
pub use store::{SessionStore, SessionView};
