use std::time::Duration;

use anatomy_config::AnatomyConfig;

/// The slice of configuration the store reads at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub login_delay: Duration,
    pub demo_premium_email: String,
    pub demo_admin_email: String,
    pub trial_days: u32,
    pub paid_days: u32,
    pub home_route: String,
    pub login_route: String,
    pub admin_route: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&AnatomyConfig::default())
    }
}

impl From<&AnatomyConfig> for SessionSettings {
    fn from(config: &AnatomyConfig) -> Self {
        Self {
            login_delay: Duration::from_millis(config.session.login_delay_ms),
            demo_premium_email: config.session.demo_premium_email.clone(),
            demo_admin_email: config.session.demo_admin_email.clone(),
            trial_days: config.session.trial_days,
            paid_days: config.session.paid_days,
            home_route: config.routes.home.clone(),
            login_route: config.routes.login.clone(),
            admin_route: config.routes.admin.clone(),
        }
    }
}

impl SessionSettings {
    /// Same settings with no artificial login delay.
    #[must_use]
    pub fn without_delay(mut self) -> Self {
        self.login_delay = Duration::ZERO;
        self
    }
}
