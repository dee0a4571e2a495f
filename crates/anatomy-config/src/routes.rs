//! Navigation targets emitted by the session store.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_home() -> String {
    "/".into()
}

fn default_login() -> String {
    "/login".into()
}

fn default_admin() -> String {
    "/admin".into()
}

fn default_maintenance() -> String {
    "/maintenance".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoutesConfig {
    /// Where a successful login lands.
    #[serde(default = "default_home")]
    pub home: String,

    /// Where logout sends the user.
    #[serde(default = "default_login")]
    pub login: String,

    /// Landing page for the demo admin login.
    #[serde(default = "default_admin")]
    pub admin: String,

    /// Page served for every route while maintenance mode is on.
    #[serde(default = "default_maintenance")]
    pub maintenance: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            login: default_login(),
            admin: default_admin(),
            maintenance: default_maintenance(),
        }
    }
}

impl RoutesConfig {
    /// Every route must be an absolute path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("routes.home", &self.home),
            ("routes.login", &self.login),
            ("routes.admin", &self.admin),
            ("routes.maintenance", &self.maintenance),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::invalid(field, "must start with '/'"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let routes = RoutesConfig::default();
        assert_eq!(routes.home, "/");
        assert_eq!(routes.login, "/login");
        assert_eq!(routes.admin, "/admin");
        assert_eq!(routes.maintenance, "/maintenance");
        assert!(routes.validate().is_ok());
    }

    #[test]
    fn relative_route_is_rejected() {
        let routes = RoutesConfig {
            login: "login".into(),
            ..Default::default()
        };
        let err = routes.validate().unwrap_err();
        assert!(err.to_string().contains("routes.login"));
    }
}
