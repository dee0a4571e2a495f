use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use anatomy_config::{AnatomyConfig, BackendKind};
use pretty_assertions::assert_eq;

#[test]
fn loads_session_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[session]
storage_key = "anatomy-test"
backend = "memory"
login_delay_ms = 0
trial_days = 7
"#,
        )?;

        let config: AnatomyConfig = Figment::from(Serialized::defaults(AnatomyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.session.storage_key, "anatomy-test");
        assert_eq!(config.session.backend, BackendKind::Memory);
        assert_eq!(config.session.login_delay_ms, 0);
        assert_eq!(config.session.trial_days, 7);
        assert_eq!(config.session.paid_days, 365);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".anatomy")?;
        jail.create_file(
            ".anatomy/config.toml",
            r#"
[routes]
home = "/explore"

[general]
maintenance_mode = true
"#,
        )?;

        let config = AnatomyConfig::load().expect("config loads");
        assert_eq!(config.routes.home, "/explore");
        assert_eq!(config.routes.login, "/login");
        assert!(config.general.maintenance_mode);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".anatomy")?;
        jail.create_file(
            ".anatomy/config.toml",
            r#"
[session]
paid_days = 0
"#,
        )?;

        let err = AnatomyConfig::load().unwrap_err();
        assert!(err.to_string().contains("session.paid_days"));
        Ok(())
    });
}

#[test]
fn unknown_backend_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".anatomy")?;
        jail.create_file(
            ".anatomy/config.toml",
            r#"
[session]
backend = "redis"
"#,
        )?;

        let err = AnatomyConfig::load().unwrap_err();
        assert!(matches!(err, anatomy_config::ConfigError::Figment(_)));
        Ok(())
    });
}
