use figment::Jail;
use anatomy_config::{AnatomyConfig, BackendKind};

#[test]
fn prefixed_env_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("ANATOMY_SESSION__LOGIN_DELAY_MS", "0");
        jail.set_env("ANATOMY_SESSION__BACKEND", "keyring");
        jail.set_env("ANATOMY_ROUTES__ADMIN", "/dashboard");

        let config = AnatomyConfig::load().expect("config loads");
        assert_eq!(config.session.login_delay_ms, 0);
        assert_eq!(config.session.backend, BackendKind::Keyring);
        assert_eq!(config.routes.admin, "/dashboard");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".anatomy")?;
        jail.create_file(
            ".anatomy/config.toml",
            r#"
[session]
demo_premium_email = "file@example.com"
"#,
        )?;
        jail.set_env("ANATOMY_SESSION__DEMO_PREMIUM_EMAIL", "env@example.com");

        let config = AnatomyConfig::load().expect("config loads");
        assert_eq!(config.session.demo_premium_email, "env@example.com");
        Ok(())
    });
}

#[test]
fn bare_maintenance_mode_variable_is_honoured() {
    Jail::expect_with(|jail| {
        jail.set_env("MAINTENANCE_MODE", "true");

        let config = AnatomyConfig::load().expect("config loads");
        assert!(config.general.maintenance_mode);
        Ok(())
    });
}

#[test]
fn prefixed_maintenance_variable_beats_bare_one() {
    Jail::expect_with(|jail| {
        jail.set_env("MAINTENANCE_MODE", "true");
        jail.set_env("ANATOMY_GENERAL__MAINTENANCE_MODE", "false");

        let config = AnatomyConfig::load().expect("config loads");
        assert!(!config.general.maintenance_mode);
        Ok(())
    });
}

#[test]
fn bare_maintenance_mode_other_than_true_is_off() {
    for raw in ["1", "yes", "TRUE"] {
        Jail::expect_with(|jail| {
            jail.set_env("MAINTENANCE_MODE", raw);

            let config = AnatomyConfig::load().expect("config loads");
            assert!(!config.general.maintenance_mode, "{raw:?} should be off");
            Ok(())
        });
    }
}
