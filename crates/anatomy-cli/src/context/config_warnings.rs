use anatomy_config::AnatomyConfig;

/// Section names that figment maps from `ANATOMY_<SECTION>__<KEY>`.
const SECTIONS: [&str; 3] = ["SESSION", "ROUTES", "GENERAL"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &AnatomyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &AnatomyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    for section in SECTIONS {
        let single = format!("ANATOMY_{section}_");
        let double = format!("ANATOMY_{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{key} is ignored. Use double underscores (example: ANATOMY_{section}__<KEY>)."
            ));
        }
    }

    if config.general.maintenance_mode {
        warnings.push(format!(
            "maintenance mode is on; page routes are rewritten to {}",
            config.routes.maintenance
        ));
    }

    warnings
}
