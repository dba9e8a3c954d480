//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use hero_config::{ConfigError, HeroConfig, LOCAL_CONFIG_PATH};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://heroes.example.com/api"
timeout_secs = 3

[search]
debounce_ms = 150
query_timeout_ms = 0

[server]
addr = "0.0.0.0:9000"
latency_ms = 250

[general]
dashboard_size = 6
"#,
        )?;

        let config: HeroConfig = Figment::from(Serialized::defaults(HeroConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url(), "https://heroes.example.com/api");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.query_timeout(), None);
        assert_eq!(config.server.addr, "0.0.0.0:9000");
        assert_eq!(config.server.latency_ms, 250);
        assert_eq!(config.general.dashboard_size, 6);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[search]\ndebounce_ms = 500\n")?;

        let config: HeroConfig = Figment::from(Serialized::defaults(HeroConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.search.debounce_ms, 500);
        assert_eq!(config.search.query_timeout_ms, 5_000);
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".heroes")?;
        jail.create_file(LOCAL_CONFIG_PATH, "[general]\ndashboard_size = 2\n")?;

        let config = HeroConfig::load().expect("config loads");
        assert_eq!(config.general.dashboard_size, 2);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\nbase_url = \"heroes.local\"\n")?;

        let figment = Figment::from(Serialized::defaults(HeroConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HEROES_").split("__"));
        let result = HeroConfig::from_figment(&figment);

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
