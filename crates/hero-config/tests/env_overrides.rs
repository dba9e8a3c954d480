use figment::Jail;
use hero_config::HeroConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("HEROES_API__BASE_URL", "http://10.0.0.5:8080/api");
        jail.set_env("HEROES_SEARCH__DEBOUNCE_MS", "120");

        let config = HeroConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "http://10.0.0.5:8080/api");
        assert_eq!(config.search.debounce_ms, 120);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".heroes")?;
        jail.create_file(".heroes/config.toml", "[server]\nlatency_ms = 100\n")?;
        jail.set_env("HEROES_SERVER__LATENCY_MS", "900");

        let config = HeroConfig::load().expect("config loads");
        assert_eq!(config.server.latency_ms, 900);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_an_error() {
    Jail::expect_with(|jail| {
        jail.set_env("HEROES_SEARCH__DEBOUNCE_MS", "0");
        assert!(HeroConfig::load().is_err());
        Ok(())
    });
}
