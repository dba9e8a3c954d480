use anyhow::Context;
use hero_config::HeroConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HeroConfig> {
    load_dotenv()?;

    let mut config = HeroConfig::load().context("failed to load hero configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load .env"),
    }
}

/// Command-line flags win over every config layer.
fn apply_overrides(config: &mut HeroConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
        config.validate().context("invalid --base-url")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(base_url: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            memory: false,
            base_url: base_url.map(str::to_string),
        }
    }

    #[test]
    fn base_url_flag_overrides_config() {
        let mut config = HeroConfig::default();
        apply_overrides(&mut config, &flags(Some("http://10.0.0.5:8080/api/"))).unwrap();
        assert_eq!(config.api.base_url(), "http://10.0.0.5:8080/api");
    }

    #[test]
    fn no_flag_keeps_config() {
        let mut config = HeroConfig::default();
        apply_overrides(&mut config, &flags(None)).unwrap();
        assert_eq!(config.api.base_url(), "http://127.0.0.1:4280/api");
    }

    #[test]
    fn base_url_flag_is_validated() {
        let mut config = HeroConfig::default();
        let error = apply_overrides(&mut config, &flags(Some("localhost:4280"))).unwrap_err();
        assert!(format!("{error:#}").contains("invalid --base-url"));
    }
}
