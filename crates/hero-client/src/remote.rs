//! REST data store client.

use std::time::Duration;

use hero_config::ApiConfig;
use hero_core::entities::{Hero, HeroId, NewHero};

use crate::error::ClientError;
use crate::http::check_response;
use crate::store::HeroStore;

/// [`HeroStore`] backed by the `/heroes` REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpHeroStore {
    http: reqwest::Client,
    heroes_url: String,
}

impl HttpHeroStore {
    /// Build a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tour-of-heroes/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            heroes_url: format!("{}/heroes", config.base_url()),
        })
    }

    /// Build a client for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    #[must_use]
    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    fn hero_url(&self, id: HeroId) -> String {
        format!("{}/{id}", self.heroes_url)
    }

    async fn fetch_list(&self, url: &str) -> Result<Vec<Hero>, ClientError> {
        let resp = check_response(self.http.get(url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

impl HeroStore for HttpHeroStore {
    async fn list(&self) -> Result<Vec<Hero>, ClientError> {
        self.fetch_list(&self.heroes_url).await
    }

    async fn get(&self, id: HeroId) -> Result<Hero, ClientError> {
        let resp = check_response(self.http.get(self.hero_url(id)).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn find(&self, id: HeroId) -> Result<Option<Hero>, ClientError> {
        let url = format!("{}/?id={id}", self.heroes_url);
        Ok(self.fetch_list(&url).await?.into_iter().next())
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero, ClientError> {
        let resp =
            check_response(self.http.post(&self.heroes_url).json(hero).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn update(&self, hero: &Hero) -> Result<(), ClientError> {
        check_response(self.http.put(&self.heroes_url).json(hero).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, id: HeroId) -> Result<(), ClientError> {
        check_response(self.http.delete(self.hero_url(id)).send().await?).await?;
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<Vec<Hero>, ClientError> {
        let url = format!("{}/?name={}", self.heroes_url, urlencoding::encode(term));
        self.fetch_list(&url).await
    }
}
