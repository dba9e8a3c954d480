//! Local hero list state driven by CRUD calls.

use hero_core::entities::{Hero, HeroId, NewHero};
use tokio::task::JoinHandle;

use crate::service::HeroService;
use crate::store::HeroStore;

/// Ordered local copy of the store's hero list.
///
/// Creates are appended once the store returns the new hero. Deletes are
/// optimistic: the hero leaves the local list immediately and the request
/// runs in the background. A failed delete is not rolled back.
pub struct HeroRoster<S> {
    service: HeroService<S>,
    heroes: Vec<Hero>,
}

impl<S: HeroStore> HeroRoster<S> {
    #[must_use]
    pub fn new(service: HeroService<S>) -> Self {
        Self {
            service,
            heroes: Vec::new(),
        }
    }

    /// Start from an already known list.
    #[must_use]
    pub fn with_heroes(service: HeroService<S>, heroes: Vec<Hero>) -> Self {
        Self { service, heroes }
    }

    /// Replace the local list with the store's current list.
    pub async fn load(&mut self) -> &[Hero] {
        self.heroes = self.service.list().await;
        &self.heroes
    }

    #[must_use]
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    #[must_use]
    pub fn find(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.iter().find(|hero| hero.id == id)
    }

    /// Create a hero from user input and append it locally.
    ///
    /// Blank input is ignored without contacting the store.
    pub async fn add(&mut self, name: &str) -> Option<&Hero> {
        let new = NewHero::from_input(name)?;
        let hero = self.service.create(&new).await?;
        self.heroes.push(hero);
        self.heroes.last()
    }

    /// Save an edited hero; the local copy is replaced once acknowledged.
    pub async fn save(&mut self, hero: Hero) -> bool {
        if !self.service.update(&hero).await {
            return false;
        }
        if let Some(existing) = self.heroes.iter_mut().find(|h| h.id == hero.id) {
            *existing = hero;
        }
        true
    }

    /// Remove a hero locally and fire the delete request without waiting.
    ///
    /// The returned handle resolves to the store's acknowledgement. Must be
    /// called within a tokio runtime.
    pub fn delete(&mut self, id: HeroId) -> JoinHandle<bool> {
        self.heroes.retain(|hero| hero.id != id);
        let service = self.service.clone();
        tokio::spawn(async move { service.delete(id).await })
    }

    /// "Top heroes": up to `count` heroes after the first one.
    #[must_use]
    pub fn dashboard(&self, count: usize) -> &[Hero] {
        top_heroes(&self.heroes, count)
    }
}

/// Up to `count` heroes starting at the second one.
#[must_use]
pub fn top_heroes(heroes: &[Hero], count: usize) -> &[Hero] {
    let start = heroes.len().min(1);
    let end = heroes.len().min(start.saturating_add(count));
    &heroes[start..end]
}
