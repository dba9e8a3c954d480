//! Hero access client with the log-and-fallback failure policy.

use std::sync::Arc;

use hero_core::entities::{Hero, HeroId, NewHero};

use crate::error::ClientError;
use crate::messages::MessageLog;
use crate::store::HeroStore;

/// Prefix of every message this service logs.
pub const MESSAGE_PREFIX: &str = "HeroService: ";

/// CRUD client over a [`HeroStore`].
///
/// No operation returns an error. A store failure is logged with the
/// operation name (to `tracing` and to the [`MessageLog`]) and replaced with
/// the operation's fallback: an empty list, `None`, or `false`.
pub struct HeroService<S> {
    store: Arc<S>,
    messages: Arc<MessageLog>,
}

impl<S> Clone for HeroService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            messages: Arc::clone(&self.messages),
        }
    }
}

impl<S: HeroStore> HeroService<S> {
    pub fn new(store: S, messages: Arc<MessageLog>) -> Self {
        Self {
            store: Arc::new(store),
            messages,
        }
    }

    #[must_use]
    pub const fn messages(&self) -> &Arc<MessageLog> {
        &self.messages
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch all heroes.
    pub async fn list(&self) -> Vec<Hero> {
        match self.store.list().await {
            Ok(heroes) => {
                self.log("fetched heroes");
                heroes
            }
            Err(error) => self.handle_error("getHeroes", &error, Vec::new()),
        }
    }

    /// Fetch a hero by id; `None` when missing or on failure.
    pub async fn get(&self, id: HeroId) -> Option<Hero> {
        match self.store.get(id).await {
            Ok(hero) => {
                self.log(&format!("fetched hero id={id}"));
                Some(hero)
            }
            Err(error) => self.handle_error(&format!("getHero id={id}"), &error, None),
        }
    }

    /// Fetch a hero by id through the list endpoint, so a missing hero is
    /// a normal empty answer instead of a 404.
    pub async fn get_no_404(&self, id: HeroId) -> Option<Hero> {
        match self.store.find(id).await {
            Ok(hero) => {
                let outcome = if hero.is_some() { "found" } else { "did not find" };
                self.log(&format!("{outcome} hero id={id}"));
                hero
            }
            Err(error) => self.handle_error(&format!("getHero id={id}"), &error, None),
        }
    }

    /// Create a hero; the store assigns its id.
    pub async fn create(&self, hero: &NewHero) -> Option<Hero> {
        match self.store.create(hero).await {
            Ok(created) => {
                self.log(&format!("added hero w/ id={}", created.id));
                Some(created)
            }
            Err(error) => self.handle_error("addHero", &error, None),
        }
    }

    /// Save a hero's name. Returns whether the store acknowledged it.
    pub async fn update(&self, hero: &Hero) -> bool {
        match self.store.update(hero).await {
            Ok(()) => {
                self.log(&format!("updated hero id={}", hero.id));
                true
            }
            Err(error) => self.handle_error("updateHero", &error, false),
        }
    }

    /// Delete a hero. Returns whether the store acknowledged it.
    pub async fn delete(&self, id: HeroId) -> bool {
        match self.store.delete(id).await {
            Ok(()) => {
                self.log(&format!("deleted hero id={id}"));
                true
            }
            Err(error) => self.handle_error("deleteHero", &error, false),
        }
    }

    /// Heroes whose name contains `term`.
    ///
    /// A blank term returns an empty list without contacting the store.
    pub async fn search(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        match self.store.search(term).await {
            Ok(heroes) => {
                if heroes.is_empty() {
                    self.log(&format!("no heroes matching \"{term}\""));
                } else {
                    self.log(&format!("found heroes matching \"{term}\""));
                }
                heroes
            }
            Err(error) => self.handle_error("searchHeroes", &error, Vec::new()),
        }
    }

    /// Log a failed operation and hand back `fallback` so the caller keeps
    /// going.
    pub fn handle_error<T>(&self, operation: &str, error: &ClientError, fallback: T) -> T {
        tracing::error!(operation, %error, "hero store operation failed");
        self.log(&format!("{operation} failed: {error}"));
        fallback
    }

    fn log(&self, message: &str) {
        self.messages.add(format!("{MESSAGE_PREFIX}{message}"));
    }
}
