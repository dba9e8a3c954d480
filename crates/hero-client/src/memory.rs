//! In-process data store over a shared [`HeroTable`].

use std::time::Duration;

use hero_core::entities::{Hero, HeroId, NewHero};
use hero_core::table::{HeroTable, SharedHeroTable};

use crate::error::ClientError;
use crate::store::HeroStore;

/// [`HeroStore`] that reads and writes a [`HeroTable`] directly.
///
/// Used for offline mode and tests. An optional latency is awaited before
/// every operation to mimic a remote round trip.
#[derive(Debug, Clone)]
pub struct MemoryHeroStore {
    table: SharedHeroTable,
    latency: Duration,
}

impl MemoryHeroStore {
    #[must_use]
    pub const fn new(table: SharedHeroTable) -> Self {
        Self {
            table,
            latency: Duration::ZERO,
        }
    }

    /// Store seeded with the tutorial heroes.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(HeroTable::seeded().into_shared())
    }

    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn table(&self) -> SharedHeroTable {
        SharedHeroTable::clone(&self.table)
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn with_table<T>(&self, f: impl FnOnce(&mut HeroTable) -> T) -> Result<T, ClientError> {
        let mut table = self
            .table
            .lock()
            .map_err(|_| ClientError::Store("hero table lock poisoned".into()))?;
        Ok(f(&mut table))
    }
}

impl HeroStore for MemoryHeroStore {
    async fn list(&self) -> Result<Vec<Hero>, ClientError> {
        self.delay().await;
        self.with_table(|table| table.list())
    }

    async fn get(&self, id: HeroId) -> Result<Hero, ClientError> {
        self.delay().await;
        self.with_table(|table| table.get(id))?
            .ok_or_else(|| ClientError::NotFound(format!("hero id={id}")))
    }

    async fn find(&self, id: HeroId) -> Result<Option<Hero>, ClientError> {
        self.delay().await;
        self.with_table(|table| table.get(id))
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero, ClientError> {
        self.delay().await;
        self.with_table(|table| table.insert(hero.clone()))?
            .map_err(ClientError::from)
    }

    async fn update(&self, hero: &Hero) -> Result<(), ClientError> {
        self.delay().await;
        self.with_table(|table| table.upsert(hero.clone()))??;
        Ok(())
    }

    async fn delete(&self, id: HeroId) -> Result<(), ClientError> {
        self.delay().await;
        self.with_table(|table| table.remove(id))?;
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<Vec<Hero>, ClientError> {
        self.delay().await;
        self.with_table(|table| table.search(term))
    }
}
