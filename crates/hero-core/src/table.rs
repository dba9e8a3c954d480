//! In-memory hero table.
//!
//! Holds the data store semantics shared by the offline client store and the
//! mock HTTP server: id generation, case-insensitive substring search, and
//! upsert on update.

use std::sync::{Arc, Mutex};

use crate::entities::{Hero, HeroId, NewHero};
use crate::errors::CoreError;

/// Id handed out when the table is empty.
pub const FIRST_ID: HeroId = 11;

/// A table shared between the request handlers of one data store.
pub type SharedHeroTable = Arc<Mutex<HeroTable>>;

/// Outcome of [`HeroTable::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Replaced,
    Inserted,
}

/// Ordered collection of heroes, unique by id.
#[derive(Debug, Clone, Default)]
pub struct HeroTable {
    heroes: Vec<Hero>,
}

impl HeroTable {
    /// Empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { heroes: Vec::new() }
    }

    /// Table pre-loaded with the nine tutorial heroes (ids 12 through 20).
    #[must_use]
    pub fn seeded() -> Self {
        let names = [
            "Dr. Nice",
            "Bombasto",
            "Celeritas",
            "Magneta",
            "RubberMan",
            "Dynama",
            "Dr. IQ",
            "Magma",
            "Tornado",
        ];
        let heroes = (12..).zip(names).map(|(id, name)| Hero::new(id, name)).collect();
        Self { heroes }
    }

    /// Build a table from existing heroes. Later duplicates of an id win.
    #[must_use]
    pub fn with_heroes(heroes: impl IntoIterator<Item = Hero>) -> Self {
        let mut table = Self::new();
        for hero in heroes {
            table.put(hero);
        }
        table
    }

    /// Wrap the table for sharing across threads.
    #[must_use]
    pub fn into_shared(self) -> SharedHeroTable {
        Arc::new(Mutex::new(self))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    #[must_use]
    pub fn list(&self) -> Vec<Hero> {
        self.heroes.clone()
    }

    #[must_use]
    pub fn get(&self, id: HeroId) -> Option<Hero> {
        self.heroes.iter().find(|hero| hero.id == id).cloned()
    }

    /// Heroes whose name contains `term`, ignoring case.
    ///
    /// An empty term matches everything.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<Hero> {
        let needle = term.to_lowercase();
        self.heroes
            .iter()
            .filter(|hero| hero.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Next id: one past the current maximum, or [`FIRST_ID`] when empty.
    ///
    /// `None` once a hero holds `HeroId::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<HeroId> {
        self.heroes
            .iter()
            .map(|hero| hero.id)
            .max()
            .map_or(Some(FIRST_ID), |max| max.checked_add(1))
    }

    /// Insert a new hero with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the name is blank or no id is
    /// left above the current maximum.
    pub fn insert(&mut self, new: NewHero) -> Result<Hero, CoreError> {
        let name = validate_name(&new.name)?;
        let id = self
            .next_id()
            .ok_or_else(|| CoreError::Validation("no hero id left to assign".into()))?;
        let hero = Hero::new(id, name);
        self.heroes.push(hero.clone());
        Ok(hero)
    }

    /// Replace the hero with the same id, or append it when unknown.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the name is blank.
    pub fn upsert(&mut self, hero: Hero) -> Result<Upserted, CoreError> {
        validate_name(&hero.name)?;
        Ok(self.put(hero))
    }

    /// Remove a hero. Returns whether it existed.
    pub fn remove(&mut self, id: HeroId) -> bool {
        let before = self.heroes.len();
        self.heroes.retain(|hero| hero.id != id);
        self.heroes.len() != before
    }

    fn put(&mut self, hero: Hero) -> Upserted {
        if let Some(existing) = self.heroes.iter_mut().find(|h| h.id == hero.id) {
            *existing = hero;
            Upserted::Replaced
        } else {
            self.heroes.push(hero);
            Upserted::Inserted
        }
    }
}

fn validate_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("hero name must not be blank".into()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn names(heroes: &[Hero]) -> Vec<&str> {
        heroes.iter().map(|hero| hero.name.as_str()).collect()
    }

    #[test]
    fn seeded_table_has_tutorial_heroes() {
        let table = HeroTable::seeded();
        assert_eq!(table.len(), 9);
        assert_eq!(table.get(12), Some(Hero::new(12, "Dr. Nice")));
        assert_eq!(table.get(20), Some(Hero::new(20, "Tornado")));
        assert_eq!(table.next_id(), Some(21));
    }

    #[test]
    fn empty_table_starts_at_first_id() {
        let mut table = HeroTable::new();
        let hero = table
            .insert(NewHero {
                name: "Zorro".into(),
            })
            .unwrap();
        assert_eq!(hero.id, FIRST_ID);
    }

    #[test]
    fn insert_assigns_fresh_id_and_trims() {
        let mut table = HeroTable::seeded();
        let hero = table
            .insert(NewHero {
                name: "  Zorro ".into(),
            })
            .unwrap();
        assert_eq!(hero, Hero::new(21, "Zorro"));
        assert_eq!(table.list().last(), Some(&hero));
    }

    #[test]
    fn insert_rejects_blank_name() {
        let mut table = HeroTable::seeded();
        let err = table.insert(NewHero { name: "  ".into() }).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(table.len(), 9);
    }

    #[rstest]
    #[case("ma", vec!["Magneta", "RubberMan", "Dynama", "Magma"])]
    #[case("MA", vec!["Magneta", "RubberMan", "Dynama", "Magma"])]
    #[case("dr.", vec!["Dr. Nice", "Dr. IQ"])]
    #[case("zzz", vec![])]
    fn search_is_case_insensitive_substring(#[case] term: &str, #[case] expected: Vec<&str>) {
        let table = HeroTable::seeded();
        assert_eq!(names(&table.search(term)), expected);
    }

    #[test]
    fn upsert_replaces_or_inserts() {
        let mut table = HeroTable::seeded();
        assert_eq!(
            table.upsert(Hero::new(13, "Bombastic")).unwrap(),
            Upserted::Replaced
        );
        assert_eq!(table.get(13).unwrap().name, "Bombastic");
        assert_eq!(
            table.upsert(Hero::new(99, "Stray")).unwrap(),
            Upserted::Inserted
        );
        assert_eq!(table.len(), 10);
        assert_eq!(table.next_id(), Some(100));
    }

    #[test]
    fn remove_reports_existence() {
        let mut table = HeroTable::seeded();
        assert!(table.remove(15));
        assert!(!table.remove(15));
        assert!(table.get(15).is_none());
    }

    #[test]
    fn insert_fails_when_ids_are_exhausted() {
        let mut table = HeroTable::with_heroes([Hero::new(HeroId::MAX, "Omega")]);
        assert_eq!(table.next_id(), None);
        let err = table
            .insert(NewHero {
                name: "Zorro".into(),
            })
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn with_heroes_deduplicates_by_id() {
        let table = HeroTable::with_heroes([Hero::new(1, "A"), Hero::new(1, "B")]);
        assert_eq!(table.list(), vec![Hero::new(1, "B")]);
    }
}
