use serde::{Deserialize, Serialize};

/// Server-assigned hero identifier.
pub type HeroId = u32;

/// A hero record. The id is assigned by the data store and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    #[must_use]
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Payload for creating a hero. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    /// Build a create payload from user input.
    ///
    /// The name is trimmed; returns `None` when nothing is left.
    #[must_use]
    pub fn from_input(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(Self {
                name: name.to_string(),
            })
        }
    }
}
