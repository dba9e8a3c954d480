//! Entity structs for hero domain objects.
//!
//! All structs derive `Serialize` and `Deserialize`; the JSON form is the
//! wire format of the REST data store.

mod hero;

pub use hero::{Hero, HeroId, NewHero};
