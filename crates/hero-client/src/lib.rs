//! # hero-client
//!
//! Hero access client for Tour of Heroes.
//!
//! - [`HeroStore`]: raw CRUD transport, implemented by [`HttpHeroStore`]
//!   (REST via `reqwest`) and [`MemoryHeroStore`] (in-process table)
//! - [`HeroService`]: the client the rest of the app talks to; failures
//!   are logged and replaced with fallbacks, never returned
//! - [`MessageLog`]: append-only outcome log with subscribers
//! - [`HeroRoster`]: local list state with optimistic deletes

mod error;
mod http;
pub mod memory;
pub mod messages;
pub mod remote;
pub mod roster;
pub mod service;
mod store;

pub use error::ClientError;
pub use memory::MemoryHeroStore;
pub use messages::{MessageLog, SubscriptionId};
pub use remote::HttpHeroStore;
pub use roster::HeroRoster;
pub use service::HeroService;
pub use store::HeroStore;
