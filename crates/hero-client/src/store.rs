//! Transport seam between [`HeroService`](crate::HeroService) and a data store.

use hero_core::entities::{Hero, HeroId, NewHero};

use crate::error::ClientError;

/// Raw CRUD operations against a hero data store.
///
/// Implementations report failures as [`ClientError`]; the fallback policy
/// lives one layer up in [`HeroService`](crate::HeroService). Futures are
/// `Send` so operations can run on spawned tasks.
pub trait HeroStore: Send + Sync + 'static {
    /// `GET /heroes`
    fn list(&self) -> impl Future<Output = Result<Vec<Hero>, ClientError>> + Send;

    /// `GET /heroes/{id}`; a missing hero is [`ClientError::NotFound`].
    fn get(&self, id: HeroId) -> impl Future<Output = Result<Hero, ClientError>> + Send;

    /// `GET /heroes?id={id}`; a missing hero is `Ok(None)`.
    fn find(&self, id: HeroId) -> impl Future<Output = Result<Option<Hero>, ClientError>> + Send;

    /// `POST /heroes`; returns the hero with its assigned id.
    fn create(&self, hero: &NewHero) -> impl Future<Output = Result<Hero, ClientError>> + Send;

    /// `PUT /heroes`
    fn update(&self, hero: &Hero) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// `DELETE /heroes/{id}`
    fn delete(&self, id: HeroId) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// `GET /heroes?name={term}`
    fn search(&self, term: &str) -> impl Future<Output = Result<Vec<Hero>, ClientError>> + Send;
}
