use hero_client::{HeroService, HeroStore};
use hero_core::entities::Hero;

/// Query side of the pipeline.
///
/// Implementations must absorb their own failures and answer with a list;
/// the pipeline has no error path.
pub trait Searcher: Clone + Send + Sync + 'static {
    fn search(&self, term: &str) -> impl Future<Output = Vec<Hero>> + Send;
}

impl<S: HeroStore> Searcher for HeroService<S> {
    fn search(&self, term: &str) -> impl Future<Output = Vec<Hero>> + Send {
        Self::search(self, term)
    }
}
