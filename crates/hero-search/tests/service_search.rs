//! Pipeline driven by a real `HeroService`.

use std::sync::Arc;
use std::time::Duration;

use hero_client::{ClientError, HeroService, HeroStore, MemoryHeroStore, MessageLog};
use hero_core::entities::{Hero, HeroId, NewHero};
use hero_search::{PipelineConfig, SearchPipeline};
use pretty_assertions::assert_eq;
use tokio::time::sleep;

/// Store that is up for reads of the list but fails every search.
struct SearchOffline;

impl HeroStore for SearchOffline {
    async fn list(&self) -> Result<Vec<Hero>, ClientError> {
        Ok(Vec::new())
    }
    async fn get(&self, id: HeroId) -> Result<Hero, ClientError> {
        Err(ClientError::NotFound(format!("hero id={id}")))
    }
    async fn find(&self, _id: HeroId) -> Result<Option<Hero>, ClientError> {
        Ok(None)
    }
    async fn create(&self, _hero: &NewHero) -> Result<Hero, ClientError> {
        Err(ClientError::Store("read only".into()))
    }
    async fn update(&self, _hero: &Hero) -> Result<(), ClientError> {
        Err(ClientError::Store("read only".into()))
    }
    async fn delete(&self, _id: HeroId) -> Result<(), ClientError> {
        Err(ClientError::Store("read only".into()))
    }
    async fn search(&self, _term: &str) -> Result<Vec<Hero>, ClientError> {
        Err(ClientError::Store("search index offline".into()))
    }
}

fn config() -> PipelineConfig {
    PipelineConfig {
        debounce: Duration::from_millis(300),
        query_timeout: Some(Duration::from_secs(5)),
    }
}

#[tokio::test(start_paused = true)]
async fn typing_a_name_finds_matching_heroes() {
    let store = MemoryHeroStore::seeded().with_latency(Duration::from_millis(40));
    let service = HeroService::new(store, Arc::new(MessageLog::new()));
    let (pipeline, mut results) = SearchPipeline::spawn(service.clone(), config());

    for term in ["m", "ma", "mag"] {
        pipeline.push(term);
        sleep(Duration::from_millis(80)).await;
    }

    let outcome = results.recv().await.unwrap();
    assert_eq!(outcome.term, "mag");
    assert_eq!(
        outcome.heroes,
        vec![Hero::new(15, "Magneta"), Hero::new(19, "Magma")]
    );
    assert_eq!(
        service.messages().messages(),
        vec!["HeroService: found heroes matching \"mag\""]
    );

    pipeline.close().await;
    assert_eq!(results.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn failed_search_yields_empty_and_pipeline_continues() {
    let service = HeroService::new(SearchOffline, Arc::new(MessageLog::new()));
    let (pipeline, mut results) = SearchPipeline::spawn(service.clone(), config());

    pipeline.push("dr");
    let first = results.recv().await.unwrap();
    assert_eq!(first.term, "dr");
    assert!(first.heroes.is_empty());

    pipeline.push("dr i");
    let second = results.recv().await.unwrap();
    assert_eq!(second.term, "dr i");
    assert!(second.heroes.is_empty());

    assert_eq!(
        service.messages().messages(),
        vec![
            "HeroService: searchHeroes failed: store error: search index offline",
            "HeroService: searchHeroes failed: store error: search index offline",
        ]
    );
    pipeline.close().await;
}
