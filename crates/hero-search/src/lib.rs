//! # hero-search
//!
//! Turns a high-frequency stream of search terms (one per keystroke) into a
//! low-frequency stream of search results.
//!
//! Three stages run inside one driver task:
//! 1. **Debounce**: a term is forwarded only after a quiet period with no
//!    newer term.
//! 2. **Distinct**: a forwarded term equal to the previous forwarded term is
//!    dropped.
//! 3. **Latest wins**: every surviving term dispatches one query tagged with
//!    a generation number. A result is delivered only if its generation is
//!    still current, so a slow answer to an old term never overwrites a
//!    newer one.
//!
//! ```no_run
//! # async fn demo() {
//! use std::sync::Arc;
//! use hero_client::{HeroService, MemoryHeroStore, MessageLog};
//! use hero_search::{PipelineConfig, SearchPipeline};
//!
//! let service = HeroService::new(MemoryHeroStore::seeded(), Arc::new(MessageLog::new()));
//! let (pipeline, mut results) = SearchPipeline::spawn(service, PipelineConfig::default());
//! pipeline.push("m");
//! pipeline.push("ma");
//! pipeline.push("mag");
//! pipeline.close().await;
//! while let Some(outcome) = results.recv().await {
//!     println!("{}: {} heroes", outcome.term, outcome.heroes.len());
//! }
//! # }
//! ```

mod pipeline;
mod searcher;

pub use pipeline::{PipelineConfig, SearchOutcome, SearchPipeline};
pub use searcher::Searcher;
