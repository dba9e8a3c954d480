//! Debounce → distinct → latest-wins driver.

use std::time::Duration;

use hero_config::SearchConfig;
use hero_core::entities::Hero;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::Instant;

use crate::searcher::Searcher;

/// Timing knobs for [`SearchPipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Quiet period a term must survive before it is forwarded.
    pub debounce: Duration,
    /// Upper bound on one query; `None` waits forever.
    pub query_timeout: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for PipelineConfig {
    fn from(config: &SearchConfig) -> Self {
        Self {
            debounce: config.debounce(),
            query_timeout: config.query_timeout(),
        }
    }
}

/// One delivered result: the term that was dispatched and its heroes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub term: String,
    pub heroes: Vec<Hero>,
}

/// Input handle of a running pipeline.
///
/// Dropping the handle closes the input; the driver then flushes any
/// pending term, waits for the current query, and ends the result stream.
pub struct SearchPipeline {
    terms: mpsc::UnboundedSender<String>,
    driver: JoinHandle<()>,
}

impl SearchPipeline {
    /// Start the driver task. Must be called within a tokio runtime.
    ///
    /// Returns the input handle and the receiving end of the result stream.
    pub fn spawn<Q: Searcher>(
        searcher: Q,
        config: PipelineConfig,
    ) -> (Self, mpsc::UnboundedReceiver<SearchOutcome>) {
        let (terms_tx, terms_rx) = mpsc::unbounded_channel();
        let (output_tx, output_rx) = mpsc::unbounded_channel();

        let (driver, finished) = Driver::new(searcher, config, output_tx);
        let driver = tokio::spawn(driver.run(terms_rx, finished));

        (
            Self {
                terms: terms_tx,
                driver,
            },
            output_rx,
        )
    }

    /// Submit a raw term. Returns `false` once the pipeline has stopped.
    pub fn push(&self, term: impl Into<String>) -> bool {
        self.terms.send(term.into()).is_ok()
    }

    /// Close the input and wait until every result has been delivered.
    pub async fn close(self) {
        drop(self.terms);
        if let Err(error) = self.driver.await {
            tracing::warn!(%error, "search pipeline driver failed");
        }
    }

    /// Tear the pipeline down without delivering anything further.
    pub fn abort(self) {
        self.driver.abort();
    }
}

/// A query's answer, reported back to the driver by its query task.
#[derive(Debug)]
struct Finished {
    generation: u64,
    term: String,
    heroes: Vec<Hero>,
}

struct InFlight {
    generation: u64,
    term: String,
    query: AbortHandle,
}

struct Driver<Q> {
    searcher: Q,
    config: PipelineConfig,
    output: mpsc::UnboundedSender<SearchOutcome>,
    finished: mpsc::UnboundedSender<Finished>,
    /// Latest raw term still inside its quiet period.
    pending: Option<String>,
    deadline: Option<Instant>,
    /// Last term that made it through the debounce stage.
    last_forwarded: Option<String>,
    /// Bumped on every dispatch; only the current generation may deliver.
    generation: u64,
    in_flight: Option<InFlight>,
}

impl<Q: Searcher> Driver<Q> {
    fn new(
        searcher: Q,
        config: PipelineConfig,
        output: mpsc::UnboundedSender<SearchOutcome>,
    ) -> (Self, mpsc::UnboundedReceiver<Finished>) {
        let (finished_tx, finished_rx) = mpsc::unbounded_channel();
        let driver = Self {
            searcher,
            config,
            output,
            finished: finished_tx,
            pending: None,
            deadline: None,
            last_forwarded: None,
            generation: 0,
            in_flight: None,
        };
        (driver, finished_rx)
    }

    async fn run(
        mut self,
        mut terms: mpsc::UnboundedReceiver<String>,
        mut finished: mpsc::UnboundedReceiver<Finished>,
    ) {
        let mut input_open = true;

        loop {
            if !input_open && self.pending.is_none() && self.in_flight.is_none() {
                break;
            }

            let deadline = self.deadline.unwrap_or_else(Instant::now);
            tokio::select! {
                biased;

                term = terms.recv(), if input_open => match term {
                    Some(term) => self.debounce(term),
                    None => {
                        input_open = false;
                        if !self.flush() {
                            break;
                        }
                    }
                },
                () = tokio::time::sleep_until(deadline), if self.deadline.is_some() => {
                    if !self.flush() {
                        break;
                    }
                }
                Some(done) = finished.recv() => {
                    if !self.complete(done) {
                        break;
                    }
                }
            }
        }

        tracing::debug!(generation = self.generation, "search pipeline finished");
    }

    /// Stage 1: remember the term and restart the quiet period.
    fn debounce(&mut self, term: String) {
        self.pending = Some(term);
        self.deadline = Some(Instant::now() + self.config.debounce);
    }

    /// Forward the pending term, if any. Returns `false` if the consumer is
    /// gone.
    fn flush(&mut self) -> bool {
        self.deadline = None;
        match self.pending.take() {
            Some(term) => self.forward(term),
            None => true,
        }
    }

    /// Stage 2: drop a term equal to the previous forwarded one.
    fn forward(&mut self, term: String) -> bool {
        if self.last_forwarded.as_deref() == Some(term.as_str()) {
            tracing::debug!(%term, "search term unchanged; not re-querying");
            return true;
        }
        self.last_forwarded = Some(term.clone());
        self.dispatch(term)
    }

    /// Stage 3: supersede whatever is in flight and start a new query.
    ///
    /// A superseded query is aborted; whatever it still reports carries an
    /// old generation and is dropped in [`Self::complete`].
    fn dispatch(&mut self, term: String) -> bool {
        self.generation += 1;
        if let Some(stale) = self.in_flight.take() {
            tracing::debug!(
                term = %stale.term,
                generation = stale.generation,
                "superseding in-flight search"
            );
            stale.query.abort();
        }

        if term.trim().is_empty() {
            return self.emit(SearchOutcome {
                term,
                heroes: Vec::new(),
            });
        }

        let query = tokio::spawn(run_query(
            self.searcher.clone(),
            term.clone(),
            self.config.query_timeout,
        ));
        let abort = query.abort_handle();
        tokio::spawn(report(
            query,
            self.finished.clone(),
            self.generation,
            term.clone(),
        ));

        tracing::debug!(%term, generation = self.generation, "dispatched search");
        self.in_flight = Some(InFlight {
            generation: self.generation,
            term,
            query: abort,
        });
        true
    }

    fn complete(&mut self, done: Finished) -> bool {
        if done.generation != self.generation {
            tracing::debug!(
                term = %done.term,
                generation = done.generation,
                "discarding stale search result"
            );
            return true;
        }

        self.in_flight = None;
        self.emit(SearchOutcome {
            term: done.term,
            heroes: done.heroes,
        })
    }

    fn emit(&self, outcome: SearchOutcome) -> bool {
        if self.output.send(outcome).is_err() {
            tracing::debug!("search results receiver dropped; stopping pipeline");
            return false;
        }
        true
    }
}

impl<Q> Drop for Driver<Q> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.query.abort();
        }
    }
}

/// One query, bounded by the optional timeout.
async fn run_query<Q: Searcher>(
    searcher: Q,
    term: String,
    timeout: Option<Duration>,
) -> Vec<Hero> {
    let Some(limit) = timeout else {
        return searcher.search(&term).await;
    };
    if let Ok(heroes) = tokio::time::timeout(limit, searcher.search(&term)).await {
        heroes
    } else {
        tracing::warn!(%term, ?limit, "search query timed out");
        Vec::new()
    }
}

/// Wait for a query task and report its answer. A cancelled or panicked
/// query reports an empty list.
async fn report(
    query: JoinHandle<Vec<Hero>>,
    finished: mpsc::UnboundedSender<Finished>,
    generation: u64,
    term: String,
) {
    let heroes = match query.await {
        Ok(heroes) => heroes,
        Err(error) if error.is_cancelled() => Vec::new(),
        Err(error) => {
            tracing::warn!(%term, %error, "search query failed");
            Vec::new()
        }
    };
    // The driver may already be gone.
    let _ = finished.send(Finished {
        generation,
        term,
        heroes,
    });
}
