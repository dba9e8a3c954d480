use std::time::Duration;

use anyhow::Context;
use hero_client::HeroStore;
use hero_core::entities::Hero;
use hero_search::{PipelineConfig, SearchOutcome, SearchPipeline};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::root_commands::SearchArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::render;

#[derive(Debug, Serialize)]
struct SearchResponse {
    term: String,
    heroes: Vec<Hero>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            term: outcome.term,
            heroes: outcome.heroes,
        }
    }
}

/// Handle `toh search`.
///
/// Each argument (or stdin line) is one state of the search box. Results are
/// printed as the pipeline delivers them.
pub async fn handle<S: HeroStore>(
    args: &SearchArgs,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let config = PipelineConfig::from(&ctx.config.search);
    let (pipeline, mut results) = SearchPipeline::spawn(ctx.service.clone(), config);

    let format = flags.format;
    let printer = tokio::spawn(async move {
        while let Some(outcome) = results.recv().await {
            println!("{}", render_outcome(outcome, format)?);
        }
        anyhow::Ok(())
    });

    let interval = Duration::from_millis(args.interval_ms);
    if args.terms.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("failed to read search term")? {
            pipeline.push(line);
        }
    } else {
        for (index, term) in args.terms.iter().enumerate() {
            if index > 0 && !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }
            pipeline.push(term.as_str());
        }
    }

    pipeline.close().await;
    printer.await.context("search output task failed")?
}

fn render_outcome(outcome: SearchOutcome, format: OutputFormat) -> anyhow::Result<String> {
    let response = SearchResponse::from(outcome);
    match format {
        OutputFormat::Table => {
            let table = render(&response.heroes, format)?;
            Ok(format!("search \"{}\":\n{table}", response.term))
        }
        OutputFormat::Json | OutputFormat::Raw => render(&response, format),
    }
}
